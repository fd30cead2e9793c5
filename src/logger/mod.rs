//! The logger owns the severity threshold and fans each accepted record out
//! to every configured output.

mod builder;
mod from_config;

pub use builder::{LoggerBuilder, TerminalBuilder};

use crate::clock;
use crate::config::compiled;
use crate::fmt::Location;
use crate::level::Level;
use crate::output::{LogRecord, Output};
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/// Outputs are fixed at build time; only the threshold changes afterwards,
/// and it is atomic, so a `&Logger` can be shared across threads freely.
pub struct Logger {
    threshold: AtomicU8,
    outputs: Vec<Box<dyn Output>>,
}

impl Default for Logger {
    fn default() -> Self {
        LoggerBuilder::new().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold())
            .field("outputs", &self.outputs.len())
            .finish()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Replaces the threshold. Lines already written are unaffected.
    pub fn set_threshold(&self, level: Level) {
        self.threshold.store(level.rank(), Ordering::Relaxed);
    }

    #[must_use]
    pub fn threshold(&self) -> Level {
        Level::from_rank(self.threshold.load(Ordering::Relaxed))
    }

    /// Resets the threshold to `Debug`. Safe to call repeatedly.
    pub fn init(&self) {
        self.set_threshold(Level::Debug);
    }

    /// The fast-path filter: true when a `level` record would be written.
    ///
    /// Always false when the `enabled` feature is compiled out, which turns
    /// `log` and the per-level methods into no-ops as well.
    #[inline]
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        compiled::LOGGING && level.rank() <= self.threshold.load(Ordering::Relaxed)
    }

    /// Core dispatch: filters by threshold, stamps the record, then hands it
    /// to every output. Output failures are dropped so logging never fails the caller.
    pub fn log(&self, level: Level, location: Location, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        let record = LogRecord {
            level,
            elapsed_us: clock::elapsed_us(),
            location,
            args,
        };

        for output in &self.outputs {
            let _ = output.write(&record);
        }
    }

    pub fn error(&self, location: Location, args: fmt::Arguments<'_>) {
        self.log(Level::Error, location, args);
    }

    pub fn warn(&self, location: Location, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, location, args);
    }

    pub fn info(&self, location: Location, args: fmt::Arguments<'_>) {
        self.log(Level::Info, location, args);
    }

    pub fn debug(&self, location: Location, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, location, args);
    }

    pub fn trace(&self, location: Location, args: fmt::Arguments<'_>) {
        self.log(Level::Trace, location, args);
    }

    /// # Errors
    /// Returns the first I/O error encountered across all outputs.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for output in &self.outputs {
            output.flush()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }
}
