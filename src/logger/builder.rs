//! Stepwise construction of a [`Logger`]: threshold first, then any number of outputs.

use super::Logger;
use crate::fmt::LineFormat;
use crate::level::Level;
use crate::output::{FileOutput, Output, Stream, TerminalOutput};
use std::path::PathBuf;
use std::sync::atomic::AtomicU8;

/// A builder with no outputs produces a logger that filters but writes nothing.
pub struct LoggerBuilder {
    threshold: Level,
    outputs: Vec<Box<dyn Output>>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Starts at `Debug`, the same threshold `init` restores.
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: Level::Debug,
            outputs: Vec::new(),
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.threshold = level;
        self
    }

    /// Terminal output has its own switches (stream, colors, columns).
    #[must_use]
    pub fn terminal(self) -> TerminalBuilder {
        TerminalBuilder {
            parent: self,
            output: TerminalOutput::new(),
        }
    }

    /// Appends plain lines to `path`.
    #[must_use]
    pub fn file(self, path: impl Into<PathBuf>) -> Self {
        self.output(FileOutput::new(path))
    }

    /// Any custom backend.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.outputs.push(Box::new(output));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            threshold: AtomicU8::new(self.threshold.rank()),
            outputs: self.outputs,
        }
    }
}

pub struct TerminalBuilder {
    parent: LoggerBuilder,
    output: TerminalOutput,
}

impl TerminalBuilder {
    #[must_use]
    pub const fn stream(mut self, stream: Stream) -> Self {
        self.output = self.output.stream(stream);
        self
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.output = self.output.colors(enabled);
        self
    }

    #[must_use]
    pub const fn timestamp(mut self, enabled: bool) -> Self {
        self.output = self.output.timestamp(enabled);
        self
    }

    #[must_use]
    pub const fn file_info(mut self, enabled: bool) -> Self {
        self.output = self.output.file_info(enabled);
        self
    }

    #[must_use]
    pub const fn format(mut self, format: LineFormat) -> Self {
        self.output = self.output.format(format);
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more outputs.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.outputs.push(Box::new(self.output));
        self.parent
    }
}
