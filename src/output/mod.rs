//! Backends that receive composed log lines. The built-in terminal, file,
//! writer and memory outputs cover the common cases; the `Output` trait lets
//! callers add their own without touching the logger.

mod file;
mod memory;
mod terminal;
mod writer;

pub use file::FileOutput;
pub use memory::MemoryOutput;
pub use terminal::{ParseStreamError, Stream, TerminalOutput};
pub use writer::WriterOutput;

use crate::fmt::Location;
use crate::level::Level;
use std::fmt;

/// One log event, alive only for the duration of the dispatch. The message
/// is kept as unformatted `Arguments` so each backend formats it straight
/// into its own line buffer.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub level: Level,
    /// Microseconds since the process clock origin.
    pub elapsed_us: u64,
    pub location: Location,
    pub args: fmt::Arguments<'a>,
}

/// `Send + Sync` so one logger can be shared by every thread in the process.
///
/// Implementations must write each record as a single uninterrupted line:
/// compose first, then emit it with one write while holding a lock.
pub trait Output: Send + Sync {
    /// Renders and writes one record.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&self, record: &LogRecord<'_>) -> Result<(), crate::Error>;

    /// Pushes out anything the sink still buffers.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}
