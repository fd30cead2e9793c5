//! Any `io::Write` as a log sink: sockets, pipes, in-memory buffers.

use super::{LogRecord, Output};
use crate::fmt::LineFormat;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Wraps a writer in a mutex so each line is written by one thread at a time.
#[derive(Debug)]
pub struct WriterOutput<W> {
    writer: Mutex<W>,
    format: LineFormat,
}

impl<W: Write + Send> WriterOutput<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            format: LineFormat::plain(),
        }
    }

    #[must_use]
    pub const fn format(mut self, format: LineFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Output for WriterOutput<W> {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), crate::Error> {
        let line = self.format.render_line(record);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()?;
        Ok(())
    }
}
