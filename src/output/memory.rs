//! Keeps rendered lines in memory so tests and embedders can inspect them.

use super::{LogRecord, Output};
use crate::fmt::LineFormat;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloning shares the buffer: hand one clone to the logger, keep another to read from.
#[derive(Debug, Clone)]
pub struct MemoryOutput {
    lines: Arc<Mutex<Vec<String>>>,
    format: LineFormat,
}

impl Default for MemoryOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryOutput {
    /// Plain lines, no trailing newline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
            format: LineFormat::plain(),
        }
    }

    #[must_use]
    pub const fn format(mut self, format: LineFormat) -> Self {
        self.format = format;
        self
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of everything captured so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.buffer().clone()
    }

    /// Drains the buffer.
    #[must_use]
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.buffer())
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }
}

impl Output for MemoryOutput {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), crate::Error> {
        let line = self.format.render(record);
        self.buffer().push(line);
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
