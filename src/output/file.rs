//! Appends lines to a log file, creating parent directories on demand.

use super::{LogRecord, Output};
use crate::fmt::LineFormat;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// File output. The file is opened in append mode per record, so external
/// rotation (moving the file away) is picked up on the next line.
#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    format: LineFormat,
    /// Serializes writers within this process.
    lock: Mutex<()>,
}

impl FileOutput {
    /// Plain (uncolored) lines with timestamp and call site.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: LineFormat::plain(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub const fn format(mut self, format: LineFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Output for FileOutput {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), crate::Error> {
        let line = self.format.render_line(record);
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
