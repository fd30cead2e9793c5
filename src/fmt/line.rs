//! Composition of one complete log line:
//! `[<elapsed_us>] <LEVEL> <file>:<line> <function>() <message>`.

use super::Color;
use crate::config::compiled;
use crate::output::LogRecord;
use std::fmt::Write;

/// Which optional columns an output renders.
///
/// Each switch only takes effect when the matching Cargo feature is compiled
/// in; a feature that is off wins over a switch that is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFormat {
    colors: bool,
    timestamp: bool,
    file_info: bool,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl LineFormat {
    /// Every column on, matching the compiled defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors: true,
            timestamp: true,
            file_info: true,
        }
    }

    /// No ANSI escapes; for files, pipes and captured output.
    #[must_use]
    pub const fn plain() -> Self {
        Self::new().colors(false)
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    #[must_use]
    pub const fn timestamp(mut self, enabled: bool) -> Self {
        self.timestamp = enabled;
        self
    }

    #[must_use]
    pub const fn file_info(mut self, enabled: bool) -> Self {
        self.file_info = enabled;
        self
    }

    #[must_use]
    pub const fn uses_colors(&self) -> bool {
        self.colors && compiled::COLOR
    }

    #[must_use]
    pub const fn shows_timestamp(&self) -> bool {
        self.timestamp && compiled::TIMESTAMP
    }

    #[must_use]
    pub const fn shows_file_info(&self) -> bool {
        self.file_info && compiled::FILE_INFO
    }

    /// Renders the record without a trailing newline.
    #[must_use]
    pub fn render(&self, record: &LogRecord<'_>) -> String {
        let mut line = String::with_capacity(96);

        // Writing into a String cannot fail.
        if self.shows_timestamp() {
            let _ = write!(line, "[{:>8}] ", record.elapsed_us);
        }

        if self.uses_colors() {
            line.push_str(record.level.color().fg_ansi());
            line.push_str(record.level.mnemonic());
            line.push_str(Color::RESET);
        } else {
            line.push_str(record.level.mnemonic());
        }
        line.push(' ');

        if self.shows_file_info() {
            let location = &record.location;
            let _ = write!(
                line,
                "{}:{} {}() ",
                location.file_name(),
                location.line(),
                location.function()
            );
        }

        let _ = write!(line, "{}", record.args);
        line
    }

    /// [`render`](Self::render) plus the terminating newline, ready for a single write.
    #[must_use]
    pub fn render_line(&self, record: &LogRecord<'_>) -> String {
        let mut line = self.render(record);
        line.push('\n');
        line
    }
}
