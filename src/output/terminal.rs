//! The default backend: one line per record on stdout or stderr, flushed
//! immediately so nothing is lost if the process dies right after a log call.

use super::{LogRecord, Output};
use crate::fmt::LineFormat;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// Which standard stream receives the lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

impl Stream {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` for anything other than a known stream name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStreamError(String);

impl ParseStreamError {
    /// The string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseStreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown stream: '{}'", self.0)
    }
}

impl std::error::Error for ParseStreamError {}

impl FromStr for Stream {
    type Err = ParseStreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stdout" | "out" => Ok(Self::Stdout),
            "stderr" | "err" => Ok(Self::Stderr),
            _ => Err(ParseStreamError(s.to_string())),
        }
    }
}

/// Terminal rendering state: target stream and visible columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalOutput {
    stream: Stream,
    format: LineFormat,
}

impl TerminalOutput {
    /// Stdout with every column enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
    }

    /// Piped output and CI logs can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.format = self.format.colors(enabled);
        self
    }

    #[must_use]
    pub const fn timestamp(mut self, enabled: bool) -> Self {
        self.format = self.format.timestamp(enabled);
        self
    }

    #[must_use]
    pub const fn file_info(mut self, enabled: bool) -> Self {
        self.format = self.format.file_info(enabled);
        self
    }

    #[must_use]
    pub const fn format(mut self, format: LineFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn line_format(&self) -> LineFormat {
        self.format
    }

    #[must_use]
    pub const fn target(&self) -> Stream {
        self.stream
    }
}

/// Holding the stream lock across write and flush keeps concurrent lines whole.
fn write_locked(mut out: impl Write, line: &str) -> io::Result<()> {
    out.write_all(line.as_bytes())?;
    out.flush()
}

impl Output for TerminalOutput {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), crate::Error> {
        let line = self.format.render_line(record);
        match self.stream {
            Stream::Stdout => write_locked(io::stdout().lock(), &line)?,
            Stream::Stderr => write_locked(io::stderr().lock(), &line)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_parses_aliases() {
        assert_eq!("stdout".parse::<Stream>(), Ok(Stream::Stdout));
        assert_eq!("ERR".parse::<Stream>(), Ok(Stream::Stderr));
        let err = "printer".parse::<Stream>().unwrap_err();
        assert_eq!(err, ParseStreamError("printer".to_string()));
        assert_eq!(err.input(), "printer");
        assert_eq!(err.to_string(), "unknown stream: 'printer'");
    }

    #[test]
    fn defaults_to_stdout_with_every_column() {
        let output = TerminalOutput::new();
        assert_eq!(output.target(), Stream::Stdout);
        assert_eq!(output.line_format(), LineFormat::new());
    }

    #[test]
    fn builder_switches_reach_line_format() {
        let output = TerminalOutput::new()
            .stream(Stream::Stderr)
            .colors(false)
            .timestamp(false);
        assert_eq!(output.target(), Stream::Stderr);
        assert_eq!(
            output.line_format(),
            LineFormat::new().colors(false).timestamp(false)
        );
    }
}
