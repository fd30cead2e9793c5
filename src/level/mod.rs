//! Severity levels and the ordering the threshold filter relies on.

use crate::fmt::Color;
use std::fmt;
use std::str::FromStr;

/// Ordered by rank: `Error` (0) is the most important, `Trace` (4) the least.
///
/// A record passes the filter when `record_level <= threshold`, so the derived
/// `Ord` follows the rank rather than "loudness".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Unrecoverable failures that prevent the operation from completing.
    Error = 0,
    /// Non-fatal anomalies that may need attention.
    Warn = 1,
    /// Normal operational milestones.
    Info = 2,
    /// Diagnostics for development; the threshold a fresh logger starts at.
    #[default]
    Debug = 3,
    /// High-volume instrumentation.
    Trace = 4,
}

impl Level {
    /// Numeric rank; lower means more important.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Level::rank`]. Out-of-range ranks clamp to `Trace`.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Self::Error,
            1 => Self::Warn,
            2 => Self::Info,
            3 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Lowercase because config files use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Fixed five-column tag so the location column always starts at the same offset.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN ",
            Self::Info => "INFO ",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Error => Color::Red,
            Self::Warn => Color::Yellow,
            Self::Info => Color::Green,
            Self::Debug => Color::Cyan,
            Self::Trace => Color::Magenta,
        }
    }

    /// Most important first.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" | "err" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_round_trips_for_every_level() {
        for level in Level::all() {
            assert_eq!(Level::from_rank(level.rank()), level);
        }
    }

    #[test]
    fn out_of_range_rank_clamps_to_trace() {
        assert_eq!(Level::from_rank(200), Level::Trace);
    }

    #[test]
    fn mnemonics_are_five_columns() {
        for level in Level::all() {
            assert_eq!(level.mnemonic().len(), 5);
        }
    }
}
