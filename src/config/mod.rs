//! TOML configuration for the runtime side of the logger: initial threshold
//! and which outputs render which columns.
//!
//! The compile-time side lives in [`compiled`].

pub mod compiled;
mod structs;

pub use structs::{FileConfig, GeneralConfig, TerminalConfig};

use crate::level::Level;
use crate::output::Stream;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working logger, so
/// every section falls back to its defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub terminal: TerminalConfig,
    pub file: FileConfig,
}

impl Config {
    /// Loads the config from the default location; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or the TOML is malformed.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses TOML text.
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigParse`] on malformed TOML.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/mammut-log/config.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "mammut-log")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Unknown strings fall back to `Debug`, the default threshold.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or(Level::Debug)
    }

    /// Like [`parse_level`](Self::parse_level) but reports typos.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidLevel`] for an unknown level string.
    pub fn try_level(&self) -> Result<Level, crate::Error> {
        Ok(self.general.level.parse::<Level>()?)
    }

    /// Unknown strings fall back to stdout.
    #[must_use]
    pub fn parse_stream(&self) -> Stream {
        self.terminal.stream.parse().unwrap_or_default()
    }
}
