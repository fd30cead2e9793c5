//! Configuration struct definitions.

use serde::Deserialize;
use std::path::PathBuf;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Initial threshold.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

/// Terminal output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Enable terminal output.
    pub enabled: bool,
    /// Target stream (stdout, stderr).
    pub stream: String,
    /// Enable colors.
    pub colors: bool,
    /// Show the elapsed-time column.
    pub timestamp: bool,
    /// Show the call-site column.
    pub file_info: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stream: "stdout".to_string(),
            colors: true,
            timestamp: true,
            file_info: true,
        }
    }
}

/// File output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Enable file output.
    pub enabled: bool,
    /// Log file path.
    pub path: String,
    /// Show the elapsed-time column.
    pub timestamp: bool,
    /// Show the call-site column.
    pub file_info: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        let path = directories::ProjectDirs::from("", "", "mammut-log").map_or_else(
            || PathBuf::from("logs").join("mammut.log"),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("mammut.log")
            },
        );

        Self {
            enabled: false,
            path: path.to_string_lossy().into_owned(),
            timestamp: true,
            file_info: true,
        }
    }
}
