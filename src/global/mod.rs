//! The process-wide logger behind the call-anywhere macros.
//!
//! Installed at most once. If nothing is installed before the first log call,
//! a stdout terminal logger with every column enabled is created on demand.
//! The threshold stays adjustable for the life of the process.

use crate::config::Config;
use crate::level::Level;
use crate::logger::Logger;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

fn default_logger() -> Logger {
    Logger::builder().terminal().done().build()
}

/// The process-wide logger, creating the default one on first use.
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(default_logger)
}

/// Makes `logger` the process-wide logger.
///
/// # Errors
/// Returns [`crate::Error::AlreadyInstalled`] if a logger was installed
/// earlier or the default one was already created by a log call.
pub fn install(logger: Logger) -> Result<(), crate::Error> {
    GLOBAL.set(logger).map_err(|_| crate::Error::AlreadyInstalled)
}

/// Installs a logger built from `config`.
///
/// # Errors
/// Same as [`install`].
pub fn init_with_config(config: &Config) -> Result<(), crate::Error> {
    install(Logger::from_config(config))
}

/// True once a logger exists, installed or defaulted.
#[must_use]
pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

/// Sets the process-wide threshold.
pub fn set_threshold(level: Level) {
    logger().set_threshold(level);
}

/// The process-wide threshold.
#[must_use]
pub fn threshold() -> Level {
    logger().threshold()
}

/// Resets the process-wide threshold to `Debug`. Meant for process start; harmless to repeat.
pub fn init() {
    logger().init();
}
