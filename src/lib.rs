//! `mammut-log` - leveled, timestamped, colorized console logging.
//!
//! Every line carries the microseconds elapsed since the first log-related
//! call, a colored five-column severity tag, and the call site:
//!
//! ```text
//! [    1234] INFO  main.rs:42 run() Server started on port 8080
//! ```
//!
//! A single threshold decides what gets written: a record passes when its
//! level is at least as important as the threshold (`Error` > `Warn` >
//! `Info` > `Debug` > `Trace`). The process-wide threshold starts at `Debug`.
//!
//! # Example
//!
//! ```
//! use mammut_log::{Level, debug, info, info_if, warn};
//!
//! mammut_log::init();
//! info!("Server started on port {}", 8080);
//!
//! mammut_log::set_threshold(Level::Info);
//! debug!("filtered out, {} is never evaluated", expensive());
//! warn!("retrying");
//! info_if!(1 + 1 == 2, "conditional line");
//!
//! fn expensive() -> u64 {
//!     42
//! }
//! ```
//!
//! # Features
//!
//! All on by default:
//! - `enabled`: logging as a whole. Off turns every macro into a no-op whose
//!   arguments are never evaluated.
//! - `color`: ANSI severity colors.
//! - `timestamp`: the elapsed-microseconds column.
//! - `file-info`: the `file:line function()` column.

pub mod clock;
pub mod config;
mod error;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
mod macros;
pub mod output;

pub use config::Config;
pub use error::Error;
pub use fmt::{Color, LineFormat, Location};
pub use global::{init, init_with_config, install, is_initialized, logger, set_threshold, threshold};
pub use level::{Level, ParseLevelError};
pub use logger::{Logger, LoggerBuilder};
pub use output::{
    FileOutput, LogRecord, MemoryOutput, Output, ParseStreamError, Stream, TerminalOutput,
    WriterOutput,
};

/// Swallows the arguments of a compiled-out logging macro.
#[doc(hidden)]
pub const fn __discard(_: core::fmt::Arguments<'_>) {}
