//! Cargo-feature switches as constants, so runtime code can branch on them
//! without scattering `cfg!` calls.

/// Feature `enabled`: when false every logging macro is a no-op.
pub const LOGGING: bool = cfg!(feature = "enabled");

/// Feature `color`: ANSI severity colors.
pub const COLOR: bool = cfg!(feature = "color");

/// Feature `timestamp`: the `[elapsed_us]` column.
pub const TIMESTAMP: bool = cfg!(feature = "timestamp");

/// Feature `file-info`: the `file:line function()` column.
pub const FILE_INFO: bool = cfg!(feature = "file-info");
