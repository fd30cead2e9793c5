//! Call-site macros. Each one captures `file!()`, `line!()` and the
//! enclosing function, checks the threshold, and only then evaluates its
//! format arguments.
//!
//! Every macro takes an optional leading `logger: <&Logger>,` to target an
//! explicit logger instead of the process-wide one.
//!
//! With the `enabled` feature off, the expansions sit behind `if false`: the
//! arguments still type-check but are never evaluated and the optimizer
//! removes them.

/// Name of the function the macro is expanded in.
///
/// Closures report the function that contains them.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __f() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::fmt::enclosing_function(__type_name_of(__f))
    }};
}

/// The current call site as a [`Location`](crate::fmt::Location).
#[macro_export]
macro_rules! here {
    () => {
        $crate::fmt::Location::new(::core::file!(), ::core::line!(), $crate::function_name!())
    };
}

#[cfg(feature = "enabled")]
#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    (logger: $logger:expr, $level:expr, when: $cond:expr, $($arg:tt)+) => {{
        if $cond {
            $crate::__log!(logger: $logger, $level, $($arg)+);
        }
    }};
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = $logger;
        let level: $crate::Level = $level;
        if logger.enabled(level) {
            logger.log(level, $crate::here!(), ::core::format_args!($($arg)+));
        }
    }};
}

#[cfg(not(feature = "enabled"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    (logger: $logger:expr, $level:expr, when: $cond:expr, $($arg:tt)+) => {{
        if false {
            let _: bool = $cond;
            $crate::__log!(logger: $logger, $level, $($arg)+);
        }
    }};
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {{
        if false {
            let _: &$crate::Logger = $logger;
            let _: $crate::Level = $level;
            $crate::__discard(::core::format_args!($($arg)+));
        }
    }};
}

/// Logs at an explicit level: `log!(Level::Warn, "retry {n}")`.
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $logger, $level, $($arg)+)
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $crate::logger(), $level, $($arg)+)
    };
}

/// Logs at `Error`.
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $logger, $crate::Level::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log!(logger: $crate::logger(), $crate::Level::Error, $($arg)+)
    };
}

/// Logs at `Warn`.
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $logger, $crate::Level::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log!(logger: $crate::logger(), $crate::Level::Warn, $($arg)+)
    };
}

/// Logs at `Info`.
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $logger, $crate::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log!(logger: $crate::logger(), $crate::Level::Info, $($arg)+)
    };
}

/// Logs at `Debug`.
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $logger, $crate::Level::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log!(logger: $crate::logger(), $crate::Level::Debug, $($arg)+)
    };
}

/// Logs at `Trace`.
#[macro_export]
macro_rules! trace {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $logger, $crate::Level::Trace, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log!(logger: $crate::logger(), $crate::Level::Trace, $($arg)+)
    };
}

/// Logs at `Error` only when the condition holds.
#[macro_export]
macro_rules! error_if {
    (logger: $logger:expr, $cond:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $logger, $crate::Level::Error, when: $cond, $($arg)+)
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $crate::logger(), $crate::Level::Error, when: $cond, $($arg)+)
    };
}

/// Logs at `Warn` only when the condition holds.
#[macro_export]
macro_rules! warn_if {
    (logger: $logger:expr, $cond:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $logger, $crate::Level::Warn, when: $cond, $($arg)+)
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $crate::logger(), $crate::Level::Warn, when: $cond, $($arg)+)
    };
}

/// Logs at `Info` only when the condition holds.
#[macro_export]
macro_rules! info_if {
    (logger: $logger:expr, $cond:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $logger, $crate::Level::Info, when: $cond, $($arg)+)
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $crate::logger(), $crate::Level::Info, when: $cond, $($arg)+)
    };
}

/// Logs at `Debug` only when the condition holds.
#[macro_export]
macro_rules! debug_if {
    (logger: $logger:expr, $cond:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $logger, $crate::Level::Debug, when: $cond, $($arg)+)
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $crate::logger(), $crate::Level::Debug, when: $cond, $($arg)+)
    };
}

/// Logs at `Trace` only when the condition holds.
#[macro_export]
macro_rules! trace_if {
    (logger: $logger:expr, $cond:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $logger, $crate::Level::Trace, when: $cond, $($arg)+)
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $crate::logger(), $crate::Level::Trace, when: $cond, $($arg)+)
    };
}

/// Debug marker at the top of a function.
#[macro_export]
macro_rules! log_entry {
    () => {
        $crate::debug!("Entering function")
    };
    (logger: $logger:expr) => {
        $crate::debug!(logger: $logger, "Entering function")
    };
}

/// Debug marker before a function returns.
#[macro_export]
macro_rules! log_exit {
    () => {
        $crate::debug!("Exiting function")
    };
    (logger: $logger:expr) => {
        $crate::debug!(logger: $logger, "Exiting function")
    };
}

/// Debug marker for one-line functions.
#[macro_export]
macro_rules! log_called {
    () => {
        $crate::debug!("Function called")
    };
    (logger: $logger:expr) => {
        $crate::debug!(logger: $logger, "Function called")
    };
}
