//! Call-site annotation: where a log line came from.

/// Source position captured by the logging macros via `file!()`, `line!()`
/// and [`function_name!`](crate::function_name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    file: &'static str,
    line: u32,
    function: &'static str,
}

impl Location {
    #[must_use]
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// The path as the compiler reported it.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// The final path segment only, which is what gets printed.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        base_name(self.file)
    }

    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.function
    }
}

/// Text after the last `/` or `\`, or the whole string when there is no separator.
#[must_use]
pub fn base_name(path: &str) -> &str {
    path.rfind(['/', '\\']).map_or(path, |idx| &path[idx + 1..])
}

/// Reduces the type name of a marker fn declared inside a function body
/// (`my_crate::net::connect::__f`) to the enclosing function's name (`connect`).
///
/// Closure and async-block frames (`{{closure}}`) are skipped so a log call
/// inside a closure still reports the function that owns it.
#[doc(hidden)]
#[must_use]
pub fn enclosing_function(type_name: &'static str) -> &'static str {
    let mut path = type_name.strip_suffix("::__f").unwrap_or(type_name);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}
