//! Line rendering is split by concern: terminal colors, call-site
//! locations, and the composition of a full log line.

mod color;
mod line;
mod location;

pub use color::Color;
pub use line::LineFormat;
pub use location::{Location, base_name, enclosing_function};
