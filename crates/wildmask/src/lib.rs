//! Full-string wildcard matching with `*` and `?` symbols.

mod pattern;

pub use pattern::Pattern;
