//! Diagnostic types for error reporting.

mod error;

pub use error::ParseError;
