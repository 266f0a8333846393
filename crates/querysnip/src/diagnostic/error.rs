//! Parse error types.

use miette::Diagnostic;
use serde_json::error::Category;
use thiserror::Error;

/// Errors that can occur while parsing a query description.
///
/// Missing optional sections are not errors; they just emit nothing. A
/// `ParseError` means the input text itself is unusable.
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("Invalid query JSON: {message}")]
    #[diagnostic(
        code(querysnip::parse::syntax_error),
        help("The input must be a single well-formed JSON document.")
    )]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Query description has an unexpected shape: {message}")]
    #[diagnostic(
        code(querysnip::parse::shape_error),
        help("Optional sections may be omitted entirely, but members that are present must match the documented shape.")
    )]
    Shape {
        message: String,
    },
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => ParseError::Shape {
                message: err.to_string(),
            },
            _ => ParseError::Syntax {
                message: err.to_string(),
                line: err.line(),
                column: err.column(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_errors_carry_position() {
        let err = serde_json::from_str::<serde_json::Value>("{\"a\": }").unwrap_err();
        match ParseError::from(err) {
            ParseError::Syntax { line, column, .. } => {
                assert_eq!(line, 1);
                assert!(column > 0);
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn type_mismatches_classify_as_shape() {
        let err = serde_json::from_str::<Vec<String>>("{\"a\": 1}").unwrap_err();
        assert!(matches!(ParseError::from(err), ParseError::Shape { .. }));
    }
}
