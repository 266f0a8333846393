//! Query description data model.
//!
//! These types mirror the JSON the console's statistics widgets hand to the
//! snippet generator. Every section is optional; an `Option` here encodes
//! "present in the input" and nothing else, so emission is driven purely by
//! field presence rather than truthiness.

mod aggregate;
mod join;

pub use aggregate::{
    Aggregate, AggregateQuery, FilterItem, GroupField, GroupKey, GroupSpec, SortSpec,
};
pub use join::JoinSpec;

use serde::Deserialize;

use crate::diagnostic::ParseError;

/// Top-level query description.
///
/// The three recognized sections are emitted in fixed declaration order
/// regardless of how the input object orders its keys.
#[derive(Debug, Deserialize)]
pub struct QueryDescription {
    pub resource_type: Option<String>,
    pub query: Option<AggregateQuery>,
    pub join: Option<Vec<JoinSpec>>,
}

impl QueryDescription {
    /// Parses a JSON-encoded description.
    ///
    /// Malformed JSON fails with [`ParseError::Syntax`]; valid JSON whose
    /// present members violate the expected shape fails with
    /// [`ParseError::Shape`]. Absent sections are simply `None`.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        serde_json::from_str(raw).map_err(ParseError::from)
    }
}
