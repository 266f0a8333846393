//! Search filter operators.

use std::str::FromStr;

use miette::Diagnostic;
use thiserror::Error;

/// Filter operators the console search bar understands.
///
/// Each operator has a wire name (as carried in filter items) and a
/// search-bar sign (the shorthand typed after a key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    ContainIn,
    In,
    Gte,
    Lte,
    NotIn,
    RegexIn,
}

impl FilterOperator {
    pub const ALL: [FilterOperator; 6] = [
        FilterOperator::ContainIn,
        FilterOperator::In,
        FilterOperator::Gte,
        FilterOperator::Lte,
        FilterOperator::NotIn,
        FilterOperator::RegexIn,
    ];

    /// Wire name used in filter items.
    pub const fn as_str(self) -> &'static str {
        match self {
            FilterOperator::ContainIn => "contain_in",
            FilterOperator::In => "in",
            FilterOperator::Gte => "gte",
            FilterOperator::Lte => "lte",
            FilterOperator::NotIn => "not_in",
            FilterOperator::RegexIn => "regex_in",
        }
    }

    /// Search-bar shorthand.
    pub const fn sign(self) -> &'static str {
        match self {
            FilterOperator::ContainIn => ":",
            FilterOperator::In => ":=",
            FilterOperator::Gte => ":>",
            FilterOperator::Lte => ":<",
            FilterOperator::NotIn => ":!",
            FilterOperator::RegexIn => ":/",
        }
    }
}

/// An operator wire name the console does not know.
#[derive(Error, Diagnostic, Debug)]
#[error("Unknown filter operator: {0}")]
#[diagnostic(code(querysnip::domain::unknown_operator))]
pub struct UnknownOperator(pub String);

impl FromStr for FilterOperator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterOperator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}
