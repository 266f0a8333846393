//! Join entries of a query description.

use serde::Deserialize;

use super::{AggregateQuery, GroupSpec};

/// A secondary query combined with the primary one via join keys.
///
/// Every member is optional; the generator emits one index-qualified call
/// per present member. Of a join's nested `query`, only the aggregation
/// group is honored — join-level filters have no snippet counterpart.
#[derive(Debug, Deserialize)]
pub struct JoinSpec {
    pub keys: Option<Vec<String>>,
    pub resource_type: Option<String>,
    #[serde(rename = "type")]
    pub join_type: Option<String>,
    pub query: Option<AggregateQuery>,
}

impl JoinSpec {
    /// The nested aggregation group, if the join carries one.
    pub fn group(&self) -> Option<&GroupSpec> {
        self.query.as_ref()?.aggregate.as_ref()?.group.as_ref()
    }
}
