//! Fluent call-chain generation from a parsed query description.
//!
//! The output is display text for the console's developer tools: a preamble
//! line naming the builder entry point, then one chained call per line. Each
//! line starts with `.` so the chain reads as a single fluent invocation.
//!
//! Emission order is fixed by this module, never by input key order:
//! resource type, then the top-level query transform, then one block per
//! join entry in input order.

mod call;
mod join;
mod query;

use crate::query::QueryDescription;

/// Root builder invocation every snippet starts with.
pub const PREAMBLE: &str = "fluentApi.statisticsTest().resource().stat()";

/// Generates the call chain for a description. Absent sections emit nothing;
/// an empty description yields the preamble alone.
pub fn generate(description: &QueryDescription) -> String {
    let mut lines = vec![PREAMBLE.to_string()];

    if let Some(resource_type) = &description.resource_type {
        lines.push(call::method("setResourceType", &[call::json(resource_type)]));
    }
    if let Some(aggregate_query) = &description.query {
        query::emit(aggregate_query, &mut lines);
    }
    if let Some(joins) = &description.join {
        join::emit(joins, &mut lines);
    }

    lines.join("\n")
}
