//! Index-qualified join blocks.

use super::{call, query};
use crate::query::JoinSpec;

/// One block per join entry, tagged with its zero-based position. Per entry
/// the order is fixed: keys, resource type, join type, then the nested
/// aggregation group's keys and fields.
pub(crate) fn emit(joins: &[JoinSpec], lines: &mut Vec<String>) {
    for (idx, join) in joins.iter().enumerate() {
        if let Some(keys) = &join.keys {
            lines.push(call::method_indexed("setJoinKeys", &[call::json(keys)], idx));
        }
        if let Some(resource_type) = &join.resource_type {
            lines.push(call::method_indexed(
                "setJoinResourceType",
                &[call::json(resource_type)],
                idx,
            ));
        }
        if let Some(join_type) = &join.join_type {
            lines.push(call::method_indexed(
                "setJoinType",
                &[call::json(join_type)],
                idx,
            ));
        }
        if let Some(group) = join.group() {
            if let Some(keys) = &group.keys {
                for key in keys {
                    lines.push(call::method_indexed(
                        "addJoinGroupKey",
                        &query::group_key_args(key),
                        idx,
                    ));
                }
            }
            if let Some(fields) = &group.fields {
                for field in fields {
                    lines.push(call::method_indexed(
                        "addJoinGroupField",
                        &query::group_field_args(field),
                        idx,
                    ));
                }
            }
        }
    }
}
