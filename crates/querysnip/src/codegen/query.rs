//! Top-level query transform: non-indexed group, filter and sort calls.

use super::call;
use crate::query::{AggregateQuery, FilterItem, GroupField, GroupKey};

/// Emission order is fixed: group keys, group fields, filter, filter_or,
/// sort. Absent members emit nothing.
pub(crate) fn emit(query: &AggregateQuery, lines: &mut Vec<String>) {
    if let Some(group) = query.aggregate.as_ref().and_then(|a| a.group.as_ref()) {
        if let Some(keys) = &group.keys {
            for key in keys {
                lines.push(call::method("addGroupKey", &group_key_args(key)));
            }
        }
        if let Some(fields) = &group.fields {
            for field in fields {
                lines.push(call::method("addGroupField", &group_field_args(field)));
            }
        }
    }
    if let Some(items) = &query.filter {
        lines.push(filter_call("setFilter", items));
    }
    if let Some(items) = &query.filter_or {
        lines.push(filter_call("setFilterOr", items));
    }
    if let Some(sort) = &query.sort {
        let mut args = vec![call::json(&sort.name)];
        if let Some(desc) = sort.desc_flag() {
            args.push(call::json(&desc));
        }
        lines.push(call::method("setSort", &args));
    }
}

pub(crate) fn group_key_args(key: &GroupKey) -> Vec<String> {
    vec![call::json(&key.key), call::json(&key.name)]
}

/// Two shapes: `name,operator` or `name,operator,key` when a source column
/// is named.
pub(crate) fn group_field_args(field: &GroupField) -> Vec<String> {
    let mut args = vec![call::json(&field.name), call::json(&field.operator)];
    if let Some(key) = &field.key {
        args.push(call::json(key));
    }
    args
}

/// All items of a filter list become one call, each item re-serialized
/// verbatim as its own argument.
fn filter_call(name: &str, items: &[FilterItem]) -> String {
    let args: Vec<String> = items.iter().map(FilterItem::to_json).collect();
    call::method(name, &args)
}
