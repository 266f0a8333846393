//! Aggregation, filter and sort sections of a query description.

use serde::Deserialize;

/// The `query` section: grouping, filters and sort of the primary query.
#[derive(Debug, Deserialize)]
pub struct AggregateQuery {
    pub aggregate: Option<Aggregate>,
    pub filter: Option<Vec<FilterItem>>,
    pub filter_or: Option<Vec<FilterItem>>,
    pub sort: Option<SortSpec>,
}

/// Aggregation wrapper; only `group` is recognized.
#[derive(Debug, Deserialize)]
pub struct Aggregate {
    pub group: Option<GroupSpec>,
}

/// Grouping columns (`keys`) and computed aggregate columns (`fields`).
#[derive(Debug, Deserialize)]
pub struct GroupSpec {
    pub keys: Option<Vec<GroupKey>>,
    pub fields: Option<Vec<GroupField>>,
}

/// A grouping column: source key and output name.
#[derive(Debug, Deserialize)]
pub struct GroupKey {
    pub key: String,
    pub name: String,
}

/// A computed aggregate column. `key` is optional; operators like `count`
/// need no source column.
#[derive(Debug, Deserialize)]
pub struct GroupField {
    pub name: String,
    pub operator: String,
    pub key: Option<String>,
}

/// A single filter entry.
///
/// Filter items are carried into the generated snippet verbatim, including
/// members the generator knows nothing about, so the raw JSON value is kept
/// instead of a typed struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct FilterItem(pub serde_json::Value);

impl FilterItem {
    /// Compact JSON text of the item, member order preserved.
    pub fn to_json(&self) -> String {
        self.0.to_string()
    }
}

/// Sort specification for the primary query.
#[derive(Debug, Deserialize)]
pub struct SortSpec {
    pub name: String,
    /// Kept as a raw value: the console historically tolerated non-boolean
    /// `desc` members by falling back to the name-only call form.
    pub desc: Option<serde_json::Value>,
}

impl SortSpec {
    /// The descending flag, only when `desc` is an explicit JSON boolean.
    pub fn desc_flag(&self) -> Option<bool> {
        self.desc.as_ref().and_then(serde_json::Value::as_bool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_item_reserializes_verbatim() {
        let raw = r#"{"key":"created_at","value":"now/d","operator":"timedelta_gte"}"#;
        let item: FilterItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.to_json(), raw);
    }

    #[test]
    fn filter_item_keeps_unknown_members() {
        let raw = r#"{"key":"k","value":1,"operator":"eq","note":"extra"}"#;
        let item: FilterItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.to_json(), raw);
    }

    #[test]
    fn sort_desc_must_be_boolean() {
        let sort: SortSpec = serde_json::from_str(r#"{"name":"n","desc":true}"#).unwrap();
        assert_eq!(sort.desc_flag(), Some(true));

        let sort: SortSpec = serde_json::from_str(r#"{"name":"n","desc":"yes"}"#).unwrap();
        assert_eq!(sort.desc_flag(), None);

        let sort: SortSpec = serde_json::from_str(r#"{"name":"n"}"#).unwrap();
        assert_eq!(sort.desc_flag(), None);
    }
}
