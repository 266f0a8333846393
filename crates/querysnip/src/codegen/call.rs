//! Method-call text fragments.

use serde::Serialize;

/// One chained call: `.name(arg,arg)`.
pub(crate) fn method(name: &str, args: &[String]) -> String {
    format!(".{}({})", name, args.join(","))
}

/// One chained call carrying a trailing join index: `.name(arg,arg,idx)`.
pub(crate) fn method_indexed(name: &str, args: &[String], idx: usize) -> String {
    format!(".{}({},{})", name, args.join(","), idx)
}

/// JSON-encodes an argument value, compact form.
///
/// The generator only feeds strings, booleans, string arrays and raw JSON
/// values through here; none of those can fail to serialize.
pub(crate) fn json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
