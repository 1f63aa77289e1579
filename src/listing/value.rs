//! Reading fields out of an untyped JSON object.
//!
//! Input JSON is decoded into a `serde_json::Map` first and then read field
//! by field, so unknown keys are ignored and each field can fall back to its
//! own default.

use serde_json::{Map, Value};

/// The string form of `key`, or `None` if it is missing or `null`.
///
/// Strings are returned verbatim; other scalars and containers are
/// stringified (`2019` becomes `"2019"`).
pub fn get_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Like [`get_string`] but substitutes `default` for a missing or `null` value.
pub fn string_or(map: &Map<String, Value>, key: &str, default: &str) -> String {
    get_string(map, key).unwrap_or_else(|| default.to_string())
}

/// Like [`string_or`] but also substitutes `default` for a blank value.
pub fn non_blank_or(map: &Map<String, Value>, key: &str, default: &str) -> String {
    get_string(map, key)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Stringify every non-null element of an array, preserving order.
///
/// Returns `None` when `key` is missing or does not hold an array.
pub fn string_list(map: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let items = map.get(key)?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| match item {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            })
            .collect(),
    )
}
