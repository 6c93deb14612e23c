//! Wire-format types for each backend framework's error document
//!
//! Bodies are read field by field: the fingerprint check in each parser
//! decides whether a payload matches, so a single malformed field must
//! degrade to `None` without erasing the fields around it.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub mod express;
pub mod laravel;
pub mod symfony;

/// Read one field, ignoring it when its shape does not fit
fn field<T: DeserializeOwned>(map: &Map<String, Value>, key: &str) -> Option<T> {
    map.get(key).and_then(|value| serde_json::from_value(value.clone()).ok())
}

/// Read a status code, accepting both numbers and numeric strings
fn status_field(map: &Map<String, Value>, key: &str) -> Option<u16> {
    match map.get(key)? {
        Value::Number(number) => number.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Read a trace array frame by frame, dropping only unusable entries
fn frames_field<T: DeserializeOwned>(map: &Map<String, Value>, key: &str) -> Vec<T> {
    map.get(key)
        .and_then(Value::as_array)
        .map(|frames| {
            frames
                .iter()
                .filter_map(|frame| serde_json::from_value(frame.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        let Value::Object(map) = value else {
            panic!("expected an object");
        };
        map
    }

    #[test]
    fn status_field_accepts_numbers_and_numeric_strings() {
        let map = map(json!({"a": 400, "b": "418", "c": "nope", "d": true, "e": 70000}));

        assert_eq!(status_field(&map, "a"), Some(400));
        assert_eq!(status_field(&map, "b"), Some(418));
        assert_eq!(status_field(&map, "c"), None);
        assert_eq!(status_field(&map, "d"), None);
        assert_eq!(status_field(&map, "e"), None);
        assert_eq!(status_field(&map, "missing"), None);
    }

    #[test]
    fn mistyped_field_reads_as_absent() {
        let map = map(json!({"title": 42, "detail": "ok"}));

        assert_eq!(field::<String>(&map, "title"), None);
        assert_eq!(field::<String>(&map, "detail"), Some("ok".to_owned()));
    }
}
