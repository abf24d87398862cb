//! Body-building helpers for write operations.
//!
//! Write operations never transmit a full record: each one serializes the
//! record to a plain mapping, strips absent fields, and filters the result
//! through a per-operation allow-list before it becomes the JSON body.

use crate::core::errors::ApiError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Serialize a record to a plain mapping, excluding absent (`None`) fields.
pub fn dump<T: Serialize>(model: &T) -> Result<Map<String, Value>, ApiError> {
    dump_full(model).map(|map| {
        match strip_nulls(Value::Object(map)) {
            Value::Object(map) => map,
            // strip_nulls never changes the outer value's kind
            _ => Map::new(),
        }
    })
}

/// Serialize a record to a plain mapping, keeping absent fields as nulls.
pub fn dump_full<T: Serialize>(model: &T) -> Result<Map<String, Value>, ApiError> {
    match serde_json::to_value(model) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ApiError::Encode(format!(
            "Expected record to serialize to an object, got {}",
            other
        ))),
        Err(e) => Err(ApiError::Encode(format!("Failed to serialize record: {}", e))),
    }
}

/// Keep only the allow-listed keys of a dumped mapping.
pub fn include(map: Map<String, Value>, fields: &[&str]) -> Map<String, Value> {
    map.into_iter()
        .filter(|(key, _)| fields.contains(&key.as_str()))
        .collect()
}

/// Recursively drop null-valued entries from objects.
fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key, strip_nulls(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v2::models::{Address, Project, User};
    use serde_json::json;

    #[test]
    fn test_dump_excludes_absent_fields() {
        let user = User {
            first_name: Some("Apollo".to_string()),
            ..User::default()
        };
        let map = dump(&user).unwrap();
        assert_eq!(Value::Object(map), json!({"first_name": "Apollo"}));
    }

    #[test]
    fn test_dump_full_keeps_absent_fields() {
        let user = User::default();
        let map = dump_full(&user).unwrap();
        assert_eq!(map.get("first_name"), Some(&Value::Null));
        assert_eq!(map.len(), 11);
    }

    #[test]
    fn test_dump_strips_nested_nulls() {
        let project = Project {
            name: Some("Warehouse".to_string()),
            address: Some(Address {
                city: Some("Lincoln".to_string()),
                ..Address::default()
            }),
            ..Project::default()
        };
        let map = dump(&project).unwrap();
        assert_eq!(
            Value::Object(map),
            json!({"name": "Warehouse", "address": {"city": "Lincoln"}})
        );
    }

    #[test]
    fn test_include_filters_to_allow_list() {
        let user = User {
            id: Some("1".to_string()),
            first_name: Some("Apollo".to_string()),
            email_address: Some("a@example.com".to_string()),
            ..User::default()
        };
        let map = include(dump(&user).unwrap(), &["first_name", "email_address"]);
        assert_eq!(
            Value::Object(map),
            json!({"first_name": "Apollo", "email_address": "a@example.com"})
        );
    }

    #[test]
    fn test_include_ignores_missing_keys() {
        let user = User::default();
        let map = include(dump(&user).unwrap(), &["password"]);
        assert!(map.is_empty());
    }
}
