//! Lenient tree-based decoding.
//!
//! All PAWS value codecs share one decode contract over parsed
//! `serde_json::Value` trees:
//!
//! - dispatch on the exact wire property name
//! - skip `null` and empty-object values, leaving the field at its default
//!   (absent and empty-valued are identical)
//! - retain unrecognized properties verbatim in an overflow map
//! - fail hard, naming the offending field, when a present value cannot be
//!   coerced to its declared type
//!
//! Decoding is order-independent and idempotent; fields are never partially
//! applied.

use crate::error::ProtocolError;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Overflow map preserving unrecognized JSON properties, keyed by their
/// original wire names.
pub type UnknownFields = Map<String, Value>;

/// Uniform policy for unrecognized properties, applied by every codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownFieldPolicy {
    /// Keep unrecognized properties in the overflow map (default).
    #[default]
    Retain,
    /// Drop unrecognized properties during decoding.
    Discard,
}

impl UnknownFieldPolicy {
    pub fn retains(&self) -> bool {
        matches!(self, UnknownFieldPolicy::Retain)
    }
}

/// Decode contract implemented by every composite wire type.
pub trait FromJson: Sized {
    /// Decodes a value from a JSON tree under the given unknown-field policy.
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError>;

    /// Decodes a value from a JSON tree, retaining unknown fields.
    fn from_json(value: &Value) -> Result<Self, ProtocolError> {
        Self::from_json_with(value, UnknownFieldPolicy::default())
    }
}

/// Returns true when a property value carries no data and must be skipped.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn field_type(field: &str, expected: &'static str) -> ProtocolError {
    ProtocolError::FieldType {
        field: field.to_string(),
        expected,
    }
}

pub(crate) fn expect_object<'a>(
    value: &'a Value,
    field: &str,
) -> Result<&'a Map<String, Value>, ProtocolError> {
    value.as_object().ok_or_else(|| field_type(field, "object"))
}

pub(crate) fn expect_array<'a>(
    value: &'a Value,
    field: &str,
) -> Result<&'a Vec<Value>, ProtocolError> {
    value.as_array().ok_or_else(|| field_type(field, "array"))
}

/// Coerces a scalar to a string. Numbers and booleans are rendered; composite
/// values are a type error.
pub(crate) fn as_string(value: &Value, field: &str) -> Result<String, ProtocolError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(field_type(field, "string")),
    }
}

/// Coerces a number or numeric string to a double.
pub(crate) fn as_f64(value: &Value, field: &str) -> Result<f64, ProtocolError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| field_type(field, "number")),
        Value::String(s) => s.trim().parse().map_err(|_| field_type(field, "number")),
        _ => Err(field_type(field, "number")),
    }
}

/// Coerces a number or numeric string to an integer.
pub(crate) fn as_i64(value: &Value, field: &str) -> Result<i64, ProtocolError> {
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| field_type(field, "integer")),
        Value::String(s) => s.trim().parse().map_err(|_| field_type(field, "integer")),
        _ => Err(field_type(field, "integer")),
    }
}

pub(crate) fn as_i32(value: &Value, field: &str) -> Result<i32, ProtocolError> {
    as_i64(value, field)?
        .try_into()
        .map_err(|_| field_type(field, "integer"))
}

/// Coerces a boolean or "true"/"false" string.
pub(crate) fn as_bool(value: &Value, field: &str) -> Result<bool, ProtocolError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(field_type(field, "boolean")),
        },
        _ => Err(field_type(field, "boolean")),
    }
}

/// Coerces an RFC 3339 timestamp string to a UTC instant.
pub(crate) fn as_datetime(value: &Value, field: &str) -> Result<DateTime<Utc>, ProtocolError> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| field_type(field, "RFC 3339 timestamp")),
        _ => Err(field_type(field, "RFC 3339 timestamp")),
    }
}

/// Decodes each element of a JSON array through the element codec.
pub(crate) fn decode_vec<T: FromJson>(
    value: &Value,
    field: &str,
    policy: UnknownFieldPolicy,
) -> Result<Vec<T>, ProtocolError> {
    expect_array(value, field)?
        .iter()
        .map(|item| T::from_json_with(item, policy))
        .collect()
}

/// Decodes a JSON array of strings.
pub(crate) fn decode_string_vec(value: &Value, field: &str) -> Result<Vec<String>, ProtocolError> {
    expect_array(value, field)?
        .iter()
        .map(|item| as_string(item, field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&json!({})));
        assert!(!is_empty(&json!({"a": 1})));
        assert!(!is_empty(&json!("")));
        assert!(!is_empty(&json!([])));
        assert!(!is_empty(&json!(0)));
    }

    #[test]
    fn test_as_f64_coercion() {
        assert_eq!(as_f64(&json!(6.5), "hz").unwrap(), 6.5);
        assert_eq!(as_f64(&json!("6.5"), "hz").unwrap(), 6.5);
        assert_eq!(as_f64(&json!(" -30 "), "dbm").unwrap(), -30.0);
    }

    #[test]
    fn test_as_f64_failure_names_field() {
        let err = as_f64(&json!("not-a-number"), "semiMajorAxis").unwrap_err();
        match err {
            ProtocolError::FieldType { field, .. } => assert_eq!(field, "semiMajorAxis"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_as_string_coercion() {
        assert_eq!(as_string(&json!("abc"), "f").unwrap(), "abc");
        assert_eq!(as_string(&json!(47), "f").unwrap(), "47");
        assert_eq!(as_string(&json!(true), "f").unwrap(), "true");
        assert!(as_string(&json!({"x": 1}), "f").is_err());
    }

    #[test]
    fn test_as_i32_range() {
        assert_eq!(as_i32(&json!(21), "channel").unwrap(), 21);
        assert!(as_i32(&json!(i64::MAX), "channel").is_err());
        assert!(as_i32(&json!(2.5), "channel").is_err());
    }

    #[test]
    fn test_as_bool_coercion() {
        assert!(as_bool(&json!(true), "isValid").unwrap());
        assert!(!as_bool(&json!("False"), "isValid").unwrap());
        assert!(as_bool(&json!(1), "isValid").is_err());
    }

    #[test]
    fn test_as_datetime() {
        let dt = as_datetime(&json!("2026-03-01T12:00:00Z"), "startTime").unwrap();
        assert_eq!(dt.timestamp(), 1772366400);

        let err = as_datetime(&json!("yesterday"), "startTime").unwrap_err();
        assert!(err.to_string().contains("startTime"));
    }
}
