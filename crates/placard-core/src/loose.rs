//! Field access on loosely typed values.
//!
//! Dynamic runtimes let any value be probed for a property: objects yield
//! the property value, everything else yields `undefined`, and `undefined`
//! stringifies to the literal text `undefined` when written into a text
//! sink. The placard client reads response bodies as raw text and probes a
//! `message` field on them without parsing, so the probe lands on a scalar
//! and misses. That behavior is modeled here as-is, not corrected.

use serde_json::Value;

/// Result of probing a field on a loosely typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// The value was an object carrying the field.
    Defined(String),
    /// The value had no such field, or was not an object at all.
    Undefined,
}

impl FieldValue {
    /// Renders the value the way a dynamic runtime stringifies it into a
    /// text sink. `Undefined` becomes the literal text `undefined`.
    pub fn render_text(&self) -> String {
        match self {
            FieldValue::Defined(text) => text.clone(),
            FieldValue::Undefined => "undefined".to_string(),
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, FieldValue::Defined(_))
    }
}

/// Probes `name` on a structured value.
///
/// Only objects carry fields; any other value yields [`FieldValue::Undefined`].
/// String-valued fields render without quotes, other field values keep their
/// JSON rendering.
pub fn field(value: &Value, name: &str) -> FieldValue {
    match value.get(name) {
        Some(Value::String(s)) => FieldValue::Defined(s.clone()),
        Some(other) => FieldValue::Defined(other.to_string()),
        None => FieldValue::Undefined,
    }
}

/// Probes `name` on a raw text body.
///
/// The body is treated as the scalar it is, never parsed, so the probe
/// always misses. A JSON-shaped body is no exception: `{"message":"hi"}`
/// read as text still yields `Undefined` for `message`.
pub fn text_field(body: &str, name: &str) -> FieldValue {
    field(&Value::String(body.to_string()), name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_field_is_defined() {
        let value = json!({"message": "hi"});
        assert_eq!(field(&value, "message"), FieldValue::Defined("hi".into()));
    }

    #[test]
    fn test_non_string_field_keeps_json_rendering() {
        let value = json!({"count": 3});
        assert_eq!(field(&value, "count"), FieldValue::Defined("3".into()));
    }

    #[test]
    fn test_missing_field_is_undefined() {
        let value = json!({"message": "hi"});
        assert_eq!(field(&value, "status"), FieldValue::Undefined);
    }

    #[test]
    fn test_text_body_probe_misses() {
        assert_eq!(text_field("hello", "message"), FieldValue::Undefined);
    }

    #[test]
    fn test_json_shaped_text_still_misses() {
        // The body is not parsed, so the field is unreachable.
        assert_eq!(
            text_field(r#"{"message":"hi"}"#, "message"),
            FieldValue::Undefined
        );
    }

    #[test]
    fn test_undefined_renders_as_literal() {
        assert_eq!(FieldValue::Undefined.render_text(), "undefined");
        assert!(!FieldValue::Undefined.is_defined());
    }
}
