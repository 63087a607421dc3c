//! Loose readings of client-supplied JSON values.
//!
//! Kiosk clients are not strict about field types, so request fields are
//! kept as raw [`Value`]s and interpreted here.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Whether a value counts as "set": `null`, `false`, `0`, and `""` do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Short name of the value's JSON type, for error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Strings as-is; anything else as its JSON text.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Length of `value[key]` when it is an array, else 0.
pub fn array_len(value: Option<&Value>, key: &str) -> usize {
    value
        .and_then(|v| v.get(key))
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

/// Deserializes a field so that an explicit `null` is `Some(Value::Null)`.
/// Pair with `#[serde(default)]` so that an absent field stays `None`.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&value), "{value}");
        }
    }

    #[test]
    fn truthy_values() {
        for value in [json!(true), json!(-1), json!("x"), json!([]), json!({})] {
            assert!(is_truthy(&value), "{value}");
        }
    }

    #[test]
    fn to_text_keeps_strings_unquoted() {
        assert_eq!(to_text(&json!("hi")), "hi");
        assert_eq!(to_text(&json!({ "text": "hi" })), r#"{"text":"hi"}"#);
        assert_eq!(to_text(&json!(7)), "7");
    }

    #[test]
    fn array_len_ignores_non_arrays() {
        let data = json!({ "visitors": [1, 2], "staff": "abc" });
        assert_eq!(array_len(Some(&data), "visitors"), 2);
        assert_eq!(array_len(Some(&data), "staff"), 0);
        assert_eq!(array_len(Some(&data), "missing"), 0);
        assert_eq!(array_len(Some(&json!("x")), "visitors"), 0);
        assert_eq!(array_len(None, "visitors"), 0);
    }
}
