//! Validation of untyped service replies.

use serde_json::Value;

/// Returns true when a reply carries a truthy `id` or `routine_id`.
///
/// Null, `false`, `0` and `""` count as absent.
pub fn validate_response(response: &Value) -> bool {
    let Some(object) = response.as_object() else {
        return false;
    };
    ["id", "routine_id"]
        .iter()
        .any(|field| object.get(*field).is_some_and(is_truthy))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
