//! Serde helpers for loosely typed request fields
//!
//! Clients send whatever JSON scalar they have at hand (`"555-1111"`,
//! `5551111`, `true`). Text fields accept any scalar and keep its text
//! form, the way a schema-cast document store would.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

/// Scalar → text. `null` is absent; objects and arrays are rejected.
fn scalar_to_text<E: de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(E::custom(format!(
            "expected a text value, found {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
        _ => "a scalar",
    }
}

/// JavaScript truthiness for a JSON value
///
/// `null`, `false`, `0`, `-0`, `NaN` and `""` are falsy; everything else
/// (including `"0"`, `"false"`, `[]` and `{}`) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Deserialize an optional text field, accepting any JSON scalar
///
/// Use with `#[serde(default, deserialize_with = "...")]`.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_text(value)
}

/// Deserialize an optional text field where falsy values mean "absent"
///
/// Used by partial updates: a field only overwrites the stored value when
/// the client sent something truthy.
pub fn truthy_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !is_truthy(&value) {
        return Ok(None);
    }
    scalar_to_text(value)
}
