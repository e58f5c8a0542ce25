//! Scalar field values carried by records.
//!
//! Records coming from the messages API are flat JSON objects. Every field is
//! expected to be a string, but the pipeline tolerates any JSON scalar and
//! keeps its type so the presenters can echo it back unchanged.

use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt;

/// A single scalar stored under a field name in a [`crate::Record`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            FieldValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Text form used by quick search and by equality filters on
    /// non-string fields. Null renders as `"null"`, floats drop a trailing
    /// `.0`, so `2.0` and `2` look the same.
    pub fn display_string(&self) -> String {
        self.to_string()
    }

    /// Whether this value equals a filter selection. Strings compare exactly;
    /// other scalars compare through their display form so that options
    /// derived from them round-trip. Null never matches.
    pub fn matches_exact(&self, selected: &str) -> bool {
        match self {
            FieldValue::String(v) => v == selected,
            FieldValue::Null => false,
            other => other.display_string() == selected,
        }
    }

    /// Convert a JSON value. Nested arrays and objects are not scalars and
    /// yield `None`.
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::Null => Some(FieldValue::Null),
            JsonValue::Bool(b) => Some(FieldValue::Bool(*b)),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(FieldValue::Int(i))
                } else {
                    n.as_f64().map(FieldValue::Float)
                }
            }
            JsonValue::String(s) => Some(FieldValue::String(s.clone())),
            JsonValue::Array(_) | JsonValue::Object(_) => None,
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            FieldValue::String(v) => JsonValue::String(v.clone()),
            FieldValue::Int(v) => JsonValue::Number((*v).into()),
            FieldValue::Float(v) => serde_json::Number::from_f64(*v)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            FieldValue::Bool(v) => JsonValue::Bool(*v),
            FieldValue::Null => JsonValue::Null,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(v) => f.write_str(v),
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Bool(v) => write!(f, "{}", v),
            FieldValue::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}
