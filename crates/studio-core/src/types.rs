//! Property value types for canvas nodes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Properties of a node, keyed by prop name, in insertion order.
pub type PropMap = IndexMap<String, PropValue>;

/// A property value as it arrives from the UI layer.
///
/// The UI stores props as loosely typed JSON, so the helpers here follow the
/// JavaScript coercion rules the generated code is written against.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl PropValue {
    /// JavaScript truthiness: `""`, `0`, `NaN`, `false` and `null` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Null => false,
            PropValue::Bool(b) => *b,
            PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropValue::Text(s) => !s.is_empty(),
        }
    }

    /// Render the value the way `String(value)` does.
    pub fn to_literal(&self) -> String {
        match self {
            PropValue::Null => "null".to_string(),
            PropValue::Bool(b) => b.to_string(),
            PropValue::Number(n) => format_number(*n),
            PropValue::Text(s) => s.clone(),
        }
    }

    /// Numeric coercion, matching `Number(value)`.
    pub fn as_number(&self) -> f64 {
        match self {
            PropValue::Null => 0.0,
            PropValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            PropValue::Number(n) => *n,
            PropValue::Text(s) => parse_number(s),
        }
    }

    /// Get as a string slice if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as a boolean if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Number(f64::from(n))
    }
}

/// Format a number like JavaScript's `Number.prototype.toString`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        // Covers -0 as well.
        "0".to_string()
    } else {
        format!("{}", n)
    }
}

fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    match s.parse::<f64>() {
        // Rust also accepts "inf" and "NaN" spellings that JavaScript rejects.
        Ok(n) if n.is_finite() => n,
        _ => f64::NAN,
    }
}
