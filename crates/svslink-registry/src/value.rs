use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Validated attribute values decoded from one frame, keyed by attribute name.
pub type ValueSet = BTreeMap<&'static str, AttributeValue>;

/// A typed attribute value.
///
/// Whole-number readings are kept as [`AttributeValue::Integer`] so that
/// degrees, flags and slopes read as integers; fractional readings (boost
/// in dB, Q-factor) stay [`AttributeValue::Decimal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl AttributeValue {
    /// Build a numeric value, normalizing whole numbers to `Integer`.
    pub fn number(value: f64) -> Self {
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            AttributeValue::Integer(value as i64)
        } else {
            AttributeValue::Decimal(value)
        }
    }

    /// Numeric view of the value, `None` for text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Integer(value) => Some(*value as f64),
            AttributeValue::Decimal(value) => Some(*value),
            AttributeValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Integer(value) => write!(f, "{value}"),
            AttributeValue::Decimal(value) => write!(f, "{value}"),
            AttributeValue::Text(text) => write!(f, "{text:?}"),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Integer(i64::from(value))
    }
}

impl From<u8> for AttributeValue {
    fn from(value: u8) -> Self {
        AttributeValue::Integer(i64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::number(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Integer(i64::from(value))
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}
