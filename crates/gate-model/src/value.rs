//! Loosely typed attribute values.
//!
//! Intake records arrive untyped; every attribute is carried as-is and only
//! judged by the bounded field it is assigned to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Attribute value as supplied by an intake record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Int(i64),
    Bool(bool),
    Float(f64),
    Text(String),
}

impl AttrValue {
    /// Type label used in rejection messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Int(_) => "integer",
            AttrValue::Bool(_) => "boolean",
            AttrValue::Float(_) => "float",
            AttrValue::Text(_) => "text",
        }
    }

    /// The integer payload, if this value is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Int(value) => write!(f, "{value}"),
            AttrValue::Bool(value) => write!(f, "{value}"),
            AttrValue::Float(value) => write!(f, "{value}"),
            AttrValue::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}
