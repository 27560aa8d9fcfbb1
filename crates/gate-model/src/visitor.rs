use serde::{Deserialize, Serialize};

use crate::value::AttrValue;

/// A park guest as supplied by an intake record.
///
/// Attributes are unconstrained here; bounds are only applied when the
/// visitor is checked against a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visitor {
    pub name: String,
    pub age: AttrValue,
    pub weight: AttrValue,
    pub height: AttrValue,
}

impl Visitor {
    pub fn new(name: impl Into<String>, age: i64, weight: i64, height: i64) -> Self {
        Self {
            name: name.into(),
            age: AttrValue::Int(age),
            weight: AttrValue::Int(weight),
            height: AttrValue::Int(height),
        }
    }

    /// Build from raw attribute values, e.g. a record that has not been
    /// cleaned up yet.
    pub fn from_attributes(
        name: impl Into<String>,
        age: AttrValue,
        weight: AttrValue,
        height: AttrValue,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            weight,
            height,
        }
    }
}
