//! Visitor categories and their admission limits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::BoundedIntField;

/// Visitor category determining which limits apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitorCategory {
    Child,
    Adult,
}

impl VisitorCategory {
    /// All categories, in admission-desk display order.
    pub const fn all() -> &'static [Self] {
        &[Self::Child, Self::Adult]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Child => "Child",
            Self::Adult => "Adult",
        }
    }

    /// The bounds enforced for this category.
    pub fn limits(self) -> LimitProfile {
        match self {
            Self::Child => LimitProfile {
                age: BoundedIntField::fixed("age", 4, 14),
                height: BoundedIntField::fixed("height", 80, 120),
                weight: BoundedIntField::fixed("weight", 20, 50),
            },
            Self::Adult => LimitProfile {
                age: BoundedIntField::fixed("age", 14, 60),
                height: BoundedIntField::fixed("height", 120, 220),
                weight: BoundedIntField::fixed("weight", 50, 120),
            },
        }
    }
}

impl fmt::Display for VisitorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The three bounded attributes enforced for one visitor category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitProfile {
    pub age: BoundedIntField,
    pub height: BoundedIntField,
    pub weight: BoundedIntField,
}

impl LimitProfile {
    /// Compose a profile from independently defined bounds.
    pub fn new(age: BoundedIntField, height: BoundedIntField, weight: BoundedIntField) -> Self {
        Self {
            age,
            height,
            weight,
        }
    }
}
