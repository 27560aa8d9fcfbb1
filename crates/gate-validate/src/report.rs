//! Access check reporting.
//!
//! [`AccessIssue`] carries only the data its variant needs, mirroring the
//! check that produced it.

use gate_model::{LimitError, VisitorCategory};
use serde::{Deserialize, Serialize};

/// One attribute that failed its bound during an access check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum AccessIssue {
    /// Value is not an integer.
    NotInteger { attribute: String, value: String },
    /// Booleans are rejected outright.
    BooleanValue { attribute: String },
    /// Integer outside the inclusive bound.
    OutOfRange {
        attribute: String,
        value: i64,
        min_amount: i64,
        max_amount: i64,
    },
}

impl AccessIssue {
    /// Attribute this issue was raised for.
    pub fn attribute(&self) -> &str {
        match self {
            AccessIssue::NotInteger { attribute, .. }
            | AccessIssue::BooleanValue { attribute }
            | AccessIssue::OutOfRange { attribute, .. } => attribute,
        }
    }

    /// Human-readable message for operator output.
    pub fn message(&self) -> String {
        match self {
            AccessIssue::NotInteger { attribute, value } => {
                format!("{attribute} must be an integer, got {value}")
            }
            AccessIssue::BooleanValue { attribute } => {
                format!("{attribute} does not accept boolean values")
            }
            AccessIssue::OutOfRange {
                attribute,
                value,
                min_amount,
                max_amount,
            } => {
                format!("{attribute} value {value} is outside [{min_amount}, {max_amount}]")
            }
        }
    }
}

impl From<LimitError> for AccessIssue {
    fn from(error: LimitError) -> Self {
        match error {
            LimitError::BooleanValue { field } => AccessIssue::BooleanValue {
                attribute: field.to_string(),
            },
            LimitError::NotInteger { field, value } => AccessIssue::NotInteger {
                attribute: field.to_string(),
                value,
            },
            LimitError::OutOfRange {
                field,
                value,
                min_amount,
                max_amount,
            } => AccessIssue::OutOfRange {
                attribute: field.to_string(),
                value,
                min_amount,
                max_amount,
            },
        }
    }
}

/// Outcome of checking one visitor against one category's limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessReport {
    pub visitor: String,
    pub category: VisitorCategory,
    pub issues: Vec<AccessIssue>,
}

impl AccessReport {
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// True when every attribute passed its bound.
    pub fn admitted(&self) -> bool {
        self.issues.is_empty()
    }
}
