use thiserror::Error;

/// Rejected bound specification: `min_amount` above `max_amount`.
///
/// Raised at definition time, before any value is ever checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: min_amount {min_amount} is greater than max_amount {max_amount}")]
pub struct InvertedBounds {
    pub field: &'static str,
    pub min_amount: i64,
    pub max_amount: i64,
}

/// Why a candidate attribute value was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LimitError {
    /// Booleans are rejected outright, integer-like or not.
    #[error("{field}: boolean values are not accepted")]
    BooleanValue { field: &'static str },
    /// Value is not an integer.
    #[error("{field}: expected an integer, got {value}")]
    NotInteger { field: &'static str, value: String },
    /// Well-typed integer outside the inclusive bound.
    #[error("{field}: {value} is outside [{min_amount}, {max_amount}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min_amount: i64,
        max_amount: i64,
    },
}

/// Broad classification of a check-time rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong value type (boolean or non-integer).
    InvalidType,
    /// Well-typed but outside the bound.
    OutOfRange,
}

impl LimitError {
    /// Attribute the failing value was checked against.
    pub fn field(&self) -> &'static str {
        match self {
            LimitError::BooleanValue { field }
            | LimitError::NotInteger { field, .. }
            | LimitError::OutOfRange { field, .. } => field,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LimitError::BooleanValue { .. } | LimitError::NotInteger { .. } => {
                ErrorKind::InvalidType
            }
            LimitError::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}

pub type Result<T> = std::result::Result<T, LimitError>;
