use crate::error::{InvertedBounds, LimitError, Result};
use crate::value::AttrValue;

/// Inclusive integer bound attached to one named attribute.
///
/// Each category declares one field per attribute; every validated write
/// funnels through [`BoundedIntField::validate`], so a value outside
/// `[min_amount, max_amount]` is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedIntField {
    name: &'static str,
    min_amount: i64,
    max_amount: i64,
}

impl BoundedIntField {
    /// Define a bound. Rejects `min_amount > max_amount`.
    pub fn new(
        name: &'static str,
        min_amount: i64,
        max_amount: i64,
    ) -> std::result::Result<Self, InvertedBounds> {
        if min_amount > max_amount {
            return Err(InvertedBounds {
                field: name,
                min_amount,
                max_amount,
            });
        }
        Ok(Self {
            name,
            min_amount,
            max_amount,
        })
    }

    /// Table constructor for bounds known to be ordered.
    pub(crate) const fn fixed(name: &'static str, min_amount: i64, max_amount: i64) -> Self {
        Self {
            name,
            min_amount,
            max_amount,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn min_amount(&self) -> i64 {
        self.min_amount
    }

    pub fn max_amount(&self) -> i64 {
        self.max_amount
    }

    /// Judge a candidate value.
    ///
    /// Booleans are rejected outright even though most intake formats treat
    /// them as integer-like.
    pub fn validate(&self, value: &AttrValue) -> Result<i64> {
        match value {
            AttrValue::Bool(_) => Err(LimitError::BooleanValue { field: self.name }),
            AttrValue::Int(amount) => self.check(*amount),
            other => Err(LimitError::NotInteger {
                field: self.name,
                value: format!("{other} ({})", other.type_name()),
            }),
        }
    }

    /// Range check for an already-typed integer.
    pub fn check(&self, amount: i64) -> Result<i64> {
        if amount < self.min_amount || amount > self.max_amount {
            return Err(LimitError::OutOfRange {
                field: self.name,
                value: amount,
                min_amount: self.min_amount,
                max_amount: self.max_amount,
            });
        }
        Ok(amount)
    }

    /// Validated write into a storage slot.
    ///
    /// On rejection the slot is untouched: a prior valid value survives and
    /// an empty slot stays empty.
    pub fn store(&self, slot: &mut Option<i64>, value: &AttrValue) -> Result<()> {
        let amount = self.validate(value)?;
        *slot = Some(amount);
        Ok(())
    }
}
