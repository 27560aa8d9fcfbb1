use gate_model::{AttrValue, Result, VisitorCategory};

/// Attribute values that passed every bound for a category.
///
/// Constructing one is the access check; the instance itself is only proof
/// of validity and is normally discarded immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedLimits {
    category: VisitorCategory,
    age: i64,
    weight: i64,
    height: i64,
}

impl ValidatedLimits {
    /// Validate an `(age, weight, height)` triple against a category.
    ///
    /// Checks run in that order; the first rejection aborts the build and
    /// no partially validated state escapes.
    pub fn try_build(
        category: VisitorCategory,
        age: &AttrValue,
        weight: &AttrValue,
        height: &AttrValue,
    ) -> Result<Self> {
        let limits = category.limits();
        let age = limits.age.validate(age)?;
        let weight = limits.weight.validate(weight)?;
        let height = limits.height.validate(height)?;
        Ok(Self {
            category,
            age,
            weight,
            height,
        })
    }

    pub fn category(&self) -> VisitorCategory {
        self.category
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    pub fn height(&self) -> i64 {
        self.height
    }
}
