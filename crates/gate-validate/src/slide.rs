use gate_model::{Visitor, VisitorCategory};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::report::AccessReport;
use crate::ruleset::ValidatedLimits;
use crate::validate_visitor;

/// One attraction paired with the limits its riders must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    name: String,
    category: VisitorCategory,
}

impl Slide {
    pub fn new(name: impl Into<String>, category: VisitorCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> VisitorCategory {
        self.category
    }

    /// Admit or deny a visitor.
    ///
    /// Every rejection collapses to `false`; callers get an admit/deny
    /// signal, not a diagnostic. Use [`Slide::inspect_access`] when the
    /// reasons matter.
    pub fn can_access(&self, visitor: &Visitor) -> bool {
        match ValidatedLimits::try_build(
            self.category,
            &visitor.age,
            &visitor.weight,
            &visitor.height,
        ) {
            Ok(_) => {
                trace!(slide = %self.name, visitor = %visitor.name, "visitor admitted");
                true
            }
            Err(error) => {
                debug!(slide = %self.name, visitor = %visitor.name, %error, "visitor denied");
                false
            }
        }
    }

    /// Run every check and report each violation.
    pub fn inspect_access(&self, visitor: &Visitor) -> AccessReport {
        validate_visitor(self.category, visitor)
    }
}
