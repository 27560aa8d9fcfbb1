//! Attribute checks for the diagnostic validation path.

use gate_model::{Visitor, VisitorCategory};

use crate::report::AccessIssue;

/// Run the age, weight, and height checks in order, collecting one issue
/// per failed attribute instead of stopping at the first.
pub fn run_all(category: VisitorCategory, visitor: &Visitor) -> Vec<AccessIssue> {
    let limits = category.limits();
    let mut issues = Vec::new();

    for (field, value) in [
        (limits.age, &visitor.age),
        (limits.weight, &visitor.weight),
        (limits.height, &visitor.height),
    ] {
        if let Err(error) = field.validate(value) {
            issues.push(AccessIssue::from(error));
        }
    }

    issues
}
