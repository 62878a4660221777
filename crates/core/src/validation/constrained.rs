//! Collect-all evaluation seam.

use super::group::RuleGroup;
use super::rules::{ConstraintViolations, RuleOptions, Violation, ViolationTarget};

/// A value with declarative constraints.
///
/// Implementations evaluate every constraint active for `group`, in a fixed
/// order, and return all failures. They must not stop at the first one.
pub trait Constrained {
    fn violations(&self, group: RuleGroup, options: &RuleOptions) -> Vec<Violation>;
}

/// Evaluate `value` and wrap any failures into a [`ConstraintViolations`].
pub fn collect<T: Constrained + ?Sized>(
    method: &'static str,
    target: ViolationTarget,
    group: RuleGroup,
    options: &RuleOptions,
    value: &T,
) -> Result<(), ConstraintViolations> {
    let violations = value.violations(group, options);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ConstraintViolations::new(method, target, violations))
    }
}
