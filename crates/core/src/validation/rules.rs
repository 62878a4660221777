//! Violation and result types shared by both evaluation policies.

use std::fmt;

use serde::Serialize;

/// Options that change how strictly a rule is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOptions {
    /// Accept an expiration date equal to the effective date.
    pub allow_equal_dates: bool,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            allow_equal_dates: true,
        }
    }
}

/// A single constraint violation located by field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Field locator: `""` for cross-field checks, `items`, `items[0].index`.
    pub path: String,
    /// Short machine-readable rule name (`not_null`, `asset_key`, ...).
    pub rule: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            rule,
            message: message.into(),
        }
    }
}

/// Which side of a method invocation was validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationTarget {
    /// The request body or query, checked while it was extracted.
    Input,
    /// The arguments of an intercepted method.
    Parameters,
    /// The value returned by an intercepted method.
    ReturnValue,
}

impl fmt::Display for ViolationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViolationTarget::Input => "input",
            ViolationTarget::Parameters => "parameters",
            ViolationTarget::ReturnValue => "return value",
        })
    }
}

/// The full set of violations raised by a collect-all evaluation.
///
/// Violations are kept in evaluation order; use [`ConstraintViolations::sorted`]
/// for the stable, path-ordered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintViolations {
    pub method: &'static str,
    pub target: ViolationTarget,
    pub violations: Vec<Violation>,
}

impl ConstraintViolations {
    pub fn new(method: &'static str, target: ViolationTarget, violations: Vec<Violation>) -> Self {
        Self {
            method,
            target,
            violations,
        }
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations ordered by field path. Equal paths keep evaluation order.
    pub fn sorted(&self) -> Vec<&Violation> {
        let mut sorted: Vec<&Violation> = self.violations.iter().collect();
        sorted.sort_by(|a, b| a.path.cmp(&b.path));
        sorted
    }

    /// Messages in path order, joined into one human-readable line.
    pub fn detail(&self) -> String {
        self.sorted()
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ConstraintViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.method, self.target, self.detail())
    }
}

impl std::error::Error for ConstraintViolations {}
