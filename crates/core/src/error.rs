use crate::assets::error::RuleViolation;
use crate::validation::rules::ConstraintViolations;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A single business rule failed during fail-fast checking.
    #[error(transparent)]
    Rule(#[from] RuleViolation),

    /// One or more declarative constraints failed (collect-all).
    #[error(transparent)]
    Constraint(#[from] ConstraintViolations),

    #[error("Internal error: {0}")]
    Internal(String),
}
