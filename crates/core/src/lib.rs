//! Asset Gate domain logic.
//!
//! Request types, constraint evaluators, rule-group resolution, the
//! fail-fast asset service, and the method validation interceptor. Nothing
//! here knows about HTTP; the API crate wires these pieces to Axum.

pub mod assets;
pub mod error;
pub mod roles;
pub mod types;
pub mod validation;
