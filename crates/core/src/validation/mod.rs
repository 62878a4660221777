//! Request validation engine.
//!
//! Provides violation types, pure constraint evaluators, rule-group
//! resolution, the collect-all [`constrained::Constrained`] seam, and the
//! method validation interceptor -- all without HTTP dependencies.

pub mod constrained;
pub mod evaluator;
pub mod group;
pub mod interceptor;
pub mod rules;
