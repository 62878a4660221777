//! Well-known caller credential values.
//!
//! Compared case-insensitively by [`crate::validation::group::RuleGroup::resolve`].

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
