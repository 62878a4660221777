//! Request-context extractors.
//!
//! - [`caller::Caller`] -- Captures the caller credential from the
//!   `Authorization` header as an explicit [`CallContext`].
//!
//! [`CallContext`]: assetgate_core::validation::group::CallContext

pub mod caller;
