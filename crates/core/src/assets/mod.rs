//! Asset creation and listing.
//!
//! Request/response types, the fail-fast [`service::AssetService`], the
//! collect-all constraints for each type, and the storage seam. Persistence
//! is behind [`store::AssetStore`]; callers supply the implementation.

pub mod constraints;
pub mod error;
pub mod request;
pub mod resource;
pub mod response;
pub mod service;
pub mod store;
