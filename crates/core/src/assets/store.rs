//! Storage seam for assets.
//!
//! The service only needs "list by key" and "create"; durable persistence
//! is somebody else's problem. [`MemoryAssetStore`] backs the server and the
//! tests.

use std::sync::RwLock;

use rust_decimal::Decimal;

use super::request::{AssetCreateRequest, AssetItem};
use crate::error::CoreError;
use crate::types::{Date, Timestamp};

/// Data needed to persist a new asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAsset {
    pub key: Option<String>,
    pub name: Option<String>,
    pub weight: Option<Decimal>,
    pub effective_date: Option<Date>,
    pub expiration_date: Option<Date>,
    pub items: Vec<AssetItem>,
}

impl From<&AssetCreateRequest> for NewAsset {
    /// Null item elements are dropped; validation has already rejected them
    /// when a rule applies.
    fn from(request: &AssetCreateRequest) -> Self {
        Self {
            key: request.key.clone(),
            name: request.name.clone(),
            weight: request.weight,
            effective_date: request.effective_date,
            expiration_date: request.expiration_date,
            items: request.items.iter().flatten().flatten().cloned().collect(),
        }
    }
}

/// A persisted asset with its assigned creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub key: Option<String>,
    pub name: Option<String>,
    pub weight: Option<Decimal>,
    pub effective_date: Option<Date>,
    pub expiration_date: Option<Date>,
    pub items: Vec<AssetItem>,
    pub created_at: Timestamp,
}

pub trait AssetStore: Send + Sync {
    /// All assets, or only those whose key equals `key`.
    fn list(&self, key: Option<&str>) -> Result<Vec<Asset>, CoreError>;

    /// Persist `asset` and return it with `created_at` assigned.
    fn create(&self, asset: NewAsset) -> Result<Asset, CoreError>;
}

/// Process-local store kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryAssetStore {
    assets: RwLock<Vec<Asset>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssetStore for MemoryAssetStore {
    fn list(&self, key: Option<&str>) -> Result<Vec<Asset>, CoreError> {
        let assets = self
            .assets
            .read()
            .map_err(|_| CoreError::Internal("asset store lock poisoned".into()))?;
        Ok(assets
            .iter()
            .filter(|a| key.map_or(true, |k| a.key.as_deref() == Some(k)))
            .cloned()
            .collect())
    }

    fn create(&self, asset: NewAsset) -> Result<Asset, CoreError> {
        let stored = Asset {
            key: asset.key,
            name: asset.name,
            weight: asset.weight,
            effective_date: asset.effective_date,
            expiration_date: asset.expiration_date,
            items: asset.items,
            created_at: chrono::Utc::now(),
        };
        self.assets
            .write()
            .map_err(|_| CoreError::Internal("asset store lock poisoned".into()))?
            .push(stored.clone());
        Ok(stored)
    }
}
