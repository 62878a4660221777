use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::request::AssetItem;
use super::store::Asset;
use crate::types::{Date, Timestamp};

/// Asset as returned by `list` and `create`.
///
/// `expiration_date` stays optional here so the post-condition check can see
/// (and reject) a missing value instead of the type hiding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetResponse {
    pub key: Option<String>,
    pub name: Option<String>,
    pub weight: Option<Decimal>,
    pub effective_date: Option<Date>,
    pub expiration_date: Option<Date>,
    pub items: Vec<AssetItem>,
    pub created_at: Timestamp,
}

impl From<Asset> for AssetResponse {
    fn from(asset: Asset) -> Self {
        Self {
            key: asset.key,
            name: asset.name,
            weight: asset.weight,
            effective_date: asset.effective_date,
            expiration_date: asset.expiration_date,
            items: asset.items,
            created_at: asset.created_at,
        }
    }
}
