//! Inbound asset creation payload.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::error::RuleViolation;
use crate::types::Date;
use crate::validation::evaluator;

/// Body of `POST /assets`.
///
/// Every field is optional at the type level so that missing values reach
/// the validators instead of failing deserialization. `items` keeps JSON
/// `null` elements as `None` so they can be reported.
///
/// `weight` is read from the literal JSON number, never through `f64`, so
/// its digits reach the precision and bound checks unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCreateRequest {
    pub key: Option<String>,
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub weight: Option<Decimal>,
    pub effective_date: Option<Date>,
    pub expiration_date: Option<Date>,
    pub items: Option<Vec<Option<AssetItem>>>,
}

/// One entry of [`AssetCreateRequest::items`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AssetItem {
    #[validate(required(message = "The index of the item must not be null."))]
    pub index: Option<i32>,

    #[validate(
        required(message = "The name of the item must not be blank."),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,
}

fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if evaluator::not_blank(Some(name)) {
        return Ok(());
    }
    let mut err = ValidationError::new("not_blank");
    err.message = Some(Cow::Owned(RuleViolation::BlankItemName.to_string()));
    Err(err)
}

/// Sort key for items in a collection.
///
/// Indexed items order by index; an item without an index sorts after every
/// indexed item, and a null element sorts after everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ItemRank {
    Indexed(i32),
    Unindexed,
    Missing,
}

impl ItemRank {
    pub fn of(item: Option<&AssetItem>) -> Self {
        match item.map(|i| i.index) {
            Some(Some(index)) => ItemRank::Indexed(index),
            Some(None) => ItemRank::Unindexed,
            None => ItemRank::Missing,
        }
    }
}

impl AssetCreateRequest {
    pub fn items_slice(&self) -> Option<&[Option<AssetItem>]> {
        self.items.as_deref()
    }

    /// Ranks of all items in sequence order.
    pub fn item_ranks(&self) -> impl Iterator<Item = ItemRank> + '_ {
        self.items
            .iter()
            .flatten()
            .map(|item| ItemRank::of(item.as_ref()))
    }
}
