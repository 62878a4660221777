//! Asset business logic with fail-fast manual checks.
//!
//! The checks run in a fixed order and stop at the first failure, so the
//! order below decides which single error a caller sees when several rules
//! fail at once:
//!
//! 1. key present, key format
//! 2. weight bound, weight precision
//! 3. effective date present, date order
//! 4. items, per the caller's rule group
//! 5. per item in sequence: index present, ascending vs. the previous item,
//!    name not blank

use std::sync::Arc;

use super::constraints::KeyFilter;
use super::error::RuleViolation;
use super::request::{AssetCreateRequest, ItemRank};
use super::response::AssetResponse;
use super::store::{AssetStore, NewAsset};
use crate::error::CoreError;
use crate::validation::evaluator;
use crate::validation::group::{ItemsPolicy, RuleGroup};
use crate::validation::rules::RuleOptions;

pub struct AssetService {
    store: Arc<dyn AssetStore>,
    options: RuleOptions,
    manual_checks: bool,
}

impl AssetService {
    /// Create a service with manual checks enabled.
    pub fn new(store: Arc<dyn AssetStore>, options: RuleOptions) -> Self {
        Self {
            store,
            options,
            manual_checks: true,
        }
    }

    /// Turn the fail-fast checks in `list`/`create` on or off.
    pub fn with_manual_checks(mut self, enabled: bool) -> Self {
        self.manual_checks = enabled;
        self
    }

    pub fn options(&self) -> &RuleOptions {
        &self.options
    }

    pub fn list(&self, filter: &KeyFilter) -> Result<Vec<AssetResponse>, CoreError> {
        let key = filter.as_key();
        if self.manual_checks {
            check_list_key(key)?;
        }
        let assets = self.store.list(key)?;
        Ok(assets.into_iter().map(AssetResponse::from).collect())
    }

    pub fn create(
        &self,
        group: RuleGroup,
        request: &AssetCreateRequest,
    ) -> Result<AssetResponse, CoreError> {
        if self.manual_checks {
            if let Err(rule) = self.check_create(request, group) {
                tracing::debug!(code = rule.code(), ?group, "Asset request rejected");
                return Err(rule.into());
            }
        }

        let asset = self.store.create(NewAsset::from(request))?;
        tracing::info!(
            key = asset.key.as_deref().unwrap_or_default(),
            created_at = %asset.created_at,
            "Asset created"
        );
        Ok(asset.into())
    }

    /// Run the fail-fast checks, returning the first rule that fails.
    pub fn check_create(
        &self,
        request: &AssetCreateRequest,
        group: RuleGroup,
    ) -> Result<(), RuleViolation> {
        let key = request.key.as_deref().ok_or(RuleViolation::NullOrInvalidKey)?;
        if !evaluator::key_format(Some(key)) {
            return Err(RuleViolation::KeyFormatInvalid);
        }

        if !evaluator::weight_bound(request.weight) {
            return Err(RuleViolation::WeightTooHeavy);
        }
        if !evaluator::weight_precision(request.weight) {
            return Err(RuleViolation::WeightPrecisionInvalid);
        }

        let effective = request
            .effective_date
            .ok_or(RuleViolation::NullEffectiveDate)?;
        if !evaluator::date_order(
            Some(effective),
            request.expiration_date,
            self.options.allow_equal_dates,
        ) {
            return Err(RuleViolation::ExpirationBeforeEffective);
        }

        check_items(request, group)
    }
}

/// A blank or missing list filter is not checked.
pub fn check_list_key(key: Option<&str>) -> Result<(), RuleViolation> {
    if evaluator::key_format(key) {
        Ok(())
    } else {
        Err(RuleViolation::KeyFormatInvalid)
    }
}

fn check_items(request: &AssetCreateRequest, group: RuleGroup) -> Result<(), RuleViolation> {
    let items = request.items_slice();
    match group.items_policy() {
        ItemsPolicy::Required if !evaluator::items_non_empty(items) => {
            return Err(RuleViolation::EmptyOrNullItems);
        }
        ItemsPolicy::Forbidden if items.is_some() => {
            return Err(RuleViolation::ItemsNotAllowed);
        }
        ItemsPolicy::Optional if items.is_some_and(|i| !evaluator::items_without_nulls(i)) => {
            return Err(RuleViolation::EmptyOrNullItems);
        }
        _ => {}
    }

    let mut previous: Option<ItemRank> = None;
    for item in items.into_iter().flatten().flatten() {
        if item.index.is_none() {
            return Err(RuleViolation::NullItemIndex);
        }
        let rank = ItemRank::of(Some(item));
        if let Some(previous) = previous {
            if !evaluator::items_ascending([previous, rank]) {
                return Err(RuleViolation::UnsortedItems);
            }
        }
        previous = Some(rank);
        if !evaluator::not_blank(item.name.as_deref()) {
            return Err(RuleViolation::BlankItemName);
        }
    }
    Ok(())
}
