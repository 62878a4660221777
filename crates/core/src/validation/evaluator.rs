//! Constraint evaluators -- pure predicates, no shared state.
//!
//! Each function answers one question about one attribute (or one
//! collection). Absent optional values are valid unless the evaluator is
//! explicitly about presence.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::types::Date;

/// Asset keys are `DSC-` plus four digits or `OPT-` plus five.
pub const ASSET_KEY_PATTERN: &str = r"^(DSC-\d{4}|OPT-\d{5})$";

/// Heaviest accepted weight (inclusive).
pub const MAX_WEIGHT: Decimal = Decimal::from_parts(450, 0, 0, false, 0);

/// Maximum number of significant fractional digits in a weight.
pub const MAX_WEIGHT_FRACTION_DIGITS: u32 = 2;

static ASSET_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ASSET_KEY_PATTERN).expect("valid regex"));

/// A missing key is not this rule's concern; presence is checked separately.
pub fn key_format(key: Option<&str>) -> bool {
    key.map_or(true, |k| ASSET_KEY_RE.is_match(k))
}

pub fn weight_bound(weight: Option<Decimal>) -> bool {
    weight.map_or(true, |w| w <= MAX_WEIGHT)
}

/// Counts fractional digits on the exact decimal, ignoring trailing zeros,
/// so `123.230` passes and `1.005` fails.
pub fn weight_precision(weight: Option<Decimal>) -> bool {
    weight.map_or(true, |w| w.normalize().scale() <= MAX_WEIGHT_FRACTION_DIGITS)
}

/// Expiration must not precede (or, when `allow_equal` is off, must strictly
/// follow) the effective date. Either date missing passes.
pub fn date_order(effective: Option<Date>, expiration: Option<Date>, allow_equal: bool) -> bool {
    match (effective, expiration) {
        (Some(effective), Some(expiration)) if allow_equal => expiration >= effective,
        (Some(effective), Some(expiration)) => expiration > effective,
        _ => true,
    }
}

/// Present, non-empty, and free of null elements.
pub fn items_non_empty<T>(items: Option<&[Option<T>]>) -> bool {
    match items {
        Some(items) => !items.is_empty() && items_without_nulls(items),
        None => false,
    }
}

pub fn items_without_nulls<T>(items: &[Option<T>]) -> bool {
    items.iter().all(Option::is_some)
}

/// Every key is `>=` the key before it. Fewer than two keys is trivially
/// ascending.
pub fn items_ascending<K: Ord>(keys: impl IntoIterator<Item = K>) -> bool {
    let mut keys = keys.into_iter();
    let Some(mut previous) = keys.next() else {
        return true;
    };
    for key in keys {
        if key < previous {
            return false;
        }
        previous = key;
    }
    true
}

/// Non-null and containing at least one non-whitespace character.
pub fn not_blank(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
