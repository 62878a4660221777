//! Collect-all constraints for asset payloads.
//!
//! Field paths use the JSON (camelCase) names. Cross-field checks report an
//! empty path.

use serde::Deserialize;
use validator::Validate;

use super::error::RuleViolation;
use super::request::AssetCreateRequest;
use super::response::AssetResponse;
use crate::validation::constrained::Constrained;
use crate::validation::evaluator;
use crate::validation::group::{ItemsPolicy, RuleGroup};
use crate::validation::rules::{RuleOptions, Violation};

/// Query of `list`: an optional asset key.
///
/// A key that is present is always checked against the key format, even when
/// blank. Only the fail-fast service path treats a blank key as "no filter"
/// (see [`KeyFilter::as_key`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KeyFilter {
    pub key: Option<String>,
}

impl KeyFilter {
    pub fn new(key: Option<String>) -> Self {
        Self { key }
    }

    /// The key as a store filter: blank means "no filter".
    pub fn as_key(&self) -> Option<&str> {
        self.key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

impl Constrained for KeyFilter {
    fn violations(&self, _group: RuleGroup, _options: &RuleOptions) -> Vec<Violation> {
        if evaluator::key_format(self.key.as_deref()) {
            Vec::new()
        } else {
            vec![Violation::new(
                "key",
                "asset_key",
                RuleViolation::KeyFormatInvalid.to_string(),
            )]
        }
    }
}

impl Constrained for AssetCreateRequest {
    fn violations(&self, group: RuleGroup, options: &RuleOptions) -> Vec<Violation> {
        let mut out = Vec::new();

        match self.key.as_deref() {
            None => out.push(Violation::new(
                "key",
                "not_null",
                RuleViolation::NullOrInvalidKey.to_string(),
            )),
            Some(key) if !evaluator::key_format(Some(key)) => out.push(Violation::new(
                "key",
                "asset_key",
                RuleViolation::KeyFormatInvalid.to_string(),
            )),
            Some(_) => {}
        }

        if !evaluator::weight_bound(self.weight) {
            out.push(Violation::new(
                "weight",
                "max",
                RuleViolation::WeightTooHeavy.to_string(),
            ));
        }
        if !evaluator::weight_precision(self.weight) {
            out.push(Violation::new(
                "weight",
                "digits",
                RuleViolation::WeightPrecisionInvalid.to_string(),
            ));
        }

        if self.effective_date.is_none() {
            out.push(Violation::new(
                "effectiveDate",
                "not_null",
                RuleViolation::NullEffectiveDate.to_string(),
            ));
        }

        if !evaluator::date_order(
            self.effective_date,
            self.expiration_date,
            options.allow_equal_dates,
        ) {
            out.push(date_order_violation(self, options));
        }

        items_violations(self, group, &mut out);
        out
    }
}

fn date_order_violation(request: &AssetCreateRequest, options: &RuleOptions) -> Violation {
    // Only reached when both dates are present.
    let expiration = request.expiration_date.map(|d| d.to_string()).unwrap_or_default();
    let effective = request.effective_date.map(|d| d.to_string()).unwrap_or_default();
    let message = if options.allow_equal_dates {
        format!("The expiration date [{expiration}] must not be before the effective date [{effective}].")
    } else {
        format!("The expiration date [{expiration}] must be after the effective date [{effective}].")
    };
    Violation::new("", "expiration_date", message)
}

fn items_violations(request: &AssetCreateRequest, group: RuleGroup, out: &mut Vec<Violation>) {
    let items = request.items_slice();

    match group.items_policy() {
        ItemsPolicy::Required if !evaluator::items_non_empty(items) => out.push(Violation::new(
            "items",
            "not_empty",
            RuleViolation::EmptyOrNullItems.to_string(),
        )),
        ItemsPolicy::Forbidden if items.is_some() => out.push(Violation::new(
            "items",
            "null",
            RuleViolation::ItemsNotAllowed.to_string(),
        )),
        ItemsPolicy::Optional if items.is_some_and(|i| !evaluator::items_without_nulls(i)) => {
            out.push(Violation::new(
                "items",
                "no_null_elements",
                RuleViolation::EmptyOrNullItems.to_string(),
            ))
        }
        _ => {}
    }

    let Some(items) = items else {
        return;
    };

    if !evaluator::items_ascending(request.item_ranks()) {
        out.push(Violation::new(
            "items",
            "ascending",
            RuleViolation::UnsortedItems.to_string(),
        ));
    }

    for (i, item) in items.iter().enumerate() {
        let Some(item) = item else { continue };
        let Err(errors) = item.validate() else {
            continue;
        };
        let fields = errors.field_errors();
        for (field, rule) in [("index", "not_null"), ("name", "not_blank")] {
            for err in fields.get(field).into_iter().flat_map(|errs| errs.iter()) {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                out.push(Violation::new(format!("items[{i}].{field}"), rule, message));
            }
        }
    }
}

impl Constrained for AssetResponse {
    fn violations(&self, _group: RuleGroup, _options: &RuleOptions) -> Vec<Violation> {
        if self.expiration_date.is_some() {
            Vec::new()
        } else {
            vec![Violation::new(
                "expirationDate",
                "not_null",
                "The expiration date must not be null.",
            )]
        }
    }
}

/// List results are not cascaded into.
impl Constrained for Vec<AssetResponse> {
    fn violations(&self, _group: RuleGroup, _options: &RuleOptions) -> Vec<Violation> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use super::*;
    use crate::assets::request::AssetItem;
    use crate::types::Date;

    fn item(index: Option<i32>, name: &str) -> Option<AssetItem> {
        Some(AssetItem {
            index,
            name: Some(name.to_string()),
        })
    }

    fn valid_request() -> AssetCreateRequest {
        AssetCreateRequest {
            key: Some("DSC-4391".into()),
            name: Some("Drill".into()),
            weight: Some(Decimal::new(1250, 2)),
            effective_date: Date::from_ymd_opt(2020, 12, 21),
            expiration_date: Date::from_ymd_opt(2021, 12, 21),
            items: Some(vec![item(Some(1), "bit")]),
        }
    }

    fn paths(violations: &[Violation]) -> Vec<&str> {
        let mut paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
        paths.sort();
        paths
    }

    #[test]
    fn valid_request_passes_every_group() {
        let request = valid_request();
        let options = RuleOptions::default();
        assert!(request.violations(RuleGroup::Admin, &options).is_empty());
        assert!(request.violations(RuleGroup::Default, &options).is_empty());
    }

    #[test]
    fn empty_request_reports_key_and_effective_date() {
        let request = AssetCreateRequest::default();
        let violations = request.violations(RuleGroup::Default, &RuleOptions::default());
        assert_eq!(paths(&violations), vec!["effectiveDate", "key"]);
        assert!(violations.iter().all(|v| v.rule == "not_null"));
    }

    #[test]
    fn admin_group_reports_date_order_items_and_key() {
        let request = AssetCreateRequest {
            effective_date: Date::from_ymd_opt(2020, 12, 21),
            expiration_date: Date::from_ymd_opt(2011, 12, 21),
            ..Default::default()
        };
        let violations = request.violations(RuleGroup::Admin, &RuleOptions::default());
        assert_eq!(paths(&violations), vec!["", "items", "key"]);

        let date_violation = violations.iter().find(|v| v.path.is_empty()).unwrap();
        assert_eq!(
            date_violation.message,
            "The expiration date [2011-12-21] must not be before the effective date [2020-12-21]."
        );
    }

    #[test]
    fn user_group_forbids_items() {
        let request = valid_request();
        let violations = request.violations(RuleGroup::User, &RuleOptions::default());
        assert_eq!(paths(&violations), vec!["items"]);
        assert_eq!(violations[0].rule, "null");

        let mut without_items = valid_request();
        without_items.items = None;
        assert!(without_items
            .violations(RuleGroup::User, &RuleOptions::default())
            .is_empty());
    }

    #[test]
    fn default_group_accepts_missing_or_empty_items() {
        let mut request = valid_request();
        request.items = None;
        assert!(request
            .violations(RuleGroup::Default, &RuleOptions::default())
            .is_empty());
        request.items = Some(Vec::new());
        assert!(request
            .violations(RuleGroup::Default, &RuleOptions::default())
            .is_empty());
    }

    #[test]
    fn null_element_reported_outside_admin_group() {
        let mut request = valid_request();
        request.items = Some(vec![item(Some(1), "bit"), None]);
        let violations = request.violations(RuleGroup::Default, &RuleOptions::default());
        assert_eq!(paths(&violations), vec!["items"]);
        assert_eq!(violations[0].rule, "no_null_elements");
    }

    #[test]
    fn strict_date_order_rejects_equal_dates() {
        let mut request = valid_request();
        request.expiration_date = request.effective_date;
        assert!(request
            .violations(RuleGroup::Admin, &RuleOptions::default())
            .is_empty());

        let strict = RuleOptions {
            allow_equal_dates: false,
        };
        let violations = request.violations(RuleGroup::Admin, &strict);
        assert_eq!(paths(&violations), vec![""]);
        assert!(violations[0].message.contains("must be after"));
    }

    #[test]
    fn weight_reports_both_bound_and_precision() {
        let mut request = valid_request();
        request.weight = Some(Decimal::from_str("450.125").unwrap());
        let violations = request.violations(RuleGroup::Default, &RuleOptions::default());
        let rules: Vec<_> = violations.iter().map(|v| v.rule).collect();
        assert_eq!(rules, vec!["max", "digits"]);
    }

    #[test]
    fn per_item_violations_carry_indexed_paths() {
        let mut request = valid_request();
        request.items = Some(vec![item(Some(1), "bit"), item(None, " ")]);
        let violations = request.violations(RuleGroup::Admin, &RuleOptions::default());
        assert_eq!(paths(&violations), vec!["items[1].index", "items[1].name"]);
    }

    #[test]
    fn unsorted_items_reported_on_collection() {
        let mut request = valid_request();
        request.items = Some(vec![item(Some(12), "a"), item(Some(1), "b")]);
        let violations = request.violations(RuleGroup::Admin, &RuleOptions::default());
        assert_eq!(paths(&violations), vec!["items"]);
        assert_eq!(violations[0].rule, "ascending");
    }

    #[test]
    fn evaluation_is_repeatable() {
        let request = AssetCreateRequest {
            key: Some("456".into()),
            items: Some(vec![item(Some(3), ""), item(Some(2), "x")]),
            ..Default::default()
        };
        let options = RuleOptions::default();
        let first = request.violations(RuleGroup::Admin, &options);
        let second = request.violations(RuleGroup::Admin, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn key_filter_checks_any_present_key() {
        let options = RuleOptions::default();
        assert!(KeyFilter::new(None).violations(RuleGroup::Default, &options).is_empty());
        assert!(KeyFilter::new(Some("OPT-12345".into()))
            .violations(RuleGroup::Default, &options)
            .is_empty());
        for key in ["", "  ", "123"] {
            let violations = KeyFilter::new(Some(key.into())).violations(RuleGroup::Default, &options);
            assert_eq!(violations.len(), 1, "{key:?}");
            assert_eq!(violations[0].path, "key");
            assert_eq!(violations[0].message, "The asset key is invalid.");
        }
    }

    #[test]
    fn response_requires_expiration_date() {
        let response = AssetResponse {
            key: Some("DSC-4391".into()),
            name: None,
            weight: None,
            effective_date: Date::from_ymd_opt(2020, 12, 21),
            expiration_date: None,
            items: Vec::new(),
            created_at: chrono::Utc::now(),
        };
        let violations = response.violations(RuleGroup::Admin, &RuleOptions::default());
        assert_eq!(paths(&violations), vec!["expirationDate"]);
    }
}
