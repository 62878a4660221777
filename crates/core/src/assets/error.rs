/// One business rule that failed during fail-fast checking.
///
/// Each variant carries a fixed message and is always a client error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("The asset key must not be null.")]
    NullOrInvalidKey,

    #[error("The asset key is invalid.")]
    KeyFormatInvalid,

    #[error("The weight of the asset is over 450.")]
    WeightTooHeavy,

    #[error("Only 2 digits are allowed after the decimal point.")]
    WeightPrecisionInvalid,

    #[error("The effective date must not be null.")]
    NullEffectiveDate,

    #[error("The expiration date must be after effective date.")]
    ExpirationBeforeEffective,

    #[error("The items must not be empty or contain null elements.")]
    EmptyOrNullItems,

    #[error("The items must not be supplied by this caller.")]
    ItemsNotAllowed,

    #[error("The index of the item must not be null.")]
    NullItemIndex,

    #[error("The items are not sorted.")]
    UnsortedItems,

    #[error("The name of the item must not be blank.")]
    BlankItemName,
}

impl RuleViolation {
    /// Stable error code for API responses.
    pub fn code(self) -> &'static str {
        match self {
            RuleViolation::NullOrInvalidKey => "NULL_ASSET_KEY",
            RuleViolation::KeyFormatInvalid => "INVALID_ASSET_KEY",
            RuleViolation::WeightTooHeavy => "WEIGHT_TOO_HEAVY",
            RuleViolation::WeightPrecisionInvalid => "WEIGHT_PRECISION_INVALID",
            RuleViolation::NullEffectiveDate => "NULL_EFFECTIVE_DATE",
            RuleViolation::ExpirationBeforeEffective => "EXPIRATION_BEFORE_EFFECTIVE",
            RuleViolation::EmptyOrNullItems => "EMPTY_OR_NULL_ITEMS",
            RuleViolation::ItemsNotAllowed => "ITEMS_NOT_ALLOWED",
            RuleViolation::NullItemIndex => "NULL_ITEM_INDEX",
            RuleViolation::UnsortedItems => "UNSORTED_ITEMS",
            RuleViolation::BlankItemName => "BLANK_ITEM_NAME",
        }
    }
}
