//! Rule-group resolution from the caller credential.
//!
//! The group decides which optional constraints are active for a request.
//! It is resolved from an explicit [`CallContext`] on every call and never
//! cached, since the credential changes from one request to the next.

use serde::Serialize;

use crate::roles::{ROLE_ADMIN, ROLE_USER};

/// Individual rule tags. Every group contains [`GroupTag::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GroupTag {
    Default,
    AdminExtras,
    UserExtras,
}

/// The tag set applied to one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleGroup {
    /// `{Default}` -- base constraints only.
    #[default]
    Default,
    /// `{Default, AdminExtras}` -- items are required.
    Admin,
    /// `{Default, UserExtras}` -- items are forbidden.
    User,
}

/// What a group says about the `items` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemsPolicy {
    Required,
    Forbidden,
    Optional,
}

impl RuleGroup {
    /// Map a caller credential to its group.
    ///
    /// `admin` and `user` match case-insensitively; anything else, including
    /// a missing credential, falls back to [`RuleGroup::Default`].
    pub fn resolve(credential: Option<&str>) -> Self {
        match credential {
            Some(c) if c.eq_ignore_ascii_case(ROLE_ADMIN) => RuleGroup::Admin,
            Some(c) if c.eq_ignore_ascii_case(ROLE_USER) => RuleGroup::User,
            _ => RuleGroup::Default,
        }
    }

    pub fn tags(self) -> &'static [GroupTag] {
        match self {
            RuleGroup::Default => &[GroupTag::Default],
            RuleGroup::Admin => &[GroupTag::Default, GroupTag::AdminExtras],
            RuleGroup::User => &[GroupTag::Default, GroupTag::UserExtras],
        }
    }

    pub fn includes(self, tag: GroupTag) -> bool {
        self.tags().contains(&tag)
    }

    pub fn items_policy(self) -> ItemsPolicy {
        if self.includes(GroupTag::AdminExtras) {
            ItemsPolicy::Required
        } else if self.includes(GroupTag::UserExtras) {
            ItemsPolicy::Forbidden
        } else {
            ItemsPolicy::Optional
        }
    }
}

/// Per-call context threaded explicitly into validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallContext {
    credential: Option<String>,
}

impl CallContext {
    pub fn new(credential: Option<String>) -> Self {
        Self { credential }
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// Resolve the group for this call. Recomputed every time.
    pub fn rule_group(&self) -> RuleGroup {
        RuleGroup::resolve(self.credential())
    }
}
