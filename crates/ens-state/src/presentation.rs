//! Human-readable tags and dates.
//!
//! Output only: nothing here is read back by the classifiers, and any of it can
//! be replaced without touching state.

use chrono::{DateTime, Utc};

use crate::expiry::{ExpiryStatus, GraceState};
use crate::name_state::NameState;
use crate::resolver::ResolverKind;
use crate::subnames::SubnameNode;
use crate::wrapper::{UnregisteredReason, WrapperState};

pub fn wrapper_label(state: WrapperState) -> &'static str {
    match state {
        WrapperState::Locked => "Locked",
        WrapperState::Emancipated => "Emancipated",
        WrapperState::Wrapped => "Wrapped",
        WrapperState::Unwrapped => "Unwrapped",
        WrapperState::Unregistered {
            reason: UnregisteredReason::NeverWrappedOrExpired,
        } => "Unregistered",
        WrapperState::Unregistered {
            reason: UnregisteredReason::PreviouslyWrapped,
        } => "Expired Wrapped Name",
    }
}

/// `None` for statuses that warrant no tag.
pub fn expiry_label(status: ExpiryStatus) -> Option<&'static str> {
    match status {
        ExpiryStatus::Expired(GraceState::PastGrace) => Some("Expired"),
        ExpiryStatus::Expired(GraceState::InGrace) => Some("Grace Period"),
        ExpiryStatus::ExpiringSoon => Some("Expiring Soon"),
        ExpiryStatus::Active | ExpiryStatus::NotApplicable => None,
    }
}

pub fn resolver_label(kind: ResolverKind) -> &'static str {
    match kind {
        ResolverKind::NoResolver => "No Resolver",
        ResolverKind::LatestPublic => "Latest Resolver",
        ResolverKind::OldPublic => "Old Resolver",
        ResolverKind::Custom => "Custom Resolver",
    }
}

/// Tags for a name, most significant first.
pub fn state_tags(state: &NameState) -> Vec<&'static str> {
    let mut tags = Vec::new();
    if !state.name.is_name_valid {
        tags.push("Invalid Name");
        return tags;
    }
    tags.push(wrapper_label(state.wrapper_state));
    if let Some(label) = expiry_label(state.expiry_status) {
        tags.push(label);
    }
    if state.out_of_sync {
        tags.push("Out of Sync");
    }
    if let Some(resolver) = &state.resolver {
        if resolver.is_wildcard {
            tags.push("Wildcard");
        }
        tags.push(resolver_label(resolver.kind));
        if resolver.wrapper_aware == Some(false) {
            tags.push("Resolver not wrapper-aware");
        }
    }
    if state.is_primary_name {
        tags.push("Primary Name");
    }
    tags
}

/// Tags for one subname row.
pub fn subname_tags(node: &SubnameNode) -> Vec<&'static str> {
    let mut tags = Vec::new();
    if node.shows_expired {
        tags.push("Expired");
    } else {
        tags.push(wrapper_label(node.wrapper_state));
    }
    if node.shows_expiring_soon {
        tags.push("Expiring Soon");
    }
    tags
}

/// `2024-05-01 12:00:00 UTC`, or the raw number if out of range.
pub fn format_timestamp(secs: u64) -> String {
    i64::try_from(secs)
        .ok()
        .and_then(|s| DateTime::<Utc>::from_timestamp(s, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| secs.to_string())
}

/// Human form of an expiry; `None` when no expiry is tracked.
pub fn format_expiry(expiry: Option<u64>) -> Option<String> {
    expiry.filter(|e| *e != 0).map(format_timestamp)
}

/// `in 12 days`, `3 days ago`, `today`.
pub fn relative_days(target: u64, now: u64) -> String {
    const DAY: u64 = 24 * 60 * 60;
    if target >= now {
        match (target - now) / DAY {
            0 => "today".to_string(),
            1 => "in 1 day".to_string(),
            n => format!("in {n} days"),
        }
    } else {
        match (now - target) / DAY {
            0 => "today".to_string(),
            1 => "1 day ago".to_string(),
            n => format!("{n} days ago"),
        }
    }
}
