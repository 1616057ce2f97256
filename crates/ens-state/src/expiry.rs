//! Expiry classification.
//!
//! Comparisons are inclusive on `>=`: a name expiring exactly now is expired,
//! and one exactly at the end of its grace window is still in grace.

use ens_inspect_types::GRACE_PERIOD_SECS;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GraceState {
    InGrace,
    PastGrace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Active,
    ExpiringSoon,
    Expired(GraceState),
    /// No expiry is tracked (expiry of 0).
    NotApplicable,
}

impl ExpiryStatus {
    pub fn is_expired(self) -> bool {
        matches!(self, ExpiryStatus::Expired(_))
    }
}

/// Classify `expiry` (unix seconds, 0 = untracked) at `now`.
pub fn classify_expiry(expiry: u64, now: u64) -> ExpiryStatus {
    if expiry == 0 {
        return ExpiryStatus::NotApplicable;
    }
    if now >= expiry {
        // A grace end past u64::MAX is never reached.
        return match expiry.checked_add(GRACE_PERIOD_SECS) {
            Some(end) if now >= end => ExpiryStatus::Expired(GraceState::PastGrace),
            _ => ExpiryStatus::Expired(GraceState::InGrace),
        };
    }
    if now.saturating_add(GRACE_PERIOD_SECS) >= expiry {
        return ExpiryStatus::ExpiringSoon;
    }
    ExpiryStatus::Active
}

/// End of the grace window, if an expiry is tracked and the end fits in a `u64`.
pub fn grace_period_end(expiry: u64) -> Option<u64> {
    (expiry != 0)
        .then_some(expiry)
        .and_then(|e| e.checked_add(GRACE_PERIOD_SECS))
}
