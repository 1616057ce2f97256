//! The assembled state of one name query.

use alloy_primitives::Address;
use ens_inspect_types::fuses::FuseSummary;
use ens_inspect_types::{Chain, FuseSet, RegistrarRecord, RegistryRecord, ResolvedAddress, WrapperRecord};
use ens_names::{Name, NameInfo};
use serde::Serialize;

use crate::expiry::ExpiryStatus;
use crate::resolver::ResolverClassification;
use crate::wrapper::{UnregisteredReason, WrapperState};

/// Everything known about one name on one chain at one instant.
///
/// Built once per query and never patched; a failed query yields
/// [`NameState::empty`] rather than a partially filled state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameState {
    pub chain: Chain,
    pub name: Name,
    pub info: Option<NameInfo>,
    pub registry: RegistryRecord,
    /// .eth second-level names only.
    pub registrar: Option<RegistrarRecord>,
    pub wrapper: WrapperRecord,
    pub wrapper_state: WrapperState,
    pub fuses: FuseSummary,
    pub parent_wrapper_state: Option<WrapperState>,
    pub parent_can_emancipate: bool,
    /// Wrapper owner when wrapped, else registrar owner for .eth 2LDs, else
    /// Registry owner.
    pub owner: Option<Address>,
    pub expiry: Option<u64>,
    pub expiry_status: ExpiryStatus,
    pub grace_period_end: Option<u64>,
    pub out_of_sync: bool,
    pub resolution: ResolvedAddress,
    pub resolver: Option<ResolverClassification>,
    pub eth_address: Option<Address>,
    pub avatar: Option<String>,
    /// Primary name of `eth_address`, if it has one.
    pub primary_name: Option<String>,
    pub is_primary_name: bool,
    pub evaluated_at: u64,
}

impl NameState {
    /// All-default state for `name`.
    pub fn empty(chain: Chain, name: Name, now: u64) -> Self {
        Self {
            chain,
            info: None,
            name,
            registry: RegistryRecord::default(),
            registrar: None,
            wrapper: WrapperRecord::default(),
            wrapper_state: WrapperState::Unregistered {
                reason: UnregisteredReason::NeverWrappedOrExpired,
            },
            fuses: FuseSet::default().summary(),
            parent_wrapper_state: None,
            parent_can_emancipate: false,
            owner: None,
            expiry: None,
            expiry_status: ExpiryStatus::NotApplicable,
            grace_period_end: None,
            out_of_sync: false,
            resolution: ResolvedAddress::Failed {
                reason: "not inspected".to_string(),
            },
            resolver: None,
            eth_address: None,
            avatar: None,
            primary_name: None,
            is_primary_name: false,
            evaluated_at: now,
        }
    }

    /// Whether this state belongs to the query `(raw, chain)`. Callers drop
    /// states for keys they no longer want.
    pub fn is_for(&self, raw: &str, chain: Chain) -> bool {
        self.name.raw == raw && self.chain == chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_is_all_default() {
        let state = NameState::empty(Chain::Mainnet, Name::parse("nick.eth"), 42);
        assert!(state.owner.is_none());
        assert!(state.resolver.is_none());
        assert_eq!(state.expiry_status, ExpiryStatus::NotApplicable);
        assert!(!state.out_of_sync);
        assert!(state.is_for("nick.eth", Chain::Mainnet));
        assert!(!state.is_for("nick.eth", Chain::Sepolia));
    }

    #[test]
    fn test_serializes() {
        let state = NameState::empty(Chain::Sepolia, Name::parse("bad name"), 0);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["chain"], "sepolia");
        assert_eq!(json["name"]["is_name_valid"], false);
        assert_eq!(json["resolution"]["status"], "failed");
    }
}
