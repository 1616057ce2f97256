//! Raw records as read from the ENS contracts.
//!
//! These are the already-fetched inputs to every classifier; nothing here
//! performs I/O. All values are rebuilt per query and never patched in place.

use alloy_primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};

use crate::fuses::FuseSet;

/// `Registry.owner(node)` and `Registry.resolver(node)`.
///
/// `owner` is the zero address for unregistered names and the NameWrapper
/// address for wrapped ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryRecord {
    pub owner: Address,
    pub resolver: Address,
}

/// `NameWrapper.getData(uint256(node))`. Meaningful only when `owner` is non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperRecord {
    pub owner: Address,
    pub fuses: FuseSet,
    pub expiry: u64,
}

impl WrapperRecord {
    pub fn is_owned(&self) -> bool {
        self.owner != Address::ZERO
    }
}

/// Legacy .eth registrar record; only exists for .eth second-level names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrarRecord {
    /// `ownerOf(labelhash)`; `None` when the call reverted and no fallback answered.
    pub owner: Option<Address>,
    /// `nameExpires(labelhash)`; 0 when never registered.
    pub expiry: u64,
}

/// Result of a Universal Resolver query.
///
/// Offchain gateway failures and "no record" are deliberately not told apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolvedAddress {
    Failed { reason: String },
    Resolved { data: Bytes, resolver: Address },
}

impl ResolvedAddress {
    pub fn resolver(&self) -> Option<Address> {
        match self {
            ResolvedAddress::Resolved { resolver, .. } => Some(*resolver),
            ResolvedAddress::Failed { .. } => None,
        }
    }

    pub fn data(&self) -> Option<&Bytes> {
        match self {
            ResolvedAddress::Resolved { data, .. } => Some(data),
            ResolvedAddress::Failed { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolvedAddress::Resolved { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_wrapper_record_owned() {
        assert!(!WrapperRecord::default().is_owned());
        let rec = WrapperRecord {
            owner: address!("000000000000000000000000000000000000abcd"),
            fuses: FuseSet::from_bits(1),
            expiry: 10,
        };
        assert!(rec.is_owned());
    }

    #[test]
    fn test_resolved_address_accessors() {
        let failed = ResolvedAddress::Failed {
            reason: "gateway unreachable".into(),
        };
        assert!(!failed.is_resolved());
        assert_eq!(failed.resolver(), None);

        let ok = ResolvedAddress::Resolved {
            data: Bytes::from_static(&[1, 2, 3]),
            resolver: address!("231b0Ee14048e9dCcD1d247744d114a4EB5E8E63"),
        };
        assert_eq!(ok.data().map(|d| d.len()), Some(3));
        assert!(ok.resolver().is_some());
    }

    #[test]
    fn test_resolved_address_json_shape() {
        let json = r#"{"status":"failed","reason":"revert"}"#;
        let parsed: ResolvedAddress = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed,
            ResolvedAddress::Failed {
                reason: "revert".into()
            }
        );
    }
}
