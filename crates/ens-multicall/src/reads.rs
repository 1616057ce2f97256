//! Typed views of individual ENS reads inside a [`BatchResults`].

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::SolCall;
use ens_inspect_types::{FuseSet, ResolvedAddress, WrapperRecord};

use crate::abi::{IBaseRegistrar, IEnsRegistry, INameWrapper, IPublicResolver, IUniversalResolver};
use crate::batch::{BatchResults, CallKey};
use crate::decode::Decoded;
use crate::error::CallError;

/// Primary-name answer of the Universal Resolver's `reverse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseRecord {
    pub name: String,
    pub resolved_address: Address,
    pub reverse_resolver: Address,
    pub resolver: Address,
}

impl BatchResults {
    pub fn registry_owner(&self, node: B256) -> Decoded<Address> {
        self.decode::<IEnsRegistry::ownerCall>(&CallKey::RegistryOwner { node })
            .map(|r| r._0)
    }

    pub fn registry_resolver(&self, node: B256) -> Decoded<Address> {
        self.decode::<IEnsRegistry::resolverCall>(&CallKey::RegistryResolver { node })
            .map(|r| r._0)
    }

    pub fn registrar_owner(&self, token: U256) -> Decoded<Address> {
        self.decode::<IBaseRegistrar::ownerOfCall>(&CallKey::RegistrarOwner { token })
            .map(|r| r._0)
    }

    /// `nameExpires`, saturated to `u64` seconds.
    pub fn registrar_expiry(&self, token: U256) -> Decoded<u64> {
        self.decode::<IBaseRegistrar::nameExpiresCall>(&CallKey::RegistrarExpiry { token })
            .map(|r| u64::try_from(r._0).unwrap_or(u64::MAX))
    }

    pub fn wrapper_data(&self, token: U256) -> Decoded<WrapperRecord> {
        self.decode::<INameWrapper::getDataCall>(&CallKey::WrapperData { token })
            .map(|r| WrapperRecord {
                owner: r.owner,
                fuses: FuseSet::from_bits(r.fuses),
                expiry: r.expiry,
            })
    }

    /// Raw Universal Resolver answer for the `addr` query of `node`.
    pub fn resolution(&self, node: B256) -> Decoded<ResolvedAddress> {
        self.decode::<IUniversalResolver::resolveCall>(&CallKey::ResolveAddr { node })
            .map(|r| ResolvedAddress::Resolved {
                data: r._0,
                resolver: r._1,
            })
    }

    /// The ETH address record, decoded from the resolver's return data.
    pub fn resolved_eth_address(&self, node: B256) -> Decoded<Address> {
        self.resolution(node).and_then(|resolved| match resolved.data() {
            Some(data) => decode_addr_record(data),
            None => Err(CallError::ResolutionFailed {
                reason: "no resolver data".to_string(),
            }),
        })
    }

    pub fn avatar(&self, node: B256) -> Decoded<String> {
        self.decode::<IUniversalResolver::resolveCall>(&CallKey::ResolveAvatar { node })
            .and_then(|r| decode_text_record(&r._0))
    }

    /// `Value(true)` when the probe succeeded, whatever it returned.
    pub fn wrapper_aware(&self, resolver: Address) -> Decoded<bool> {
        let key = CallKey::WrapperAwareProbe { resolver };
        self.decode::<IPublicResolver::isApprovedForCall>(&key)
            .map(|_| true)
    }

    pub fn reverse_record(&self, address: Address) -> Decoded<ReverseRecord> {
        self.decode::<IUniversalResolver::reverseCall>(&CallKey::Reverse { address })
            .map(|r| ReverseRecord {
                name: r._0,
                resolved_address: r._1,
                reverse_resolver: r._2,
                resolver: r._3,
            })
    }
}

pub fn decode_addr_record(data: &Bytes) -> Result<Address, CallError> {
    IPublicResolver::addrCall::abi_decode_returns(data, true)
        .map(|r| r._0)
        .map_err(|e| CallError::Decode {
            call: IPublicResolver::addrCall::SIGNATURE,
            reason: e.to_string(),
        })
}

pub fn decode_text_record(data: &Bytes) -> Result<String, CallError> {
    IPublicResolver::textCall::abi_decode_returns(data, true)
        .map(|r| r._0)
        .map_err(|e| CallError::Decode {
            call: IPublicResolver::textCall::SIGNATURE,
            reason: e.to_string(),
        })
}

/// Universal Resolver failures surface as [`ResolvedAddress::Failed`]; a call
/// that was never planned reads as a failure too.
pub fn resolution_or_failed(decoded: Decoded<ResolvedAddress>) -> ResolvedAddress {
    match decoded {
        Decoded::Value(resolved) => resolved,
        Decoded::Error(err) => ResolvedAddress::Failed {
            reason: err.to_string(),
        },
        Decoded::Unavailable => ResolvedAddress::Failed {
            reason: "not requested".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{BatchPlan, CallRequest, RawCallResult};
    use crate::returns;
    use alloy_primitives::address;
    use alloy_sol_types::SolValue;
    use ens_inspect_types::{contracts, Chain};
    use ens_names::namehash;

    const RESOLVER: Address = address!("231b0Ee14048e9dCcD1d247744d114a4EB5E8E63");
    const OWNER: Address = address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045");

    fn results(entries: Vec<(CallRequest, RawCallResult)>) -> BatchResults {
        let mut plan = BatchPlan::new();
        let mut raw = Vec::new();
        for (req, res) in entries {
            plan.push(req);
            raw.push(res);
        }
        BatchResults::from_positional(&plan, raw).unwrap()
    }

    #[test]
    fn test_registrar_expiry_saturates() {
        let c = contracts::builtin(Chain::Mainnet);
        let token = U256::from(1u64);
        let huge = (U256::MAX,).abi_encode_params().into();
        let r = results(vec![(
            CallRequest::registrar_expiry(c, token),
            RawCallResult::Success(huge),
        )]);
        assert_eq!(r.registrar_expiry(token).value(), Some(u64::MAX));
    }

    #[test]
    fn test_wrapper_data_becomes_record() {
        let c = contracts::builtin(Chain::Mainnet);
        let token = namehash("test.eth").token_id();
        let r = results(vec![(
            CallRequest::wrapper_data(c, token),
            RawCallResult::Success(returns::wrapper_data(OWNER, 0x10001, 42)),
        )]);
        let record = r.wrapper_data(token).value().unwrap();
        assert_eq!(record.owner, OWNER);
        assert_eq!(record.fuses.bits(), 0x10001);
        assert_eq!(record.expiry, 42);
    }

    #[test]
    fn test_resolved_eth_address() {
        let c = contracts::builtin(Chain::Mainnet);
        let node = namehash("nick.eth").0;
        let r = results(vec![(
            CallRequest::resolve_addr(c, "nick.eth"),
            RawCallResult::Success(returns::resolve_addr(OWNER, RESOLVER)),
        )]);
        assert_eq!(r.resolution(node).value().and_then(|a| a.resolver()), Some(RESOLVER));
        assert_eq!(r.resolved_eth_address(node).value(), Some(OWNER));
    }

    #[test]
    fn test_resolution_failure_is_failed_state() {
        let c = contracts::builtin(Chain::Mainnet);
        let node = namehash("nope.eth").0;
        let r = results(vec![(
            CallRequest::resolve_addr(c, "nope.eth"),
            RawCallResult::reverted(returns::resolver_not_found()),
        )]);
        let resolved = resolution_or_failed(r.resolution(node));
        assert_eq!(
            resolved,
            ResolvedAddress::Failed {
                reason: "resolution failed: ResolverNotFound".into()
            }
        );
        assert!(r.resolved_eth_address(node).is_error());
    }

    #[test]
    fn test_avatar_text() {
        let c = contracts::builtin(Chain::Mainnet);
        let node = namehash("nick.eth").0;
        let r = results(vec![(
            CallRequest::resolve_avatar(c, "nick.eth"),
            RawCallResult::Success(returns::resolve_text("eip155:1/erc721:0xabc/1", RESOLVER)),
        )]);
        assert_eq!(r.avatar(node).value().as_deref(), Some("eip155:1/erc721:0xabc/1"));
    }

    #[test]
    fn test_wrapper_aware_probe() {
        let aware = address!("00000000000000000000000000000000000000aa");
        let legacy = address!("00000000000000000000000000000000000000bb");
        let r = results(vec![
            (
                CallRequest::wrapper_aware_probe(aware),
                RawCallResult::Success(returns::boolean(false)),
            ),
            (
                CallRequest::wrapper_aware_probe(legacy),
                RawCallResult::reverted(Bytes::new()),
            ),
        ]);
        assert_eq!(r.wrapper_aware(aware).value(), Some(true));
        assert!(r.wrapper_aware(legacy).is_error());
        assert!(r.wrapper_aware(RESOLVER).is_unavailable());
    }

    #[test]
    fn test_reverse_record() {
        let c = contracts::builtin(Chain::Mainnet);
        let r = results(vec![(
            CallRequest::reverse(c, OWNER),
            RawCallResult::Success(returns::reverse("vitalik.eth", OWNER, RESOLVER, RESOLVER)),
        )]);
        let record = r.reverse_record(OWNER).value().unwrap();
        assert_eq!(record.name, "vitalik.eth");
        assert_eq!(record.resolved_address, OWNER);
    }
}
