//! Keyed read batches.
//!
//! Every request carries a [`CallKey`] naming what it reads. Plans are executed
//! positionally by a transport and paired back to their keys once, in
//! [`BatchResults::from_positional`].

use std::collections::HashMap;

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::SolCall;
use ens_inspect_types::ChainContracts;
use ens_names::{dns_encode, namehash, reverse_name};
use serde::Serialize;

use crate::abi::{
    IBaseRegistrar, IEnsRegistry, INameWrapper, IPublicResolver, IUniversalResolver, AVATAR_KEY,
};
use crate::decode::{decode_raw, Decoded};
use crate::error::{BatchError, CallError};

/// What a single call reads. Keys embed the hashes they target, so two reads of
/// different names never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum CallKey {
    RegistryOwner { node: B256 },
    RegistryResolver { node: B256 },
    /// Legacy registrar `ownerOf(labelhash)`.
    RegistrarOwner { token: U256 },
    RegistrarExpiry { token: U256 },
    /// NameWrapper `getData(node)`.
    WrapperData { token: U256 },
    /// Universal Resolver `addr(node)` query, wildcard and CCIP-Read aware.
    ResolveAddr { node: B256 },
    ResolveAvatar { node: B256 },
    /// Wrapper-era method probe against a resolver.
    WrapperAwareProbe { resolver: Address },
    /// Universal Resolver primary name of an address.
    Reverse { address: Address },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequest {
    pub key: CallKey,
    pub target: Address,
    pub calldata: Bytes,
}

impl CallRequest {
    pub fn new(key: CallKey, target: Address, calldata: Vec<u8>) -> Self {
        Self {
            key,
            target,
            calldata: calldata.into(),
        }
    }

    pub fn registry_owner(contracts: &ChainContracts, node: B256) -> Self {
        Self::new(
            CallKey::RegistryOwner { node },
            contracts.registry,
            IEnsRegistry::ownerCall { node }.abi_encode(),
        )
    }

    pub fn registry_resolver(contracts: &ChainContracts, node: B256) -> Self {
        Self::new(
            CallKey::RegistryResolver { node },
            contracts.registry,
            IEnsRegistry::resolverCall { node }.abi_encode(),
        )
    }

    pub fn registrar_owner(contracts: &ChainContracts, token: U256) -> Self {
        Self::new(
            CallKey::RegistrarOwner { token },
            contracts.base_registrar,
            IBaseRegistrar::ownerOfCall { id: token }.abi_encode(),
        )
    }

    pub fn registrar_expiry(contracts: &ChainContracts, token: U256) -> Self {
        Self::new(
            CallKey::RegistrarExpiry { token },
            contracts.base_registrar,
            IBaseRegistrar::nameExpiresCall { id: token }.abi_encode(),
        )
    }

    pub fn wrapper_data(contracts: &ChainContracts, token: U256) -> Self {
        Self::new(
            CallKey::WrapperData { token },
            contracts.name_wrapper,
            INameWrapper::getDataCall { id: token }.abi_encode(),
        )
    }

    /// `UniversalResolver.resolve(dnsName, addr(node))`.
    pub fn resolve_addr(contracts: &ChainContracts, name: &str) -> Self {
        let node = namehash(name).0;
        let inner = IPublicResolver::addrCall { node }.abi_encode();
        Self::universal_resolve(contracts, CallKey::ResolveAddr { node }, name, inner)
    }

    /// `UniversalResolver.resolve(dnsName, text(node, "avatar"))`.
    pub fn resolve_avatar(contracts: &ChainContracts, name: &str) -> Self {
        let node = namehash(name).0;
        let inner = IPublicResolver::textCall {
            node,
            key: AVATAR_KEY.to_string(),
        }
        .abi_encode();
        Self::universal_resolve(contracts, CallKey::ResolveAvatar { node }, name, inner)
    }

    fn universal_resolve(
        contracts: &ChainContracts,
        key: CallKey,
        name: &str,
        inner: Vec<u8>,
    ) -> Self {
        Self::new(
            key,
            contracts.universal_resolver,
            IUniversalResolver::resolveCall {
                name: dns_encode(name).into(),
                data: inner.into(),
            }
            .abi_encode(),
        )
    }

    /// Harmless read of a method only wrapper-aware resolvers implement.
    pub fn wrapper_aware_probe(resolver: Address) -> Self {
        Self::new(
            CallKey::WrapperAwareProbe { resolver },
            resolver,
            IPublicResolver::isApprovedForCall {
                owner: Address::ZERO,
                node: B256::ZERO,
                delegate: Address::ZERO,
            }
            .abi_encode(),
        )
    }

    pub fn reverse(contracts: &ChainContracts, address: Address) -> Self {
        Self::new(
            CallKey::Reverse { address },
            contracts.universal_resolver,
            IUniversalResolver::reverseCall {
                reverseName: dns_encode(&reverse_name(&address)).into(),
            }
            .abi_encode(),
        )
    }
}

/// Ordered, duplicate-free list of requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchPlan {
    requests: Vec<CallRequest>,
}

impl BatchPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `request` unless its key is already planned. Returns whether it was added.
    pub fn push(&mut self, request: CallRequest) -> bool {
        if self.contains(&request.key) {
            return false;
        }
        self.requests.push(request);
        true
    }

    pub fn contains(&self, key: &CallKey) -> bool {
        self.requests.iter().any(|r| &r.key == key)
    }

    pub fn requests(&self) -> &[CallRequest] {
        &self.requests
    }

    pub fn keys(&self) -> impl Iterator<Item = &CallKey> {
        self.requests.iter().map(|r| &r.key)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

impl Extend<CallRequest> for BatchPlan {
    fn extend<I: IntoIterator<Item = CallRequest>>(&mut self, iter: I) {
        for request in iter {
            self.push(request);
        }
    }
}

/// One entry of a batch as returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawCallResult {
    Success(Bytes),
    Failure(CallError),
}

impl RawCallResult {
    pub fn reverted(data: impl Into<Bytes>) -> Self {
        RawCallResult::Failure(CallError::from_revert_data(data))
    }
}

/// Results of one or more executed plans, addressed by key.
#[derive(Debug, Clone, Default)]
pub struct BatchResults {
    entries: HashMap<CallKey, RawCallResult>,
}

impl BatchResults {
    /// Pair a transport's positional results with the plan that produced them.
    pub fn from_positional(
        plan: &BatchPlan,
        results: Vec<RawCallResult>,
    ) -> Result<Self, BatchError> {
        if plan.len() != results.len() {
            return Err(BatchError::LengthMismatch {
                expected: plan.len(),
                actual: results.len(),
            });
        }
        let entries = plan.keys().copied().zip(results).collect();
        Ok(Self { entries })
    }

    /// Every key of `plan` fails with `error`; used when a whole batch is lost.
    pub fn all_failed(plan: &BatchPlan, error: CallError) -> Self {
        let entries = plan
            .keys()
            .map(|key| (*key, RawCallResult::Failure(error.clone())))
            .collect();
        Self { entries }
    }

    /// Results of both batches. Keys present in both take `later`'s entry.
    pub fn merged(mut self, later: BatchResults) -> Self {
        self.entries.extend(later.entries);
        self
    }

    pub fn raw(&self, key: &CallKey) -> Option<&RawCallResult> {
        self.entries.get(key)
    }

    /// Decode the entry for `key` as the return value of `C`.
    pub fn decode<C: SolCall>(&self, key: &CallKey) -> Decoded<C::Return> {
        decode_raw::<C>(self.raw(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
