//! In-memory chain and indexer doubles.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use alloy_primitives::{address, Address, Bytes, B256, U256};
use anyhow::{anyhow, Result};
use ens_inspect_types::{contracts, Chain, ChainContracts};
use ens_multicall::{returns, BatchPlan, CallKey, RawCallResult};
use ens_names::{labelhash, namehash};
use ens_state::{CallTransport, IndexedSubname, IndexerSource, TreeLimits};

pub const NOW: u64 = 1_700_000_000;
pub const ALICE: Address = address!("000000000000000000000000000000000000abcd");
pub const BOB: Address = address!("000000000000000000000000000000000000b0b0");

pub fn mainnet() -> &'static ChainContracts {
    contracts::builtin(Chain::Mainnet)
}

/// Answers every call key from plain records, ABI-encoded like a node would.
#[derive(Default)]
pub struct MockChain {
    registry: HashMap<B256, (Address, Address)>,
    wrapper: HashMap<U256, (Address, u32, u64)>,
    registrar: HashMap<U256, (Option<Address>, u64)>,
    addr: HashMap<B256, (Address, Address)>,
    avatar: HashMap<B256, (String, Address)>,
    reverse: HashMap<Address, String>,
    wrapper_aware: HashSet<Address>,
    fail_batches: bool,
    pub batches: AtomicUsize,
}

impl MockChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(mut self, name: &str, owner: Address, resolver: Address) -> Self {
        self.registry.insert(namehash(name).0, (owner, resolver));
        self
    }

    pub fn wrapped(mut self, name: &str, owner: Address, fuses: u32, expiry: u64) -> Self {
        self.wrapper
            .insert(namehash(name).token_id(), (owner, fuses, expiry));
        self
    }

    /// `owner: None` makes `ownerOf` revert.
    pub fn registrar(mut self, label: &str, owner: Option<Address>, expiry: u64) -> Self {
        self.registrar
            .insert(labelhash(label).token_id(), (owner, expiry));
        self
    }

    pub fn resolves(mut self, name: &str, value: Address, resolver: Address) -> Self {
        self.addr.insert(namehash(name).0, (value, resolver));
        self
    }

    pub fn avatar(mut self, name: &str, value: &str, resolver: Address) -> Self {
        self.avatar
            .insert(namehash(name).0, (value.to_string(), resolver));
        self
    }

    pub fn primary(mut self, address: Address, name: &str) -> Self {
        self.reverse.insert(address, name.to_string());
        self
    }

    pub fn wrapper_aware(mut self, resolver: Address) -> Self {
        self.wrapper_aware.insert(resolver);
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_batches = true;
        self
    }

    pub fn batch_count(&self) -> usize {
        self.batches.load(Ordering::SeqCst)
    }

    pub fn answer(&self, key: &CallKey) -> RawCallResult {
        match key {
            CallKey::RegistryOwner { node } => {
                let (owner, _) = self.registry.get(node).copied().unwrap_or_default();
                RawCallResult::Success(returns::address(owner))
            }
            CallKey::RegistryResolver { node } => {
                let (_, resolver) = self.registry.get(node).copied().unwrap_or_default();
                RawCallResult::Success(returns::address(resolver))
            }
            CallKey::RegistrarOwner { token } => match self.registrar.get(token) {
                Some((Some(owner), _)) => RawCallResult::Success(returns::address(*owner)),
                _ => RawCallResult::reverted(Bytes::new()),
            },
            CallKey::RegistrarExpiry { token } => {
                let expiry = self.registrar.get(token).map_or(0, |(_, e)| *e);
                RawCallResult::Success(returns::uint(expiry))
            }
            CallKey::WrapperData { token } => {
                let (owner, fuses, expiry) = self.wrapper.get(token).copied().unwrap_or_default();
                RawCallResult::Success(returns::wrapper_data(owner, fuses, expiry))
            }
            CallKey::ResolveAddr { node } => match self.addr.get(node) {
                Some((value, resolver)) => {
                    RawCallResult::Success(returns::resolve_addr(*value, *resolver))
                }
                None => RawCallResult::reverted(returns::resolver_not_found()),
            },
            CallKey::ResolveAvatar { node } => match self.avatar.get(node) {
                Some((value, resolver)) => {
                    RawCallResult::Success(returns::resolve_text(value, *resolver))
                }
                None => RawCallResult::reverted(returns::resolver_not_found()),
            },
            CallKey::WrapperAwareProbe { resolver } => {
                if self.wrapper_aware.contains(resolver) {
                    RawCallResult::Success(returns::boolean(false))
                } else {
                    RawCallResult::reverted(Bytes::new())
                }
            }
            CallKey::Reverse { address } => match self.reverse.get(address) {
                Some(name) => RawCallResult::Success(returns::reverse(
                    name,
                    *address,
                    Address::ZERO,
                    Address::ZERO,
                )),
                None => RawCallResult::reverted(returns::resolver_not_found()),
            },
        }
    }
}

#[async_trait::async_trait]
impl CallTransport for MockChain {
    async fn execute(&self, plan: &BatchPlan) -> Result<Vec<RawCallResult>> {
        self.batches.fetch_add(1, Ordering::SeqCst);
        if self.fail_batches {
            return Err(anyhow!("connection reset"));
        }
        Ok(plan.keys().map(|key| self.answer(key)).collect())
    }
}

#[derive(Default)]
pub struct MockIndexer {
    pub subnames: HashMap<String, Vec<IndexedSubname>>,
    pub registrants: HashMap<String, Address>,
    pub fail: bool,
}

#[async_trait::async_trait]
impl IndexerSource for MockIndexer {
    async fn subnames(
        &self,
        name: &str,
        page: usize,
        limits: TreeLimits,
    ) -> Result<Vec<IndexedSubname>> {
        if self.fail {
            return Err(anyhow!("indexer unavailable"));
        }
        Ok(self
            .subnames
            .get(name)
            .map(|all| {
                all.iter()
                    .skip(page * limits.max_fanout)
                    .take(limits.max_fanout)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn registrant(&self, name: &str) -> Result<Option<Address>> {
        if self.fail {
            return Err(anyhow!("indexer unavailable"));
        }
        Ok(self.registrants.get(name).copied())
    }
}

pub fn subname(label: &str, subdomains: Vec<IndexedSubname>) -> IndexedSubname {
    IndexedSubname {
        id: None,
        label_name: Some(label.to_string()),
        labelhash: labelhash(label).hex(),
        subdomains,
    }
}
