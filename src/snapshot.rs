//! File-backed chain and indexer data for offline inspection.
//!
//! A snapshot lists names with the records the ENS contracts hold for them,
//! plus whatever an indexer would know about them:
//!
//! ```json
//! {
//!   "chain": "mainnet",
//!   "now": 1700000000,
//!   "names": {
//!     "foo.eth": {
//!       "registry": { "owner": "0xD4416b13d2b3a9aBae7AcD5D6C2BbDBE25686401", "resolver": "0x231b0Ee14048e9dCcD1d247744d114a4EB5E8E63" },
//!       "wrapper": { "owner": "0x000000000000000000000000000000000000abcd", "fuses": 196608, "expiry": 1800000000 },
//!       "registrar": { "owner": "0xD4416b13d2b3a9aBae7AcD5D6C2BbDBE25686401", "expiry": 1790000000 },
//!       "resolution": { "resolver": "0x231b0Ee14048e9dCcD1d247744d114a4EB5E8E63", "address": "0x000000000000000000000000000000000000abcd" },
//!       "subnames": [{ "labelName": "sub", "labelhash": "0x…" }]
//!     }
//!   },
//!   "primary_names": [{ "address": "0x000000000000000000000000000000000000abcd", "name": "foo.eth" }]
//! }
//! ```
//!
//! Loaded once into lookup tables keyed the way calls are keyed (node, token
//! id, address). [`Snapshot`] answers calls with ABI-encoded return data, so
//! inspection runs through the same decoding path as against a node.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use alloy_primitives::{Address, Bytes, B256, U256};
use anyhow::{anyhow, bail, Context, Result};
use ens_inspect_types::{Chain, RegistrarRecord, RegistryRecord, WrapperRecord};
use ens_multicall::{returns, BatchPlan, CallKey, RawCallResult};
use ens_names::Name;
use ens_state::{CallTransport, IndexedSubname, IndexerSource, TreeLimits};
use serde::Deserialize;
use tracing::debug;

/// On-disk snapshot layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotFile {
    #[serde(default)]
    pub chain: Option<Chain>,
    /// Evaluation time recorded with the snapshot.
    #[serde(default)]
    pub now: Option<u64>,
    #[serde(default)]
    pub names: BTreeMap<String, SnapshotName>,
    #[serde(default)]
    pub primary_names: Vec<PrimaryName>,
    /// Resolvers that implement the wrapper-era `isApprovedFor` method.
    #[serde(default)]
    pub wrapper_aware_resolvers: Vec<Address>,
    /// Every batch fails, as with an unreachable node.
    #[serde(default)]
    pub offline: bool,
}

/// Records held for one name. Missing records read as the contracts' defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotName {
    #[serde(default)]
    pub registry: RegistryRecord,
    #[serde(default)]
    pub wrapper: Option<WrapperRecord>,
    /// .eth second-level names only. A `null` owner makes `ownerOf` revert.
    #[serde(default)]
    pub registrar: Option<RegistrarRecord>,
    /// What the Universal Resolver answers; absent means no resolver was found.
    #[serde(default)]
    pub resolution: Option<SnapshotResolution>,
    /// Indexer registrant, used when `ownerOf` reverts.
    #[serde(default)]
    pub registrant: Option<Address>,
    #[serde(default)]
    pub subnames: Vec<IndexedSubname>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotResolution {
    /// The resolver that answered, possibly found by wildcard.
    pub resolver: Address,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrimaryName {
    pub address: Address,
    pub name: String,
}

/// Snapshot tables keyed for call answering.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    chain: Option<Chain>,
    now: Option<u64>,
    registry: HashMap<B256, RegistryRecord>,
    wrapper: HashMap<U256, WrapperRecord>,
    registrar: HashMap<U256, RegistrarRecord>,
    resolution: HashMap<B256, SnapshotResolution>,
    reverse: HashMap<Address, String>,
    wrapper_aware: HashSet<Address>,
    registrants: HashMap<String, Address>,
    subnames: HashMap<String, Vec<IndexedSubname>>,
    offline: bool,
}

impl Snapshot {
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid snapshot: {}", path.display()))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: SnapshotFile =
            serde_json::from_str(json).context("Failed to parse snapshot JSON")?;
        Self::from_snapshot_file(file)
    }

    /// Index `file` by node and token id. Names are normalized first, so
    /// `Foo.eth` and `foo.eth` are the same entry.
    pub fn from_snapshot_file(file: SnapshotFile) -> Result<Self> {
        let mut snapshot = Snapshot {
            chain: file.chain,
            now: file.now,
            wrapper_aware: file.wrapper_aware_resolvers.into_iter().collect(),
            offline: file.offline,
            ..Default::default()
        };

        for (raw, entry) in file.names {
            let name = Name::parse(&raw);
            let info = name.info().ok_or_else(|| {
                anyhow!(
                    "snapshot name {raw:?} is invalid: {}",
                    name.normalization_error.clone().unwrap_or_default()
                )
            })?;
            if snapshot.registry.contains_key(&info.node.0) {
                bail!("snapshot lists {:?} twice", info.name);
            }

            snapshot.registry.insert(info.node.0, entry.registry);
            if let Some(wrapper) = entry.wrapper {
                snapshot.wrapper.insert(info.wrapper_token_id, wrapper);
            }
            if let Some(registrar) = entry.registrar {
                let token = info.registrar_token_id.ok_or_else(|| {
                    anyhow!(
                        "snapshot gives a registrar record to {:?}, which is not a .eth second-level name",
                        info.name
                    )
                })?;
                snapshot.registrar.insert(token, registrar);
            }
            if let Some(resolution) = entry.resolution {
                snapshot.resolution.insert(info.node.0, resolution);
            }
            if let Some(registrant) = entry.registrant {
                snapshot.registrants.insert(info.name.clone(), registrant);
            }
            if !entry.subnames.is_empty() {
                snapshot.subnames.insert(info.name.clone(), entry.subnames);
            }
        }

        for primary in file.primary_names {
            snapshot.reverse.insert(primary.address, primary.name);
        }

        debug!(
            names = snapshot.registry.len(),
            primary_names = snapshot.reverse.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn chain(&self) -> Option<Chain> {
        self.chain
    }

    pub fn now(&self) -> Option<u64> {
        self.now
    }

    /// The raw answer a node would give for `key`.
    pub fn answer(&self, key: &CallKey) -> RawCallResult {
        match key {
            CallKey::RegistryOwner { node } => {
                let record = self.registry.get(node).copied().unwrap_or_default();
                RawCallResult::Success(returns::address(record.owner))
            }
            CallKey::RegistryResolver { node } => {
                let record = self.registry.get(node).copied().unwrap_or_default();
                RawCallResult::Success(returns::address(record.resolver))
            }
            // ownerOf reverts for tokens that were never minted or have expired.
            CallKey::RegistrarOwner { token } => {
                match self.registrar.get(token).and_then(|r| r.owner) {
                    Some(owner) => RawCallResult::Success(returns::address(owner)),
                    None => RawCallResult::reverted(Bytes::new()),
                }
            }
            CallKey::RegistrarExpiry { token } => {
                let expiry = self.registrar.get(token).map_or(0, |r| r.expiry);
                RawCallResult::Success(returns::uint(expiry))
            }
            CallKey::WrapperData { token } => {
                let record = self.wrapper.get(token).copied().unwrap_or_default();
                RawCallResult::Success(returns::wrapper_data(
                    record.owner,
                    record.fuses.bits(),
                    record.expiry,
                ))
            }
            CallKey::ResolveAddr { node } => match self.resolution.get(node) {
                Some(r) => RawCallResult::Success(returns::resolve_addr(
                    r.address.unwrap_or(Address::ZERO),
                    r.resolver,
                )),
                None => RawCallResult::reverted(returns::resolver_not_found()),
            },
            CallKey::ResolveAvatar { node } => match self.resolution.get(node) {
                Some(r) => RawCallResult::Success(returns::resolve_text(
                    r.avatar.as_deref().unwrap_or_default(),
                    r.resolver,
                )),
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
impl CallTransport for Snapshot {
    async fn execute(&self, plan: &BatchPlan) -> Result<Vec<RawCallResult>> {
        if self.offline {
            bail!("snapshot is marked offline");
        }
        Ok(plan.keys().map(|key| self.answer(key)).collect())
    }
}

#[async_trait::async_trait]
impl IndexerSource for Snapshot {
    async fn subnames(
        &self,
        name: &str,
        page: usize,
        limits: TreeLimits,
    ) -> Result<Vec<IndexedSubname>> {
        let Some(all) = self.subnames.get(name) else {
            return Ok(Vec::new());
        };
        Ok(all
            .iter()
            .skip(page.saturating_mul(limits.max_fanout))
            .take(limits.max_fanout)
            .cloned()
            .collect())
    }

    async fn registrant(&self, name: &str) -> Result<Option<Address>> {
        Ok(self.registrants.get(name).copied())
    }
}
