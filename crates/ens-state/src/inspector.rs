//! Two-phase name inspection.
//!
//! Phase 1 reads the Registry, Registrar, NameWrapper (for the name and its
//! parent) and asks the Universal Resolver for the address and avatar records.
//! Phase 2 depends on phase 1: it probes an old public resolver for wrapper
//! awareness and reverse-resolves the resolved address.
//!
//! Planning and assembly are pure functions; [`NameInspector`] only moves
//! plans and results across the transport.

use alloy_primitives::Address;
use anyhow::{bail, Result};
use ens_inspect_types::{
    Chain, ChainContracts, Fuses, RegistrarRecord, RegistryRecord, ResolvedAddress, WrapperRecord,
    GRACE_PERIOD_SECS,
};
use ens_multicall::{resolution_or_failed, BatchPlan, BatchResults, CallRequest};
use ens_names::{Name, NameInfo};
use tracing::{debug, error, warn};

use crate::expiry::{classify_expiry, grace_period_end, ExpiryStatus};
use crate::name_state::NameState;
use crate::resolver::{classify_resolver, ResolverClassification};
use crate::subnames::{SubnameTree, TreeLimits, TreeShape};
use crate::transport::{execute_plan, CallTransport, IndexerSource};
use crate::wrapper::{classify_wrapper_state, is_out_of_sync, parent_can_emancipate};

/// Registry, Registrar and NameWrapper reads plus Universal Resolver queries.
pub fn plan_phase_one(contracts: &ChainContracts, info: &NameInfo) -> BatchPlan {
    let mut plan = BatchPlan::new();
    plan.push(CallRequest::registry_owner(contracts, info.node.0));
    plan.push(CallRequest::registry_resolver(contracts, info.node.0));
    plan.push(CallRequest::wrapper_data(contracts, info.wrapper_token_id));
    if let Some(token) = info.registrar_token_id {
        plan.push(CallRequest::registrar_owner(contracts, token));
        plan.push(CallRequest::registrar_expiry(contracts, token));
    }
    if let Some(parent) = info.parent_node {
        plan.push(CallRequest::registry_owner(contracts, parent.0));
        plan.push(CallRequest::wrapper_data(contracts, parent.token_id()));
    }
    if !info.is_root() {
        plan.push(CallRequest::resolve_addr(contracts, &info.name));
        plan.push(CallRequest::resolve_avatar(contracts, &info.name));
    }
    plan
}

/// Follow-up reads that depend on phase 1 answers.
pub fn plan_phase_two(
    contracts: &ChainContracts,
    info: &NameInfo,
    phase_one: &BatchResults,
) -> BatchPlan {
    let mut plan = BatchPlan::new();
    let resolver = resolver_of(contracts, info, phase_one);
    if resolver.needs_wrapper_probe() {
        plan.push(CallRequest::wrapper_aware_probe(resolver.resolver));
    }
    if let Some(address) = eth_address_of(info, phase_one) {
        plan.push(CallRequest::reverse(contracts, address));
    }
    plan
}

fn resolver_of(
    contracts: &ChainContracts,
    info: &NameInfo,
    results: &BatchResults,
) -> ResolverClassification {
    let resolution = if info.is_root() {
        None
    } else {
        results.resolution(info.node.0).value()
    };
    let direct = results.registry_resolver(info.node.0).strict(Address::ZERO);
    classify_resolver(resolution.and_then(|r| r.resolver()), direct, contracts)
}

fn eth_address_of(info: &NameInfo, results: &BatchResults) -> Option<Address> {
    results
        .resolved_eth_address(info.node.0)
        .value()
        .filter(|a| *a != Address::ZERO)
}

/// Assemble the state of a valid name from both phases' results.
///
/// `indexer_owner` stands in for the registrar owner when `ownerOf` reverted.
pub fn assemble_state(
    contracts: &ChainContracts,
    name: &Name,
    info: &NameInfo,
    results: &BatchResults,
    indexer_owner: Option<Address>,
    now: u64,
) -> NameState {
    let node = info.node.0;
    let registry = RegistryRecord {
        owner: results.registry_owner(node).strict(Address::ZERO),
        resolver: results.registry_resolver(node).strict(Address::ZERO),
    };
    let wrapper = results
        .wrapper_data(info.wrapper_token_id)
        .strict(WrapperRecord::default());

    let registrar = info.registrar_token_id.map(|token| {
        let owner = match results.registrar_owner(token).lenient() {
            Some(Ok(owner)) => Some(owner),
            Some(Err(err)) => {
                debug!(name = %info.name, error = %err, "ownerOf failed; using indexer registrant");
                indexer_owner
            }
            None => None,
        };
        RegistrarRecord {
            owner,
            expiry: results.registrar_expiry(token).strict(0),
        }
    });

    let wrapper_state = classify_wrapper_state(
        &info.name,
        false,
        registry.owner,
        &wrapper,
        contracts.name_wrapper,
    );

    let parent_wrapper_state = info
        .parent_name
        .as_deref()
        .zip(info.parent_node)
        .map(|(parent, parent_node)| {
            let parent_owner = results.registry_owner(parent_node.0).strict(Address::ZERO);
            let parent_wrapper = results
                .wrapper_data(parent_node.token_id())
                .strict(WrapperRecord::default());
            classify_wrapper_state(
                parent,
                true,
                parent_owner,
                &parent_wrapper,
                contracts.name_wrapper,
            )
        });

    let owner = if wrapper_state.is_wrapped() {
        Some(wrapper.owner)
    } else if let Some(registrar) = &registrar {
        registrar.owner
    } else {
        Some(registry.owner).filter(|o| *o != Address::ZERO)
    };

    let expiry = match &registrar {
        Some(registrar) => Some(registrar.expiry),
        None if wrapper_state.is_wrapped()
            && wrapper.fuses.contains(Fuses::PARENT_CANNOT_CONTROL) =>
        {
            Some(wrapper.expiry)
        }
        None => None,
    };
    let expiry_status = expiry.map_or(ExpiryStatus::NotApplicable, |e| classify_expiry(e, now));

    // The NameWrapper stores .eth expiries with the grace period already added.
    let out_of_sync = registrar.as_ref().is_some_and(|r| {
        is_out_of_sync(
            info.is_eth_2ld,
            wrapper_state,
            wrapper.expiry,
            r.expiry.saturating_add(GRACE_PERIOD_SECS),
        )
    });

    let resolution = if info.is_root() {
        ResolvedAddress::Failed {
            reason: "the root has no records".to_string(),
        }
    } else {
        resolution_or_failed(results.resolution(node))
    };
    let resolver = resolver_of(contracts, info, results);
    let resolver = resolver.with_probe(results.wrapper_aware(resolver.resolver));

    let eth_address = eth_address_of(info, results);
    let primary_name = eth_address
        .and_then(|address| results.reverse_record(address).value())
        .map(|record| record.name)
        .filter(|n| !n.is_empty());
    let is_primary_name = primary_name
        .as_deref()
        .and_then(|primary| Name::parse(primary).normalized_name)
        .is_some_and(|primary| primary == info.name);

    NameState {
        chain: contracts.chain,
        name: name.clone(),
        info: Some(info.clone()),
        registry,
        registrar,
        wrapper,
        wrapper_state,
        fuses: wrapper.fuses.summary(),
        parent_wrapper_state,
        parent_can_emancipate: parent_wrapper_state.is_some_and(parent_can_emancipate),
        owner,
        expiry,
        expiry_status,
        grace_period_end: expiry.and_then(grace_period_end),
        out_of_sync,
        resolution,
        resolver: (!info.is_root()).then_some(resolver),
        eth_address,
        avatar: results.avatar(node).value().filter(|a| !a.is_empty()),
        primary_name,
        is_primary_name,
        evaluated_at: now,
    }
}

/// Inspects names on one chain through a transport and an indexer.
pub struct NameInspector<T, I> {
    contracts: ChainContracts,
    transport: T,
    indexer: I,
}

impl<T: CallTransport, I: IndexerSource> NameInspector<T, I> {
    pub fn new(contracts: ChainContracts, transport: T, indexer: I) -> Self {
        Self {
            contracts,
            transport,
            indexer,
        }
    }

    pub fn chain(&self) -> Chain {
        self.contracts.chain
    }

    pub fn contracts(&self) -> &ChainContracts {
        &self.contracts
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Inspect `raw` at `now`. Never fails: any error is logged and yields
    /// [`NameState::empty`].
    pub async fn inspect(&self, raw: &str, now: u64) -> NameState {
        let name = Name::parse(raw);
        match self.try_inspect(&name, now).await {
            Ok(state) => state,
            Err(err) => {
                error!(
                    name = raw,
                    chain = %self.chain(),
                    error = %format!("{err:#}"),
                    "inspection failed; returning empty state"
                );
                NameState::empty(self.chain(), name, now)
            }
        }
    }

    async fn try_inspect(&self, name: &Name, now: u64) -> Result<NameState> {
        let Some(info) = name.info() else {
            debug!(raw = %name.raw, "invalid name; nothing to read");
            return Ok(NameState::empty(self.chain(), name.clone(), now));
        };

        let phase_one =
            execute_plan(&self.transport, &plan_phase_one(&self.contracts, &info)).await?;
        let phase_two = execute_plan(
            &self.transport,
            &plan_phase_two(&self.contracts, &info, &phase_one),
        )
        .await?;
        let results = phase_one.merged(phase_two);

        let indexer_owner = match info.registrar_token_id {
            Some(token) if results.registrar_owner(token).is_error() => {
                self.registrant_fallback(&info.name).await
            }
            _ => None,
        };

        Ok(assemble_state(
            &self.contracts,
            name,
            &info,
            &results,
            indexer_owner,
            now,
        ))
    }

    /// Indexer failures only leave the owner empty.
    async fn registrant_fallback(&self, name: &str) -> Option<Address> {
        match self.indexer.registrant(name).await {
            Ok(owner) => owner,
            Err(err) => {
                warn!(name, error = %format!("{err:#}"), "indexer registrant lookup failed");
                None
            }
        }
    }

    /// One page of the subname tree under `raw`.
    pub async fn subnames(
        &self,
        raw: &str,
        page: usize,
        limits: TreeLimits,
        now: u64,
    ) -> Result<SubnameTree> {
        let name = Name::parse(raw);
        let Some(info) = name.info() else {
            bail!(
                "invalid name {raw:?}: {}",
                name.normalization_error.unwrap_or_default()
            );
        };
        if info.level < 2 {
            bail!("subname trees need a name of level 2 or deeper, got {:?}", info.name);
        }

        let indexed = self.indexer.subnames(&info.name, page, limits).await?;
        let shape = TreeShape::build(&info.name, &indexed, limits);
        let results = execute_plan(&self.transport, &shape.plan(&self.contracts)).await?;
        Ok(SubnameTree {
            root: shape.attach(&results, self.contracts.name_wrapper, now),
            page,
            limits,
        })
    }
}
