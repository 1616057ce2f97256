//! Resolver classification.

use alloy_primitives::Address;
use ens_inspect_types::ChainContracts;
use ens_multicall::{CallError, Decoded};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverKind {
    NoResolver,
    LatestPublic,
    OldPublic,
    Custom,
}

/// Resolver facts of one name. `is_wildcard` is independent of `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolverClassification {
    /// The resolver that answered, or the Registry resolver when nothing answered.
    pub resolver: Address,
    pub kind: ResolverKind,
    /// Resolver set directly on the name in the Registry.
    pub has_direct_resolver: bool,
    /// No direct resolver, but an ancestor's resolver answered.
    pub is_wildcard: bool,
    /// Only probed for old public resolvers; `None` when not probed.
    pub wrapper_aware: Option<bool>,
}

/// Place `resolver` in a resolver category.
///
/// The latest public resolver defaults to the first historical one when the
/// chain does not name one explicitly.
pub fn classify_resolver_kind(
    resolver: Address,
    latest_public: Option<Address>,
    historical: &[Address],
) -> ResolverKind {
    if resolver == Address::ZERO {
        return ResolverKind::NoResolver;
    }
    if latest_public.or_else(|| historical.first().copied()) == Some(resolver) {
        return ResolverKind::LatestPublic;
    }
    if historical.contains(&resolver) {
        return ResolverKind::OldPublic;
    }
    ResolverKind::Custom
}

/// Classify the resolver of a name.
///
/// `answering` is the resolver the Universal Resolver reports, if resolution
/// succeeded; `direct` is `Registry.resolver(node)`.
pub fn classify_resolver(
    answering: Option<Address>,
    direct: Address,
    contracts: &ChainContracts,
) -> ResolverClassification {
    let answering = answering.filter(|a| *a != Address::ZERO);
    let has_direct_resolver = direct != Address::ZERO;
    let resolver = answering.unwrap_or(direct);
    ResolverClassification {
        resolver,
        kind: classify_resolver_kind(
            resolver,
            contracts.latest_public_resolver,
            &contracts.public_resolvers,
        ),
        has_direct_resolver,
        is_wildcard: !has_direct_resolver && answering.is_some(),
        wrapper_aware: None,
    }
}

impl ResolverClassification {
    pub fn needs_wrapper_probe(&self) -> bool {
        self.kind == ResolverKind::OldPublic
    }

    /// Record the wrapper-awareness probe. A failed or reverted probe means
    /// the resolver is not wrapper-aware; a missing probe leaves it unknown.
    pub fn with_probe(mut self, probe: Decoded<bool>) -> Self {
        if !self.needs_wrapper_probe() {
            return self;
        }
        self.wrapper_aware = match probe.lenient() {
            Some(Ok(_)) => Some(true),
            Some(Err(err)) => {
                log_probe_failure(&self.resolver, &err);
                Some(false)
            }
            None => None,
        };
        self
    }
}

fn log_probe_failure(resolver: &Address, err: &CallError) {
    tracing::debug!(%resolver, error = %err, "resolver is not wrapper-aware");
}
