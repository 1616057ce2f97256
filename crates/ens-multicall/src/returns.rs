//! ABI-encoded return data for the calls in [`crate::abi`].
//!
//! Offline transports (JSON snapshots, test doubles) answer a plan with the
//! same bytes a node would, so decoding is always exercised end to end.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{SolError, SolValue};

use crate::abi::IUniversalResolver;

/// `owner`, `resolver`, `ownerOf`, `addr`.
pub fn address(value: Address) -> Bytes {
    (value,).abi_encode_params().into()
}

/// `nameExpires`.
pub fn uint(value: u64) -> Bytes {
    (U256::from(value),).abi_encode_params().into()
}

pub fn boolean(value: bool) -> Bytes {
    (value,).abi_encode_params().into()
}

/// `text`.
pub fn string(value: &str) -> Bytes {
    (value.to_string(),).abi_encode_params().into()
}

/// NameWrapper `getData`.
pub fn wrapper_data(owner: Address, fuses: u32, expiry: u64) -> Bytes {
    (owner, fuses, expiry).abi_encode_params().into()
}

/// Universal Resolver `resolve`: the resolver's own return data and the
/// resolver that produced it.
pub fn resolve(data: Bytes, resolver: Address) -> Bytes {
    (data, resolver).abi_encode_params().into()
}

/// Universal Resolver `resolve` answering an `addr(node)` query.
pub fn resolve_addr(value: Address, resolver: Address) -> Bytes {
    resolve(address(value), resolver)
}

/// Universal Resolver `resolve` answering a `text(node, key)` query.
pub fn resolve_text(value: &str, resolver: Address) -> Bytes {
    resolve(string(value), resolver)
}

/// Universal Resolver `reverse`: primary name, its resolved address, the
/// reverse resolver and the forward resolver.
pub fn reverse(name: &str, resolved: Address, reverse_resolver: Address, resolver: Address) -> Bytes {
    (name.to_string(), resolved, reverse_resolver, resolver)
        .abi_encode_params()
        .into()
}

/// Revert data of the Universal Resolver's `ResolverNotFound()`.
pub fn resolver_not_found() -> Bytes {
    IUniversalResolver::ResolverNotFound {}.abi_encode().into()
}
