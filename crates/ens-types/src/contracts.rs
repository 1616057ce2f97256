//! ENS contract addresses per chain.
//!
//! The built-in table is process-wide static data: built once on first access
//! and never mutated. Overrides are layered on top by [`crate::config::ChainRegistry`],
//! which produces its own owned copy.
//!
//! # Example
//!
//! ```
//! use ens_inspect_types::{contracts::builtin, Chain};
//!
//! let mainnet = builtin(Chain::Mainnet);
//! assert!(mainnet.is_known_public_resolver(&mainnet.latest_public_resolver.unwrap()));
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

use crate::chain::Chain;

/// ENS registry, identical on every supported chain.
pub const ENS_REGISTRY: Address = address!("00000000000C2E074eC69A0dFb2997BA6C7d2e1e");

/// Legacy .eth BaseRegistrar (ERC-721 over labelhashes), identical on every supported chain.
pub const BASE_REGISTRAR: Address = address!("57f1887a8BF19b14fC0dF6Fd9B2acc9Af147eA85");

/// Contract addresses for one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainContracts {
    pub chain: Chain,
    pub registry: Address,
    pub base_registrar: Address,
    pub name_wrapper: Address,
    pub universal_resolver: Address,
    /// May be unset for a chain override; see [`ChainContracts::latest_resolver`].
    pub latest_public_resolver: Option<Address>,
    /// Every public resolver ever deployed on this chain, newest first.
    pub public_resolvers: Vec<Address>,
    /// Subgraph endpoint used for subname pages and fallback owner lookups.
    pub subgraph_url: Option<String>,
}

impl ChainContracts {
    /// The latest public resolver, falling back to the newest historical one.
    pub fn latest_resolver(&self) -> Option<Address> {
        self.latest_public_resolver
            .or_else(|| self.public_resolvers.first().copied())
    }

    pub fn is_known_public_resolver(&self, resolver: &Address) -> bool {
        self.public_resolvers.contains(resolver)
    }
}

static BUILTIN: LazyLock<BTreeMap<Chain, ChainContracts>> = LazyLock::new(|| {
    let mut chains = BTreeMap::new();

    chains.insert(
        Chain::Mainnet,
        ChainContracts {
            chain: Chain::Mainnet,
            registry: ENS_REGISTRY,
            base_registrar: BASE_REGISTRAR,
            name_wrapper: address!("D4416b13d2b3a9aBae7AcD5D6C2BbDBE25686401"),
            universal_resolver: address!("ce01f8eee7E479C928F8919abD53E553a36CeF67"),
            latest_public_resolver: Some(address!("231b0Ee14048e9dCcD1d247744d114a4EB5E8E63")),
            public_resolvers: vec![
                address!("231b0Ee14048e9dCcD1d247744d114a4EB5E8E63"),
                address!("4976fb03C32e5B8cfe2b6cCB31c09Ba78EBaBa41"),
                address!("DaaF96c344f63131acadD0Ea35170E7892d3dfBA"),
                address!("226159d592E2b063810a10Ebf6dcbADA94Ed68b8"),
                address!("1da022710dF5002339274AaDEe8D58218e9D6AB5"),
                address!("5FfC014343cd971B7eb70732021E26C35B744cc4"),
            ],
            subgraph_url: Some(
                "https://api.thegraph.com/subgraphs/name/ensdomains/ens".to_string(),
            ),
        },
    );

    chains.insert(
        Chain::Goerli,
        ChainContracts {
            chain: Chain::Goerli,
            registry: ENS_REGISTRY,
            base_registrar: BASE_REGISTRAR,
            name_wrapper: address!("114D4603199df73e7D157787f8778E21fCd13066"),
            universal_resolver: address!("fc4AC75C46C914aF5892d6d3eFFcebD7917293F1"),
            latest_public_resolver: Some(address!("d7a4F6473f32aC2Af804B3686AE8F1932bC35750")),
            public_resolvers: vec![
                address!("d7a4F6473f32aC2Af804B3686AE8F1932bC35750"),
                address!("342cf18D3e41DE491aa1a3067574C0C0bA65bB8a"),
                address!("19c2d5D0f035563344dBB7bE5fD09c8dad62b001"),
                address!("4B1488B7a6B320d2D721406204aBc3eeAa9AD329"),
                address!("E264d5bb84bA3b8061ADC38D3D76e6674aB91852"),
            ],
            subgraph_url: Some(
                "https://api.thegraph.com/subgraphs/name/ensdomains/ensgoerli".to_string(),
            ),
        },
    );

    chains.insert(
        Chain::Sepolia,
        ChainContracts {
            chain: Chain::Sepolia,
            registry: ENS_REGISTRY,
            base_registrar: BASE_REGISTRAR,
            name_wrapper: address!("0635513f179D50A207757E05759CbD106d7dFcE8"),
            universal_resolver: address!("c8Af999e38273D658BE1b921b88A9Ddf005769cC"),
            latest_public_resolver: Some(address!("8FADE66B79cC9f707aB26799354482EB93a5B7dD")),
            public_resolvers: vec![
                address!("8FADE66B79cC9f707aB26799354482EB93a5B7dD"),
                address!("0CeEC524b2807841739D3B5E161F5bf1430FFA48"),
            ],
            subgraph_url: Some(
                "https://api.studio.thegraph.com/query/49574/enssepolia/version/latest"
                    .to_string(),
            ),
        },
    );

    chains.insert(
        Chain::Holesky,
        ChainContracts {
            chain: Chain::Holesky,
            registry: ENS_REGISTRY,
            base_registrar: BASE_REGISTRAR,
            name_wrapper: address!("ab50971078225D365994dc1Edcb9b7FD72Bb4862"),
            universal_resolver: address!("a6ac935d4971E3CD133b950aE053bECD16fE7f3b"),
            latest_public_resolver: Some(address!("9010A27463717360cAD99CEA8bD39b8705CCA238")),
            public_resolvers: vec![address!("9010A27463717360cAD99CEA8bD39b8705CCA238")],
            subgraph_url: Some(
                "https://api.studio.thegraph.com/query/49574/ensholesky/version/latest"
                    .to_string(),
            ),
        },
    );

    chains
});

/// Built-in contracts for `chain`. Every [`Chain`] variant has an entry.
pub fn builtin(chain: Chain) -> &'static ChainContracts {
    &BUILTIN[&chain]
}

/// The whole built-in table.
pub fn builtin_table() -> &'static BTreeMap<Chain, ChainContracts> {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_chain_has_contracts() {
        for chain in Chain::ALL {
            let contracts = builtin(chain);
            assert_eq!(contracts.chain, chain);
            assert_eq!(contracts.registry, ENS_REGISTRY);
            assert_ne!(contracts.name_wrapper, Address::ZERO);
            assert!(!contracts.public_resolvers.is_empty());
        }
    }

    #[test]
    fn test_latest_resolver_is_first_historical() {
        for chain in Chain::ALL {
            let contracts = builtin(chain);
            assert_eq!(
                contracts.latest_resolver(),
                contracts.public_resolvers.first().copied()
            );
        }
    }

    #[test]
    fn test_latest_resolver_falls_back_when_unset() {
        let mut contracts = builtin(Chain::Mainnet).clone();
        contracts.latest_public_resolver = None;
        assert_eq!(
            contracts.latest_resolver(),
            Some(address!("231b0Ee14048e9dCcD1d247744d114a4EB5E8E63"))
        );
        contracts.public_resolvers.clear();
        assert_eq!(contracts.latest_resolver(), None);
    }

    #[test]
    fn test_wrappers_differ_between_chains() {
        assert_ne!(
            builtin(Chain::Mainnet).name_wrapper,
            builtin(Chain::Sepolia).name_wrapper
        );
    }
}
