//! Supported chains.
//!
//! Mainnet and the three testnets share contract shapes but not addresses, so
//! every lookup into [`crate::contracts`] is keyed by [`Chain`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Mainnet,
    Goerli,
    Sepolia,
    Holesky,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported chain: {0}")]
pub struct UnknownChain(pub String);

impl Chain {
    pub const ALL: [Chain; 4] = [Chain::Mainnet, Chain::Goerli, Chain::Sepolia, Chain::Holesky];

    pub fn chain_id(self) -> u64 {
        match self {
            Chain::Mainnet => 1,
            Chain::Goerli => 5,
            Chain::Sepolia => 11_155_111,
            Chain::Holesky => 17_000,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Chain::Mainnet => "mainnet",
            Chain::Goerli => "goerli",
            Chain::Sepolia => "sepolia",
            Chain::Holesky => "holesky",
        }
    }

    pub fn from_chain_id(id: u64) -> Option<Chain> {
        Chain::ALL.into_iter().find(|c| c.chain_id() == id)
    }

    pub fn is_testnet(self) -> bool {
        self != Chain::Mainnet
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Chain {
    type Err = UnknownChain;

    /// Accepts a chain name (case-insensitive) or a decimal chain id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if let Ok(id) = lower.parse::<u64>() {
            return Chain::from_chain_id(id).ok_or_else(|| UnknownChain(s.to_string()));
        }
        match lower.as_str() {
            "mainnet" | "homestead" | "ethereum" => Ok(Chain::Mainnet),
            "goerli" => Ok(Chain::Goerli),
            "sepolia" => Ok(Chain::Sepolia),
            "holesky" => Ok(Chain::Holesky),
            _ => Err(UnknownChain(s.to_string())),
        }
    }
}

/// Guess the chain from an RPC or subgraph URL.
pub fn infer_chain_from_url(url: &str) -> Option<Chain> {
    let lower = url.to_lowercase();
    if lower.contains("sepolia") {
        Some(Chain::Sepolia)
    } else if lower.contains("holesky") {
        Some(Chain::Holesky)
    } else if lower.contains("goerli") {
        Some(Chain::Goerli)
    } else if lower.contains("mainnet") {
        Some(Chain::Mainnet)
    } else {
        None
    }
}
