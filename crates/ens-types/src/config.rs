//! Chain registry: the built-in contract table plus optional overrides.
//!
//! Overrides come from a JSON file keyed by chain name:
//!
//! ```json
//! {
//!   "sepolia": {
//!     "name_wrapper": "0x0635513f179D50A207757E05759CbD106d7dFcE8",
//!     "public_resolvers": ["0x8FADE66B79cC9f707aB26799354482EB93a5B7dD"]
//!   }
//! }
//! ```
//!
//! The registry is built once at startup and only read afterwards.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use alloy_primitives::Address;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::chain::Chain;
use crate::contracts::{builtin_table, ChainContracts};
use crate::env_utils::env_string_or;

/// Env var naming an overrides file.
pub const CONFIG_ENV: &str = "ENS_INSPECT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown chain '{0}' in config")]
    UnknownChain(String),
}

/// Per-chain override; unset fields keep the built-in value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainOverride {
    pub registry: Option<Address>,
    pub base_registrar: Option<Address>,
    pub name_wrapper: Option<Address>,
    pub universal_resolver: Option<Address>,
    pub latest_public_resolver: Option<Address>,
    pub public_resolvers: Option<Vec<Address>>,
    pub subgraph_url: Option<String>,
}

impl ChainOverride {
    fn apply(self, base: &mut ChainContracts) {
        if let Some(v) = self.registry {
            base.registry = v;
        }
        if let Some(v) = self.base_registrar {
            base.base_registrar = v;
        }
        if let Some(v) = self.name_wrapper {
            base.name_wrapper = v;
        }
        if let Some(v) = self.universal_resolver {
            base.universal_resolver = v;
        }
        if let Some(v) = self.public_resolvers {
            base.public_resolvers = v;
            // A replaced list invalidates the built-in "latest" unless it is re-set below.
            base.latest_public_resolver = None;
        }
        if let Some(v) = self.latest_public_resolver {
            base.latest_public_resolver = Some(v);
        }
        if let Some(v) = self.subgraph_url {
            base.subgraph_url = Some(v);
        }
    }
}

/// Immutable map of chain to contracts.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chains: BTreeMap<Chain, ChainContracts>,
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ChainRegistry {
    pub fn builtin() -> Self {
        Self {
            chains: builtin_table().clone(),
        }
    }

    /// Built-in table with `overrides` applied.
    pub fn with_overrides(overrides: BTreeMap<String, ChainOverride>) -> Result<Self, ConfigError> {
        let mut registry = Self::builtin();
        for (name, ov) in overrides {
            let chain: Chain = name
                .parse()
                .map_err(|_| ConfigError::UnknownChain(name.clone()))?;
            if let Some(contracts) = registry.chains.get_mut(&chain) {
                ov.apply(contracts);
            }
        }
        Ok(registry)
    }

    pub fn from_json_str(json: &str, path: &Path) -> Result<Self, ConfigError> {
        let overrides: BTreeMap<String, ChainOverride> =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::with_overrides(overrides)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json, path)
    }

    /// Load from `explicit`, else `$ENS_INSPECT_CONFIG`, else the user config file
    /// if it exists, else the built-in table.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading chain overrides");
            return Self::from_file(path);
        }
        let from_env = env_string_or(CONFIG_ENV, "");
        if !from_env.trim().is_empty() {
            debug!(path = %from_env, "loading chain overrides from env");
            return Self::from_file(Path::new(from_env.trim()));
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading chain overrides from user config");
                Self::from_file(&path)
            }
            _ => Ok(Self::builtin()),
        }
    }

    pub fn contracts(&self, chain: Chain) -> &ChainContracts {
        &self.chains[&chain]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChainContracts> {
        self.chains.values()
    }
}

/// `<config dir>/ens-inspect/chains.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ens-inspect").join("chains.json"))
}
