//! CLI subcommand implementations for ens-inspect

pub mod chains;
pub mod expiry;
pub mod fuses;
pub mod inspect;
pub mod namehash;
pub mod normalize;
pub mod output;
pub mod subnames;

use std::path::Path;

use anyhow::{bail, Result};
use ens_inspect::snapshot::Snapshot;
use ens_inspect::types::env_utils::env_var;
use ens_inspect::{Chain, ChainRegistry};

/// Default chain when neither `--chain` nor the snapshot names one.
pub const CHAIN_ENV: &str = "ENS_INSPECT_CHAIN";
/// Fixed evaluation time, for reproducible output.
pub const NOW_ENV: &str = "ENS_INSPECT_NOW";

/// Settings shared by every command, loaded once at startup.
pub struct CliContext {
    pub registry: ChainRegistry,
}

impl CliContext {
    pub fn load(config: Option<&Path>) -> Result<Self> {
        Ok(Self {
            registry: ChainRegistry::load(config)?,
        })
    }

    /// `--chain`, else the snapshot's chain, else `$ENS_INSPECT_CHAIN`, else mainnet.
    /// A flag that contradicts the snapshot is an error.
    pub fn resolve_chain(&self, flag: Option<Chain>, snapshot: &Snapshot) -> Result<Chain> {
        match (flag, snapshot.chain()) {
            (Some(flag), Some(recorded)) if flag != recorded => {
                bail!("--chain {flag} does not match the snapshot, which was taken on {recorded}")
            }
            (Some(chain), _) | (None, Some(chain)) => Ok(chain),
            (None, None) => Ok(env_var(CHAIN_ENV).unwrap_or(Chain::Mainnet)),
        }
    }
}

/// `--now`, else `$ENS_INSPECT_NOW`, else the snapshot's time, else the clock.
pub fn resolve_now(flag: Option<u64>, recorded: Option<u64>) -> u64 {
    flag.or_else(|| env_var(NOW_ENV))
        .or(recorded)
        .unwrap_or_else(|| u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default())
}
