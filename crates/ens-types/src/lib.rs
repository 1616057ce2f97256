//! Shared types for the ens-inspect workspace.
//!
//! This crate provides the foundational types every other crate builds on:
//!
//! - [`address`] - Address parsing and display helpers
//! - [`chain`] - Supported chains and endpoint-based chain inference
//! - [`contracts`] - Per-chain ENS contract addresses (immutable, built once)
//! - [`config`] - Chain registry with optional JSON overrides
//! - [`fuses`] - NameWrapper fuse bitmask
//! - [`records`] - Raw on-chain records as read from the Registry, Registrar and NameWrapper
//! - [`env_utils`] - Environment variable parsing helpers

pub mod address;
pub mod chain;
pub mod config;
pub mod contracts;
pub mod env_utils;
pub mod fuses;
pub mod records;

pub use address::{format_address_full, format_address_short, is_zero_address, parse_address};
pub use alloy_primitives::{Address, B256, U256};
pub use chain::Chain;
pub use config::{ChainRegistry, ConfigError};
pub use contracts::ChainContracts;
pub use env_utils::{env_string_or, env_var};
pub use fuses::{FuseSet, Fuses};
pub use records::{RegistrarRecord, RegistryRecord, ResolvedAddress, WrapperRecord};

/// Seconds in the 90-day window after expiry during which only the previous
/// owner may renew a .eth name.
pub const GRACE_PERIOD_SECS: u64 = 90 * 24 * 60 * 60;
