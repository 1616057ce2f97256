//! Environment variable parsing utilities.
//!
//! Settings read from the environment use the `ENS_INSPECT_` prefix:
//!
//! - `ENS_INSPECT_CONFIG`: chain overrides file
//! - `ENS_INSPECT_CHAIN`: default chain
//! - `ENS_INSPECT_NOW`: fixed unix time for reproducible output
//!
//! # Example
//!
//! ```
//! use ens_inspect_types::env_utils::{env_string_or, env_var};
//!
//! let now: Option<u64> = env_var("ENS_INSPECT_NOW");
//! let config = env_string_or("ENS_INSPECT_CONFIG", "");
//! ```

use std::str::FromStr;

/// Parse an environment variable into a type that implements `FromStr`.
///
/// Returns `None` if the variable is not set or cannot be parsed.
pub fn env_var<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Get an environment variable as a string with a default value.
pub fn env_string_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
