use alloy_primitives::Bytes;
use alloy_sol_types::{decode_revert_reason, SolError};
use serde::Serialize;
use thiserror::Error;

use crate::abi::IUniversalResolver;

/// Why a single call in a batch produced no value.
///
/// A failed call never affects its siblings; it is recorded here and handed to
/// whichever consumer asks for that call's key.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallError {
    #[error("execution reverted: {reason}")]
    Reverted { reason: String, data: Bytes },

    /// Universal Resolver or offchain gateway could not produce an answer.
    /// Unreachable gateways and missing records both land here.
    #[error("resolution failed: {reason}")]
    ResolutionFailed { reason: String },

    #[error("cannot decode {call} return data: {reason}")]
    Decode { call: &'static str, reason: String },

    #[error("transport error: {message}")]
    Transport { message: String },
}

impl CallError {
    /// Classify raw revert data.
    ///
    /// Universal Resolver custom errors become [`CallError::ResolutionFailed`];
    /// `Error(string)` and `Panic(uint256)` payloads are decoded into the reason.
    pub fn from_revert_data(data: impl Into<Bytes>) -> Self {
        let data: Bytes = data.into();
        if let Some(name) = universal_resolver_error(&data) {
            return CallError::ResolutionFailed {
                reason: name.to_string(),
            };
        }
        let reason = if data.is_empty() {
            "no data".to_string()
        } else {
            decode_revert_reason(&data)
                .unwrap_or_else(|| format!("0x{}", hex::encode(&data[..data.len().min(4)])))
        };
        CallError::Reverted { reason, data }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        CallError::Transport {
            message: message.into(),
        }
    }

    pub fn is_revert(&self) -> bool {
        matches!(self, CallError::Reverted { .. })
    }
}

fn universal_resolver_error(data: &[u8]) -> Option<&'static str> {
    let selector = data.get(..4)?;
    [
        (IUniversalResolver::ResolverNotFound::SELECTOR, "ResolverNotFound"),
        (
            IUniversalResolver::ResolverWildcardNotSupported::SELECTOR,
            "ResolverWildcardNotSupported",
        ),
        (IUniversalResolver::ResolverNotContract::SELECTOR, "ResolverNotContract"),
        (IUniversalResolver::ResolverError::SELECTOR, "ResolverError"),
        (
            IUniversalResolver::ReverseAddressMismatch::SELECTOR,
            "ReverseAddressMismatch",
        ),
    ]
    .into_iter()
    .find(|(sel, _)| sel.as_slice() == selector)
    .map(|(_, name)| name)
}

/// A transport answered with the wrong number of results for a plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("batch returned {actual} results for {expected} requests")]
    LengthMismatch { expected: usize, actual: usize },
}
