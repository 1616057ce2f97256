//! Per-entry classification of batch results.

use alloy_sol_types::SolCall;

use crate::batch::RawCallResult;
use crate::error::CallError;

/// One batch entry, classified.
///
/// A reverted call and a call that legitimately returned a zero value are
/// different facts. [`Decoded::strict`] collapses errors into a caller-chosen
/// default; [`Decoded::lenient`] keeps the error so the caller can branch on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<T> {
    Value(T),
    Error(CallError),
    /// The call was never part of the batch.
    Unavailable,
}

impl<T> Decoded<T> {
    /// The value, or `default` for errors and calls never made.
    pub fn strict(self, default: T) -> T {
        match self {
            Decoded::Value(v) => v,
            Decoded::Error(_) | Decoded::Unavailable => default,
        }
    }

    /// `None` if the call was never made, otherwise the value or the call's error.
    pub fn lenient(self) -> Option<Result<T, CallError>> {
        match self {
            Decoded::Value(v) => Some(Ok(v)),
            Decoded::Error(e) => Some(Err(e)),
            Decoded::Unavailable => None,
        }
    }

    pub fn value(self) -> Option<T> {
        match self {
            Decoded::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CallError> {
        match self {
            Decoded::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Decoded::Value(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Decoded::Error(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Decoded::Unavailable)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        match self {
            Decoded::Value(v) => Decoded::Value(f(v)),
            Decoded::Error(e) => Decoded::Error(e),
            Decoded::Unavailable => Decoded::Unavailable,
        }
    }

    /// Chain a fallible step on the value; its error becomes [`Decoded::Error`].
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, CallError>) -> Decoded<U> {
        match self {
            Decoded::Value(v) => match f(v) {
                Ok(u) => Decoded::Value(u),
                Err(e) => Decoded::Error(e),
            },
            Decoded::Error(e) => Decoded::Error(e),
            Decoded::Unavailable => Decoded::Unavailable,
        }
    }
}

/// Decode a raw entry as the return of `C`. Malformed return data is an error
/// entry, never a panic.
pub fn decode_raw<C: SolCall>(raw: Option<&RawCallResult>) -> Decoded<C::Return> {
    match raw {
        None => Decoded::Unavailable,
        Some(RawCallResult::Failure(err)) => Decoded::Error(err.clone()),
        Some(RawCallResult::Success(data)) => match C::abi_decode_returns(data, true) {
            Ok(ret) => Decoded::Value(ret),
            Err(err) => {
                tracing::debug!(call = C::SIGNATURE, len = data.len(), error = %err, "undecodable return data");
                Decoded::Error(CallError::Decode {
                    call: C::SIGNATURE,
                    reason: err.to_string(),
                })
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::{IEnsRegistry, INameWrapper};
    use crate::returns;
    use alloy_primitives::{address, Address, Bytes};
    use proptest::prelude::*;

    #[test]
    fn test_strict_defaults_errors() {
        let err: Decoded<Address> = Decoded::Error(CallError::transport("down"));
        assert_eq!(err.strict(Address::ZERO), Address::ZERO);
        let missing: Decoded<Address> = Decoded::Unavailable;
        assert_eq!(missing.strict(Address::ZERO), Address::ZERO);
    }

    #[test]
    fn test_lenient_keeps_error_distinct_from_zero() {
        let zero: Decoded<Address> = Decoded::Value(Address::ZERO);
        let reverted: Decoded<Address> = Decoded::Error(CallError::from_revert_data(Bytes::new()));

        assert_eq!(zero.lenient(), Some(Ok(Address::ZERO)));
        assert!(matches!(reverted.lenient(), Some(Err(CallError::Reverted { .. }))));
        assert_eq!(Decoded::<Address>::Unavailable.lenient(), None);
    }

    #[test]
    fn test_decode_success() {
        let owner = address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
        let raw = RawCallResult::Success(returns::address(owner));
        let decoded = decode_raw::<IEnsRegistry::ownerCall>(Some(&raw)).map(|r| r._0);
        assert_eq!(decoded, Decoded::Value(owner));
    }

    #[test]
    fn test_decode_tuple_return() {
        let owner = address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
        let raw = RawCallResult::Success(returns::wrapper_data(owner, 0x10001, 1_700_000_000));
        let ret = decode_raw::<INameWrapper::getDataCall>(Some(&raw)).value().unwrap();
        assert_eq!(ret.owner, owner);
        assert_eq!(ret.fuses, 0x10001);
        assert_eq!(ret.expiry, 1_700_000_000);
    }

    #[test]
    fn test_empty_success_is_decode_error() {
        let raw = RawCallResult::Success(Bytes::new());
        let decoded = decode_raw::<IEnsRegistry::ownerCall>(Some(&raw));
        assert!(matches!(decoded, Decoded::Error(CallError::Decode { call: "owner(bytes32)", .. })));
    }

    #[test]
    fn test_missing_is_unavailable() {
        assert!(decode_raw::<IEnsRegistry::ownerCall>(None).is_unavailable());
    }

    proptest! {
        #[test]
        fn prop_decoding_never_panics(data in proptest::collection::vec(any::<u8>(), 0..200)) {
            let raw = RawCallResult::Success(data.into());
            let decoded = decode_raw::<INameWrapper::getDataCall>(Some(&raw));
            prop_assert!(decoded.is_value() || decoded.is_error());
        }
    }
}
