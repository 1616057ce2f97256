//! NameWrapper state machine.
//!
//! Classification is total over its inputs and never looks at expiry. The
//! NameWrapper already reports a zero owner for expired wrapped names, which is
//! how expiry reaches this axis at all.

use alloy_primitives::Address;
use ens_inspect_types::{Fuses, WrapperRecord};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnregisteredReason {
    /// Nobody owns the name in the Registry.
    NeverWrappedOrExpired,
    /// The Registry still points at the NameWrapper but the token has no owner.
    PreviouslyWrapped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WrapperState {
    /// `CANNOT_UNWRAP` burned.
    Locked,
    /// `PARENT_CANNOT_CONTROL` burned, `CANNOT_UNWRAP` not.
    Emancipated,
    /// Wrapped; the parent keeps full control.
    Wrapped,
    Unwrapped,
    Unregistered { reason: UnregisteredReason },
}

impl WrapperState {
    /// Locked, Emancipated or Wrapped.
    pub fn is_wrapped(self) -> bool {
        matches!(
            self,
            WrapperState::Locked | WrapperState::Emancipated | WrapperState::Wrapped
        )
    }

    pub fn is_unregistered(self) -> bool {
        matches!(self, WrapperState::Unregistered { .. })
    }
}

/// Classify a name's NameWrapper state.
///
/// Precedence:
/// 1. `eth` is always Locked.
/// 2. The root, evaluated as a parent, is Locked.
/// 3. No wrapper owner: Unregistered (registry owner zero or the NameWrapper
///    itself), otherwise Unwrapped.
/// 4. Wrapper owner set: Locked if `CANNOT_UNWRAP`, else Emancipated if
///    `PARENT_CANNOT_CONTROL`, else Wrapped.
pub fn classify_wrapper_state(
    name: &str,
    is_parent: bool,
    registry_owner: Address,
    wrapper: &WrapperRecord,
    name_wrapper: Address,
) -> WrapperState {
    if name == "eth" {
        return WrapperState::Locked;
    }
    if name.is_empty() && is_parent {
        return WrapperState::Locked;
    }

    if wrapper.owner == Address::ZERO {
        if registry_owner == Address::ZERO {
            return WrapperState::Unregistered {
                reason: UnregisteredReason::NeverWrappedOrExpired,
            };
        }
        if registry_owner == name_wrapper {
            return WrapperState::Unregistered {
                reason: UnregisteredReason::PreviouslyWrapped,
            };
        }
        return WrapperState::Unwrapped;
    }

    if wrapper.fuses.contains(Fuses::CANNOT_UNWRAP) {
        WrapperState::Locked
    } else if wrapper.fuses.contains(Fuses::PARENT_CANNOT_CONTROL) {
        WrapperState::Emancipated
    } else {
        WrapperState::Wrapped
    }
}

/// Wrapped .eth second-level names keep two expiries that can drift apart.
///
/// `registrar_expiry` must already be expressed the way the NameWrapper stores
/// it; for .eth names that is the registrar expiry plus the grace period.
pub fn is_out_of_sync(
    is_eth_2ld: bool,
    state: WrapperState,
    wrapper_expiry: u64,
    registrar_expiry: u64,
) -> bool {
    is_eth_2ld && state.is_wrapped() && wrapper_expiry != registrar_expiry
}

/// A parent can emancipate a child only once the parent itself is Locked.
pub fn parent_can_emancipate(parent: WrapperState) -> bool {
    parent == WrapperState::Locked
}
