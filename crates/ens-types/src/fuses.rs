//! NameWrapper fuse bitmask.
//!
//! Fuses are irreversible permission bits on a wrapped name. Bits 0-6 are named
//! owner-controlled fuses, bits 16-18 are named parent-controlled fuses. Bits 7-14
//! and 19-31 are custom fuses: tracked only as a burned count, never individually.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Fuses: u32 {
        const CANNOT_UNWRAP = 1;
        const CANNOT_BURN_FUSES = 1 << 1;
        const CANNOT_TRANSFER = 1 << 2;
        const CANNOT_SET_RESOLVER = 1 << 3;
        const CANNOT_SET_TTL = 1 << 4;
        const CANNOT_CREATE_SUBDOMAIN = 1 << 5;
        const CANNOT_APPROVE = 1 << 6;
        const PARENT_CANNOT_CONTROL = 1 << 16;
        const IS_DOT_ETH = 1 << 17;
        const CAN_EXTEND_EXPIRY = 1 << 18;
    }
}

/// Owner custom fuses: 128 (bit 7) through 16384 (bit 14).
pub const CUSTOM_OWNER_FUSE_MASK: u32 = 0x0000_7F80;
/// Parent custom fuses: 0x80000 (bit 19) through 0x80000000 (bit 31).
pub const CUSTOM_PARENT_FUSE_MASK: u32 = 0xFFF8_0000;

/// Raw fuse value as read from `NameWrapper.getData`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FuseSet {
    bits: u32,
}

/// Abilities that remain for a wrapped name given its burned fuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FusePermissions {
    pub can_unwrap: bool,
    pub can_burn_fuses: bool,
    pub can_transfer: bool,
    pub can_set_resolver: bool,
    pub can_set_ttl: bool,
    pub can_create_subdomain: bool,
    pub can_approve: bool,
    pub parent_can_control: bool,
    pub can_extend_expiry: bool,
    pub is_dot_eth: bool,
}

/// Serializable breakdown of a fuse value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuseSummary {
    pub bits: u32,
    pub burned: Vec<&'static str>,
    pub custom_owner_burned: u32,
    pub custom_parent_burned: u32,
    pub permissions: FusePermissions,
}

impl FuseSet {
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    pub const fn bits(self) -> u32 {
        self.bits
    }

    pub fn flags(self) -> Fuses {
        Fuses::from_bits_retain(self.bits)
    }

    pub fn contains(self, fuses: Fuses) -> bool {
        self.flags().contains(fuses)
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Names of the burned named fuses, in bit order.
    pub fn burned_names(self) -> Vec<&'static str> {
        self.flags().iter_names().map(|(name, _)| name).collect()
    }

    pub fn custom_owner_burned(self) -> u32 {
        (self.bits & CUSTOM_OWNER_FUSE_MASK).count_ones()
    }

    pub fn custom_parent_burned(self) -> u32 {
        (self.bits & CUSTOM_PARENT_FUSE_MASK).count_ones()
    }

    pub fn permissions(self) -> FusePermissions {
        let f = self.flags();
        FusePermissions {
            can_unwrap: !f.contains(Fuses::CANNOT_UNWRAP),
            can_burn_fuses: !f.contains(Fuses::CANNOT_BURN_FUSES),
            can_transfer: !f.contains(Fuses::CANNOT_TRANSFER),
            can_set_resolver: !f.contains(Fuses::CANNOT_SET_RESOLVER),
            can_set_ttl: !f.contains(Fuses::CANNOT_SET_TTL),
            can_create_subdomain: !f.contains(Fuses::CANNOT_CREATE_SUBDOMAIN),
            can_approve: !f.contains(Fuses::CANNOT_APPROVE),
            parent_can_control: !f.contains(Fuses::PARENT_CANNOT_CONTROL),
            can_extend_expiry: f.contains(Fuses::CAN_EXTEND_EXPIRY),
            is_dot_eth: f.contains(Fuses::IS_DOT_ETH),
        }
    }

    pub fn summary(self) -> FuseSummary {
        FuseSummary {
            bits: self.bits,
            burned: self.burned_names(),
            custom_owner_burned: self.custom_owner_burned(),
            custom_parent_burned: self.custom_parent_burned(),
            permissions: self.permissions(),
        }
    }
}

impl From<u32> for FuseSet {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Fuses> for FuseSet {
    fn from(fuses: Fuses) -> Self {
        Self::from_bits(fuses.bits())
    }
}
