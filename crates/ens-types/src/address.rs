//! Address parsing and display utilities.
//!
//! Ethereum addresses are 20-byte values, but they show up in several formats:
//! - Checksummed: "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"
//! - Lower-case: "0xd8da6bf26964af9d7eed9e03e53415d37aa96045"
//! - Without prefix: "d8da6bf26964af9d7eed9e03e53415d37aa96045"
//!
//! Comparisons always happen on the parsed [`Address`], never on strings.

use alloy_primitives::Address;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("empty address")]
    Empty,
    #[error("invalid hex address: {0}")]
    InvalidHex(String),
    #[error("address must be 20 bytes (40 hex chars), got {len} hex chars: {input}")]
    BadLength { input: String, len: usize },
}

/// Parse an address string with or without `0x` prefix, ignoring checksum case.
///
/// # Examples
///
/// ```
/// use ens_inspect_types::address::parse_address;
///
/// let a = parse_address("0xD8DA6BF26964AF9D7EED9E03E53415D37AA96045").unwrap();
/// let b = parse_address("d8da6bf26964af9d7eed9e03e53415d37aa96045").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_address(addr: &str) -> Result<Address, AddressError> {
    let s = addr.trim();
    let hex_str = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    if hex_str.is_empty() {
        return Err(AddressError::Empty);
    }
    if !hex_str.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AddressError::InvalidHex(addr.to_string()));
    }
    if hex_str.len() != 40 {
        return Err(AddressError::BadLength {
            input: addr.to_string(),
            len: hex_str.len(),
        });
    }

    let mut bytes = [0u8; 20];
    hex::decode_to_slice(hex_str, &mut bytes)
        .map_err(|_| AddressError::InvalidHex(addr.to_string()))?;
    Ok(Address::from(bytes))
}

/// True for `0x0000000000000000000000000000000000000000`.
pub fn is_zero_address(addr: &Address) -> bool {
    *addr == Address::ZERO
}

/// Full checksummed form. This is the canonical form for output.
pub fn format_address_full(addr: &Address) -> String {
    addr.to_checksum(None)
}

/// Abbreviated form for display: `0xd8dA…6045`.
///
/// ```
/// use ens_inspect_types::address::{format_address_short, parse_address};
///
/// let a = parse_address("0xd8da6bf26964af9d7eed9e03e53415d37aa96045").unwrap();
/// assert_eq!(format_address_short(&a), "0xd8dA…6045");
/// ```
pub fn format_address_short(addr: &Address) -> String {
    let full = addr.to_checksum(None);
    format!("{}…{}", &full[..6], &full[full.len() - 4..])
}
