//! Labels: single name components, known by text or only by hash.
//!
//! The indexer knows the text of most labels but not all of them. A label known
//! only by hash renders as a truncated placeholder and can be re-queried through
//! its encoded form `[<64 hex>]`, which normalization and hashing pass through
//! unchanged.

use alloy_primitives::{keccak256, B256, U256};
use serde::{Serialize, Serializer};

/// `{hex, decimal}` view shared by labelhashes and nodes.
#[derive(Serialize)]
pub(crate) struct HashRepr {
    pub hex: String,
    pub decimal: String,
}

pub(crate) fn hex32(bytes: &B256) -> String {
    format!("0x{}", hex::encode(bytes))
}

pub(crate) fn decimal32(bytes: &B256) -> String {
    U256::from_be_bytes(bytes.0).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabelHash(pub B256);

impl LabelHash {
    /// Labelhash of `label`, or the embedded hash for an encoded `[…]` label.
    pub fn of(label: &str) -> Self {
        parse_encoded_labelhash(label).unwrap_or_else(|| LabelHash(keccak256(label.as_bytes())))
    }

    /// Parse `0x`-prefixed or bare 64-char hex, as returned by the indexer.
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let hex_str = s.strip_prefix("0x").unwrap_or(s);
        if hex_str.len() != 64 {
            return None;
        }
        let mut out = [0u8; 32];
        hex::decode_to_slice(hex_str, &mut out).ok()?;
        Some(LabelHash(B256::from(out)))
    }

    pub fn hex(&self) -> String {
        hex32(&self.0)
    }

    pub fn decimal(&self) -> String {
        decimal32(&self.0)
    }

    /// Registrar ERC-721 token id.
    pub fn token_id(&self) -> U256 {
        U256::from_be_bytes(self.0 .0)
    }

    /// `[<64 hex>]`, accepted back as a label anywhere a name is accepted.
    pub fn encoded(&self) -> String {
        format!("[{}]", hex::encode(self.0))
    }

    /// `[1a2b3c4d…5e6f7a8b]`, for display only.
    pub fn truncated(&self) -> String {
        let h = hex::encode(self.0);
        format!("[{}…{}]", &h[..8], &h[56..])
    }
}

impl Serialize for LabelHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        HashRepr {
            hex: self.hex(),
            decimal: self.decimal(),
        }
        .serialize(serializer)
    }
}

/// `Some(hash)` if `label` is exactly `[` + 64 hex chars + `]`.
pub fn parse_encoded_labelhash(label: &str) -> Option<LabelHash> {
    let inner = label.strip_prefix('[')?.strip_suffix(']')?;
    if inner.starts_with("0x") {
        return None;
    }
    LabelHash::from_hex(inner)
}

pub fn is_encoded_labelhash(label: &str) -> bool {
    parse_encoded_labelhash(label).is_some()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    /// `None` when only the hash is known.
    pub text: Option<String>,
    pub labelhash: LabelHash,
}

impl Label {
    /// A label from text. Encoded `[…]` text yields a hash-only label.
    pub fn known(text: &str) -> Self {
        match parse_encoded_labelhash(text) {
            Some(labelhash) => Self {
                text: None,
                labelhash,
            },
            None => Self {
                text: Some(text.to_string()),
                labelhash: LabelHash::of(text),
            },
        }
    }

    pub fn unknown(labelhash: LabelHash) -> Self {
        Self {
            text: None,
            labelhash,
        }
    }

    /// Build from indexer output: text may be missing, hash may be malformed.
    pub fn from_indexer(text: Option<&str>, labelhash_hex: &str) -> Option<Self> {
        match text {
            Some(t) if !t.is_empty() => Some(Self::known(t)),
            _ => LabelHash::from_hex(labelhash_hex).map(Self::unknown),
        }
    }

    pub fn is_known(&self) -> bool {
        self.text.is_some()
    }

    /// Text, or a truncated-hash placeholder.
    pub fn display(&self) -> String {
        match &self.text {
            Some(t) => t.clone(),
            None => self.labelhash.truncated(),
        }
    }

    /// Text, or the full encoded hash: safe to splice into a name and hash again.
    pub fn query_form(&self) -> String {
        match &self.text {
            Some(t) => t.clone(),
            None => self.labelhash.encoded(),
        }
    }
}
