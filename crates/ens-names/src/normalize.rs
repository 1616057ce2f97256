//! Name normalization.
//!
//! Labels are processed with ENSIP-15 (UTS-46 mapping, NFC, disallowed and
//! confusable tables, fenced characters, emoji sequences) through
//! `ens-normalize-rs`. Produces two forms of every valid name:
//! - `normalized`: the canonical form that is hashed and compared
//! - `beautified`: the display form, which keeps emoji presentation selectors
//!   and shows `ξ` as `Ξ` outside Greek labels
//!
//! Two label forms are handled before ENSIP-15 runs: empty labels are
//! rejected with their index, and encoded `[labelhash]` labels pass through
//! lower-cased since they name a hash rather than text.
//!
//! Normalization is a pure function of its input.

use std::sync::LazyLock;

use ens_normalize_rs::EnsNameNormalizer;
use serde::Serialize;

use crate::error::NameError;
use crate::label::parse_encoded_labelhash;
use crate::namehash::NameInfo;

/// Parsed ENSIP-15 tables, built on first use.
static NORMALIZER: LazyLock<EnsNameNormalizer> = LazyLock::new(EnsNameNormalizer::default);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    pub normalized: String,
    pub beautified: String,
}

/// Normalize a full name. The empty string is valid and normalizes to itself.
///
/// ```
/// use ens_names::normalize;
///
/// let n = normalize("Nick.ETH").unwrap();
/// assert_eq!(n.normalized, "nick.eth");
/// assert!(normalize("nick..eth").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<Normalized, NameError> {
    if raw.is_empty() {
        return Ok(Normalized::default());
    }

    let mut normalized = Vec::new();
    let mut beautified = Vec::new();
    for (index, label) in raw.split('.').enumerate() {
        let (n, b) = normalize_label(index, label)?;
        normalized.push(n);
        beautified.push(b);
    }

    Ok(Normalized {
        normalized: normalized.join("."),
        beautified: beautified.join("."),
    })
}

fn normalize_label(label_index: usize, label: &str) -> Result<(String, String), NameError> {
    if label.is_empty() {
        return Err(NameError::EmptyLabel { label: label_index });
    }
    if let Some(hash) = parse_encoded_labelhash(&label.to_ascii_lowercase()) {
        let encoded = hash.encoded();
        return Ok((encoded.clone(), encoded));
    }

    let processed = NORMALIZER
        .process(label)
        .map_err(|err| NameError::Rejected {
            label: label_index,
            reason: err.to_string(),
        })?;
    let normalized = processed.normalize();
    if normalized.is_empty() {
        return Err(NameError::EmptyLabel { label: label_index });
    }
    Ok((normalized, processed.beautify()))
}

/// A raw name together with its normalization outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Name {
    pub raw: String,
    /// Set iff the name is valid.
    pub normalized_name: Option<String>,
    /// Beautified form when valid (equal to the normalized form unless a
    /// cosmetic difference exists), the raw input otherwise.
    pub best_display_name: String,
    pub is_name_valid: bool,
    pub normalization_error: Option<String>,
    #[serde(skip)]
    pub error: Option<NameError>,
}

impl Name {
    pub fn parse(raw: &str) -> Self {
        match normalize(raw) {
            Ok(Normalized {
                normalized,
                beautified,
            }) => Self {
                raw: raw.to_string(),
                best_display_name: if beautified.is_empty() {
                    normalized.clone()
                } else {
                    beautified
                },
                normalized_name: Some(normalized),
                is_name_valid: true,
                normalization_error: None,
                error: None,
            },
            Err(err) => Self {
                raw: raw.to_string(),
                normalized_name: None,
                best_display_name: raw.to_string(),
                is_name_valid: false,
                normalization_error: Some(err.to_string()),
                error: Some(err),
            },
        }
    }

    /// Valid and empty: the root.
    pub fn is_root(&self) -> bool {
        self.normalized_name.as_deref() == Some("")
    }

    /// Hash-derived data, for valid names only.
    pub fn info(&self) -> Option<NameInfo> {
        self.normalized_name.as_deref().map(NameInfo::compute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn norm(s: &str) -> String {
        normalize(s).unwrap().normalized
    }

    fn rejected_at(s: &str) -> Option<usize> {
        match normalize(s) {
            Err(NameError::Rejected { label, .. }) => Some(label),
            _ => None,
        }
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(norm("Vitalik.ETH"), "vitalik.eth");
    }

    #[test]
    fn test_compatibility_forms_map_to_ascii() {
        assert_eq!(norm("\u{FF2E}\u{FF29}\u{FF23}\u{FF2B}.eth"), "nick.eth");
        assert_eq!(norm("\u{FF4E}\u{FF49}\u{FF43}\u{FF4B}.eth"), "nick.eth");
        assert_eq!(
            Name::parse("\u{FF2E}\u{FF29}\u{FF23}\u{FF2B}.eth").info(),
            Name::parse("nick.eth").info()
        );
    }

    #[test]
    fn test_dot_lookalikes_rejected() {
        assert_eq!(rejected_at("nick\u{2024}eth"), Some(0));
        assert_eq!(rejected_at("pay.nick\u{2024}eth"), Some(1));
    }

    #[test]
    fn test_empty_is_valid_root() {
        let name = Name::parse("");
        assert!(name.is_name_valid);
        assert!(name.is_root());
        assert_eq!(name.normalized_name.as_deref(), Some(""));
        assert_eq!(name.best_display_name, "");
    }

    #[test]
    fn test_empty_labels_rejected() {
        assert_eq!(
            normalize("a..eth").unwrap_err(),
            NameError::EmptyLabel { label: 1 }
        );
        assert_eq!(
            normalize(".eth").unwrap_err(),
            NameError::EmptyLabel { label: 0 }
        );
        assert_eq!(
            normalize("nick.eth.").unwrap_err(),
            NameError::EmptyLabel { label: 2 }
        );
    }

    #[test]
    fn test_disallowed_characters() {
        assert_eq!(rejected_at("hello world.eth"), Some(0));
        assert_eq!(rejected_at("nick.a/b"), Some(1));
        assert_eq!(norm("$dollar-sign.eth"), "$dollar-sign.eth");
    }

    #[test]
    fn test_underscore_rules() {
        assert_eq!(norm("__abc.eth"), "__abc.eth");
        assert_eq!(rejected_at("a_bc.eth"), Some(0));
    }

    #[test]
    fn test_label_extension() {
        assert_eq!(rejected_at("ab--cd.eth"), Some(0));
        assert_eq!(norm("abc--d.eth"), "abc--d.eth");
    }

    #[test]
    fn test_leading_combining_mark() {
        assert_eq!(rejected_at("\u{0301}abc.eth"), Some(0));
    }

    #[test]
    fn test_nfc_composition() {
        assert_eq!(norm("Cafe\u{0301}.eth"), "caf\u{00E9}.eth");
    }

    #[test]
    fn test_mixed_script_rejected() {
        // Cyrillic 'а' inside a Latin label.
        assert_eq!(rejected_at("p\u{0430}ypal.eth"), Some(0));
        assert_eq!(norm("привет.eth"), "привет.eth");
    }

    #[test]
    fn test_beautify_xi() {
        let n = normalize("ξ.eth").unwrap();
        assert_eq!(n.normalized, "ξ.eth");
        assert_eq!(n.beautified, "Ξ.eth");
        let greek = normalize("ξένος.eth").unwrap();
        assert_eq!(greek.beautified, "ξένος.eth");
    }

    #[test]
    fn test_emoji_presentation_kept_only_in_beautified() {
        let name = Name::parse("\u{2764}\u{FE0F}.eth");
        assert_eq!(name.normalized_name.as_deref(), Some("\u{2764}.eth"));
        assert_eq!(name.best_display_name, "\u{2764}\u{FE0F}.eth");
    }

    #[test]
    fn test_encoded_labelhash_passes_through() {
        let encoded = format!("[{}]", "AB".repeat(32));
        let n = normalize(&format!("{}.eth", encoded)).unwrap();
        assert_eq!(n.normalized, format!("[{}].eth", "ab".repeat(32)));
    }

    #[test]
    fn test_invalid_name_keeps_raw_for_display() {
        let name = Name::parse("bad name.eth");
        assert!(!name.is_name_valid);
        assert_eq!(name.normalized_name, None);
        assert_eq!(name.best_display_name, "bad name.eth");
        assert!(name
            .normalization_error
            .as_deref()
            .is_some_and(|e| e.starts_with("label 0:")));
        assert!(name.info().is_none());
    }

    #[test]
    fn test_best_display_falls_back_to_normalized() {
        let name = Name::parse("Nick.eth");
        assert_eq!(name.best_display_name, "nick.eth");
        assert_eq!(name.normalized_name.as_deref(), Some("nick.eth"));
    }

    proptest! {
        #[test]
        fn prop_lowercase_ascii_is_fixed_point(name in "[a-z0-9]{1,12}(\\.[a-z0-9]{1,12}){0,3}") {
            // "--" at 3-4 cannot occur: the alphabet has no hyphen.
            prop_assert_eq!(norm(&name), name);
        }

        #[test]
        fn prop_normalize_idempotent(name in "[a-zA-Z0-9$-]{1,10}(\\.[a-zA-Z0-9_]{1,10}){0,2}") {
            if let Ok(first) = normalize(&name) {
                let again = normalize(&first.normalized).unwrap();
                prop_assert_eq!(again.normalized, first.normalized);
            }
        }

        #[test]
        fn prop_valid_iff_normalized_present(raw in "\\PC{0,16}") {
            let name = Name::parse(&raw);
            prop_assert_eq!(name.is_name_valid, name.normalized_name.is_some());
            prop_assert_eq!(name.is_name_valid, name.normalization_error.is_none());
        }
    }
}
