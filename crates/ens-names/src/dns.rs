//! DNS wire-format names, as taken by the Universal Resolver.

use alloy_primitives::Address;

use crate::namehash::labelhash;

const MAX_LABEL_LEN: usize = 255;

/// Encode `name` as length-prefixed labels terminated by a zero byte.
///
/// A label longer than 255 bytes cannot be length-prefixed and is replaced by
/// its encoded labelhash `[64 hex]`, which the resolver hashes back to the same
/// node. The root encodes to a single zero byte.
pub fn dns_encode(name: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(name.len() + 2);
    if !name.is_empty() {
        for label in name.split('.') {
            if label.len() > MAX_LABEL_LEN {
                let encoded = labelhash(label).encoded();
                out.push(encoded.len() as u8);
                out.extend_from_slice(encoded.as_bytes());
            } else {
                out.push(label.len() as u8);
                out.extend_from_slice(label.as_bytes());
            }
        }
    }
    out.push(0);
    out
}

/// `<lowercase hex address>.addr.reverse`
pub fn reverse_name(address: &Address) -> String {
    format!("{}.addr.reverse", hex::encode(address.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namehash::namehash;
    use alloy_primitives::address;

    #[test]
    fn test_root() {
        assert_eq!(dns_encode(""), vec![0]);
    }

    #[test]
    fn test_two_labels() {
        assert_eq!(
            dns_encode("foo.eth"),
            b"\x03foo\x03eth\x00".to_vec()
        );
    }

    #[test]
    fn test_long_label_becomes_labelhash() {
        let long = "a".repeat(300);
        let encoded = dns_encode(&format!("{}.eth", long));
        assert_eq!(encoded[0], 66);
        assert_eq!(encoded[1], b'[');
        assert_eq!(encoded[66], b']');
        assert_eq!(&encoded[67..], b"\x03eth\x00");

        // The placeholder hashes to the same node as the long label.
        let inner = std::str::from_utf8(&encoded[1..67]).unwrap();
        assert_eq!(
            namehash(&format!("{}.eth", inner)),
            namehash(&format!("{}.eth", long))
        );
    }

    #[test]
    fn test_label_of_exactly_255_bytes_is_kept() {
        let label = "b".repeat(255);
        let encoded = dns_encode(&label);
        assert_eq!(encoded[0], 255);
        assert_eq!(encoded.len(), 257);
    }

    #[test]
    fn test_reverse_name_is_lowercase() {
        let addr = address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
        assert_eq!(
            reverse_name(&addr),
            "d8da6bf26964af9d7eed9e03e53415d37aa96045.addr.reverse"
        );
    }
}
