//! Namehash, node and token-id derivation.

use alloy_primitives::{keccak256, B256, U256};
use serde::{Serialize, Serializer};

use crate::label::{decimal32, hex32, HashRepr, Label, LabelHash};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node(pub B256);

impl Node {
    pub const ROOT: Node = Node(B256::ZERO);

    /// `keccak256(self ++ labelhash)`.
    pub fn child(&self, labelhash: &LabelHash) -> Node {
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(self.0.as_slice());
        buf[32..].copy_from_slice(labelhash.0.as_slice());
        Node(keccak256(buf))
    }

    pub fn hex(&self) -> String {
        hex32(&self.0)
    }

    pub fn decimal(&self) -> String {
        decimal32(&self.0)
    }

    /// NameWrapper ERC-1155 token id.
    pub fn token_id(&self) -> U256 {
        U256::from_be_bytes(self.0 .0)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        HashRepr {
            hex: self.hex(),
            decimal: self.decimal(),
        }
        .serialize(serializer)
    }
}

pub fn labelhash(label: &str) -> LabelHash {
    LabelHash::of(label)
}

/// Recursive namehash. The empty name is the root.
///
/// ```
/// use ens_names::namehash;
///
/// assert_eq!(
///     namehash("eth").hex(),
///     "0x93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae"
/// );
/// ```
pub fn namehash(name: &str) -> Node {
    if name.is_empty() {
        return Node::ROOT;
    }
    name.rsplit('.')
        .fold(Node::ROOT, |node, label| node.child(&labelhash(label)))
}

fn serialize_u256_decimal<S: Serializer>(v: &U256, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&v.to_string())
}

fn serialize_opt_u256_decimal<S: Serializer>(v: &Option<U256>, s: S) -> Result<S::Ok, S::Error> {
    match v {
        Some(v) => s.serialize_some(&v.to_string()),
        None => s.serialize_none(),
    }
}

/// Everything hash-derived about a (normalized) name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameInfo {
    pub name: String,
    pub node: Node,
    /// Leftmost label; `None` for the root.
    pub label: Option<Label>,
    /// Number of labels: 0 for the root, 1 for "eth".
    pub level: usize,
    /// `None` only for the root.
    pub parent_name: Option<String>,
    pub parent_node: Option<Node>,
    pub is_eth_2ld: bool,
    /// Legacy registrar token id (labelhash), for .eth second-level names only.
    #[serde(serialize_with = "serialize_opt_u256_decimal")]
    pub registrar_token_id: Option<U256>,
    /// NameWrapper token id (node).
    #[serde(serialize_with = "serialize_u256_decimal")]
    pub wrapper_token_id: U256,
}

impl NameInfo {
    pub fn compute(name: &str) -> Self {
        if name.is_empty() {
            return Self {
                name: String::new(),
                node: Node::ROOT,
                label: None,
                level: 0,
                parent_name: None,
                parent_node: None,
                is_eth_2ld: false,
                registrar_token_id: None,
                wrapper_token_id: U256::ZERO,
            };
        }

        let (first, parent) = match name.split_once('.') {
            Some((first, rest)) => (first, rest),
            None => (name, ""),
        };
        let label = Label::known(first);
        let parent_node = namehash(parent);
        let node = parent_node.child(&label.labelhash);
        let level = name.split('.').count();
        let is_eth_2ld = level == 2 && parent == "eth";

        Self {
            name: name.to_string(),
            node,
            registrar_token_id: is_eth_2ld.then(|| label.labelhash.token_id()),
            label: Some(label),
            level,
            parent_name: Some(parent.to_string()),
            parent_node: Some(parent_node),
            is_eth_2ld,
            wrapper_token_id: node.token_id(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.level == 0
    }

    pub fn labelhash(&self) -> Option<LabelHash> {
        self.label.as_ref().map(|l| l.labelhash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_zero() {
        assert_eq!(namehash("").0, B256::ZERO);
        assert_eq!(
            namehash("").hex(),
            "0x0000000000000000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(namehash("").decimal(), "0");
    }

    #[test]
    fn test_known_nodes() {
        assert_eq!(
            namehash("foo.eth").hex(),
            "0xde9b09fd7c5f901e23a3f19fecc54828e9c848539801e86591bd9801b019f84f"
        );
        assert_eq!(
            namehash("addr.reverse").hex(),
            "0x91d1777781884d03a6757a803996e38de2a42967fb37eeaca72729271025a9e2"
        );
    }

    #[test]
    fn test_sub_foo_eth_label_by_label() {
        let eth = Node::ROOT.child(&LabelHash(keccak256(b"eth")));
        let foo = eth.child(&LabelHash(keccak256(b"foo")));
        let sub = foo.child(&LabelHash(keccak256(b"sub")));
        assert_eq!(namehash("sub.foo.eth"), sub);
        assert_eq!(
            sub.hex(),
            "0x500d86f9e663479e5aaa6e99276e55fc139c597211ee47d17e1e92da16a83402"
        );
    }

    #[test]
    fn test_encoded_label_hashes_like_text() {
        let encoded = format!("{}.eth", LabelHash::of("foo").encoded());
        assert_eq!(namehash(&encoded), namehash("foo.eth"));
    }

    #[test]
    fn test_name_info_root() {
        let info = NameInfo::compute("");
        assert!(info.is_root());
        assert_eq!(info.level, 0);
        assert_eq!(info.parent_name, None);
        assert_eq!(info.labelhash(), None);
        assert!(!info.is_eth_2ld);
    }

    #[test]
    fn test_name_info_eth_tld() {
        let info = NameInfo::compute("eth");
        assert_eq!(info.level, 1);
        assert_eq!(info.parent_name.as_deref(), Some(""));
        assert_eq!(info.parent_node, Some(Node::ROOT));
        assert!(!info.is_eth_2ld);
        assert_eq!(info.registrar_token_id, None);
    }

    #[test]
    fn test_name_info_2ld() {
        let info = NameInfo::compute("test.eth");
        assert_eq!(info.level, 2);
        assert!(info.is_eth_2ld);
        assert_eq!(info.parent_name.as_deref(), Some("eth"));
        assert_eq!(info.parent_node, Some(namehash("eth")));
        assert_eq!(
            info.node.decimal(),
            "106433793850580991138853080000822709009402351803301547654805599884517980756465"
        );
        assert_eq!(
            info.registrar_token_id,
            Some(LabelHash::of("test").token_id())
        );
        assert_eq!(info.wrapper_token_id, info.node.token_id());
    }

    #[test]
    fn test_name_info_3ld_and_other_tld() {
        let sub = NameInfo::compute("sub.foo.eth");
        assert_eq!(sub.level, 3);
        assert!(!sub.is_eth_2ld);
        assert_eq!(sub.registrar_token_id, None);
        assert_eq!(sub.parent_name.as_deref(), Some("foo.eth"));

        let dns = NameInfo::compute("example.com");
        assert_eq!(dns.level, 2);
        assert!(!dns.is_eth_2ld);
    }

    #[test]
    fn test_name_info_serializes_token_ids_as_decimal() {
        let json = serde_json::to_value(NameInfo::compute("test.eth")).unwrap();
        assert_eq!(
            json["wrapper_token_id"],
            "106433793850580991138853080000822709009402351803301547654805599884517980756465"
        );
        assert!(json["registrar_token_id"].is_string());
        assert!(json["node"]["hex"].as_str().unwrap().starts_with("0x"));
    }
}
