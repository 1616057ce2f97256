//! Bounded subname trees.
//!
//! The indexer supplies structure only (labels and nesting). Chain state comes
//! from one flat batch holding a Registry `owner` and a NameWrapper `getData`
//! read per node, planned in pre-order. Both the plan and the attachment walk
//! use [`TreeShape::preorder`], and attachment reads results by key.

use alloy_primitives::Address;
use ens_inspect_types::{ChainContracts, WrapperRecord};
use ens_multicall::{BatchPlan, BatchResults, CallRequest};
use ens_names::{Label, Node};
use serde::{Deserialize, Serialize};

use crate::expiry::{classify_expiry, ExpiryStatus};
use crate::wrapper::{classify_wrapper_state, WrapperState};

/// Depth and width bounds of a subname tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeLimits {
    /// Levels below the root.
    pub max_depth: usize,
    /// Children kept per node; also the indexer page size.
    pub max_fanout: usize,
}

impl TreeLimits {
    /// Three nested levels of ten subnames each.
    pub const INDEXER: TreeLimits = TreeLimits {
        max_depth: 3,
        max_fanout: 10,
    };
}

impl Default for TreeLimits {
    fn default() -> Self {
        Self::INDEXER
    }
}

/// A subdomain as returned by the indexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedSubname {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label_name: Option<String>,
    pub labelhash: String,
    #[serde(default)]
    pub subdomains: Vec<IndexedSubname>,
}

/// A tree node before any chain data is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeShape {
    pub name: String,
    /// `None` for the root of the tree when it is the root name.
    pub label: Option<Label>,
    pub node: Node,
    pub depth: usize,
    pub children: Vec<TreeShape>,
}

impl TreeShape {
    /// Build the shape under `root_name`, dropping nodes beyond `limits` and
    /// entries whose labelhash cannot be parsed.
    pub fn build(root_name: &str, indexed: &[IndexedSubname], limits: TreeLimits) -> Self {
        let info = ens_names::NameInfo::compute(root_name);
        Self {
            name: info.name.clone(),
            label: info.label.clone(),
            node: info.node,
            depth: 0,
            children: Self::children(&info.name, info.node, 1, indexed, limits),
        }
    }

    fn children(
        parent_name: &str,
        parent_node: Node,
        depth: usize,
        indexed: &[IndexedSubname],
        limits: TreeLimits,
    ) -> Vec<TreeShape> {
        if depth > limits.max_depth {
            return Vec::new();
        }
        indexed
            .iter()
            .filter_map(|entry| {
                let label = Label::from_indexer(entry.label_name.as_deref(), &entry.labelhash);
                if label.is_none() {
                    tracing::warn!(parent = parent_name, labelhash = %entry.labelhash, "skipping subname with malformed labelhash");
                }
                label.map(|label| (entry, label))
            })
            .take(limits.max_fanout)
            .map(|(entry, label)| {
                let name = if parent_name.is_empty() {
                    label.query_form()
                } else {
                    format!("{}.{}", label.query_form(), parent_name)
                };
                let node = parent_node.child(&label.labelhash);
                let children = Self::children(&name, node, depth + 1, &entry.subdomains, limits);
                TreeShape {
                    name,
                    label: Some(label),
                    node,
                    depth,
                    children,
                }
            })
            .collect()
    }

    /// Depth-first pre-order: a node, then each child subtree in order.
    pub fn preorder(&self) -> Vec<&TreeShape> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeShape::node_count).sum::<usize>()
    }

    /// Registry owner then NameWrapper data, per node, in pre-order.
    pub fn plan(&self, contracts: &ChainContracts) -> BatchPlan {
        let mut plan = BatchPlan::new();
        for node in self.preorder() {
            plan.push(CallRequest::registry_owner(contracts, node.node.0));
            plan.push(CallRequest::wrapper_data(contracts, node.node.token_id()));
        }
        plan
    }

    /// Attach chain reads to every node and derive its display state.
    pub fn attach(&self, results: &BatchResults, name_wrapper: Address, now: u64) -> SubnameNode {
        let registry_owner = results.registry_owner(self.node.0);
        let wrapper = results.wrapper_data(self.node.token_id());
        if registry_owner.is_error() || wrapper.is_error() {
            tracing::debug!(name = %self.name, "subname read failed; using empty record");
        }
        let registry_owner = registry_owner.strict(Address::ZERO);
        let wrapper = wrapper.strict(WrapperRecord::default());

        let wrapper_state =
            classify_wrapper_state(&self.name, false, registry_owner, &wrapper, name_wrapper);
        let expiry_status = classify_expiry(wrapper.expiry, now);

        SubnameNode {
            display_name: self
                .label
                .as_ref()
                .map(Label::display)
                .unwrap_or_else(|| self.name.clone()),
            name: self.name.clone(),
            label: self.label.clone(),
            node: self.node,
            depth: self.depth,
            registry_owner,
            wrapper,
            wrapper_state,
            expiry_status,
            shows_expired: wrapper.owner == Address::ZERO && registry_owner == name_wrapper,
            shows_expiring_soon: wrapper_state == WrapperState::Emancipated
                && expiry_status == ExpiryStatus::ExpiringSoon,
            children: self
                .children
                .iter()
                .map(|child| child.attach(results, name_wrapper, now))
                .collect(),
        }
    }
}

/// A subname with its chain state attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnameNode {
    pub name: String,
    pub label: Option<Label>,
    /// Label text, or a truncated hash for unknown labels.
    pub display_name: String,
    pub node: Node,
    pub depth: usize,
    pub registry_owner: Address,
    pub wrapper: WrapperRecord,
    pub wrapper_state: WrapperState,
    pub expiry_status: ExpiryStatus,
    /// Wrapped once, now reclaimable: no wrapper owner, Registry still points at the wrapper.
    pub shows_expired: bool,
    /// Only while the node is still Emancipated.
    pub shows_expiring_soon: bool,
    pub children: Vec<SubnameNode>,
}

impl SubnameNode {
    pub fn preorder(&self) -> Vec<&SubnameNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }
}

/// One page of a subname tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnameTree {
    pub root: SubnameNode,
    pub page: usize,
    pub limits: TreeLimits,
}
