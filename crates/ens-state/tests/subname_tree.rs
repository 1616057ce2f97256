//! Subname trees: flat pre-order batches reattached to the right nodes.

mod common;

use alloy_primitives::Address;
use common::*;
use ens_multicall::{BatchResults, CallKey, RawCallResult};
use ens_names::namehash;
use ens_state::presentation::subname_tags;
use ens_state::subnames::TreeShape;
use ens_state::{NameInspector, TreeLimits, UnregisteredReason, WrapperState};

const DAY: u64 = 24 * 60 * 60;

fn name_wrapper() -> Address {
    mainnet().name_wrapper
}

fn attach(shape: &TreeShape, raw: Vec<RawCallResult>) -> ens_state::SubnameNode {
    let plan = shape.plan(mainnet());
    let results = BatchResults::from_positional(&plan, raw).unwrap();
    shape.attach(&results, name_wrapper(), NOW)
}

fn answers(chain: &MockChain, shape: &TreeShape) -> Vec<RawCallResult> {
    shape
        .plan(mainnet())
        .keys()
        .map(|key| chain.answer(key))
        .collect()
}

#[test]
fn one_child_tree_is_a_four_entry_batch() {
    let shape = TreeShape::build("foo.eth", &[subname("a", vec![])], TreeLimits::INDEXER);
    let plan = shape.plan(mainnet());
    let keys: Vec<_> = plan.keys().copied().collect();
    let root = namehash("foo.eth");
    let child = namehash("a.foo.eth");
    assert_eq!(
        keys,
        [
            CallKey::RegistryOwner { node: root.0 },
            CallKey::WrapperData { token: root.token_id() },
            CallKey::RegistryOwner { node: child.0 },
            CallKey::WrapperData { token: child.token_id() },
        ]
    );

    let chain = MockChain::new()
        .registry("foo.eth", name_wrapper(), Address::ZERO)
        .wrapped("foo.eth", ALICE, 0x30001, NOW + 400 * DAY)
        .registry("a.foo.eth", name_wrapper(), Address::ZERO)
        .wrapped("a.foo.eth", BOB, 0x10000, NOW + 10 * DAY);
    let tree = attach(&shape, answers(&chain, &shape));

    assert_eq!(tree.wrapper.owner, ALICE);
    assert_eq!(tree.wrapper_state, WrapperState::Locked);
    let a = &tree.children[0];
    assert_eq!(a.name, "a.foo.eth");
    assert_eq!(a.wrapper.owner, BOB);
    assert_eq!(a.wrapper_state, WrapperState::Emancipated);
    assert!(a.shows_expiring_soon);
    assert_eq!(subname_tags(a), ["Emancipated", "Expiring Soon"]);
}

#[test]
fn reordered_batch_attaches_to_the_wrong_nodes() {
    let shape = TreeShape::build(
        "foo.eth",
        &[subname("a", vec![]), subname("b", vec![])],
        TreeLimits::INDEXER,
    );
    let chain = MockChain::new()
        .registry("foo.eth", ALICE, Address::ZERO)
        .registry("a.foo.eth", name_wrapper(), Address::ZERO)
        .wrapped("a.foo.eth", ALICE, 0, NOW + DAY)
        .registry("b.foo.eth", name_wrapper(), Address::ZERO)
        .wrapped("b.foo.eth", BOB, 0, NOW + DAY);

    let in_order = answers(&chain, &shape);
    assert_eq!(in_order.len(), 6);
    let tree = attach(&shape, in_order.clone());
    assert_eq!(tree.children[0].wrapper.owner, ALICE);
    assert_eq!(tree.children[1].wrapper.owner, BOB);

    let mut swapped = in_order;
    swapped.swap(2, 4);
    swapped.swap(3, 5);
    let wrong = attach(&shape, swapped);
    assert_eq!(wrong.children[0].wrapper.owner, BOB);
    assert_eq!(wrong.children[1].wrapper.owner, ALICE);
    assert_ne!(wrong, tree);
}

#[test]
fn expired_only_when_reclaimable() {
    let shape = TreeShape::build(
        "foo.eth",
        &[subname("gone", vec![]), subname("plain", vec![])],
        TreeLimits::INDEXER,
    );
    let chain = MockChain::new()
        .registry("gone.foo.eth", name_wrapper(), Address::ZERO)
        .wrapped("gone.foo.eth", Address::ZERO, 0, NOW - DAY)
        .registry("plain.foo.eth", BOB, Address::ZERO)
        .wrapped("plain.foo.eth", Address::ZERO, 0, NOW - DAY);
    let tree = attach(&shape, answers(&chain, &shape));

    let gone = &tree.children[0];
    assert!(gone.shows_expired);
    assert_eq!(
        gone.wrapper_state,
        WrapperState::Unregistered {
            reason: UnregisteredReason::PreviouslyWrapped
        }
    );
    assert_eq!(subname_tags(gone), ["Expired"]);

    let plain = &tree.children[1];
    assert!(!plain.shows_expired);
    assert_eq!(plain.wrapper_state, WrapperState::Unwrapped);
}

#[test]
fn expiring_soon_needs_emancipation() {
    let shape = TreeShape::build("foo.eth", &[subname("w", vec![])], TreeLimits::INDEXER);
    let chain = MockChain::new()
        .registry("w.foo.eth", name_wrapper(), Address::ZERO)
        .wrapped("w.foo.eth", BOB, 0, NOW + DAY);
    let tree = attach(&shape, answers(&chain, &shape));
    let w = &tree.children[0];
    assert_eq!(w.wrapper_state, WrapperState::Wrapped);
    assert!(!w.shows_expiring_soon);
}

#[test]
fn failed_reads_leave_nodes_empty() {
    let shape = TreeShape::build("foo.eth", &[subname("a", vec![])], TreeLimits::INDEXER);
    let raw = vec![RawCallResult::reverted(Vec::new()); 4];
    let tree = attach(&shape, raw);
    assert_eq!(tree.children[0].registry_owner, Address::ZERO);
    assert!(!tree.children[0].wrapper.is_owned());
}

fn indexer_with(name: &str, subnames: Vec<ens_state::IndexedSubname>) -> MockIndexer {
    let mut indexer = MockIndexer::default();
    indexer.subnames.insert(name.to_string(), subnames);
    indexer
}

#[tokio::test]
async fn inspector_builds_a_page() {
    let indexer = indexer_with(
        "foo.eth",
        vec![
            subname("a", vec![subname("x", vec![])]),
            subname("b", vec![]),
        ],
    );
    let chain = MockChain::new().wrapped("x.a.foo.eth", ALICE, 0, NOW + DAY);
    let inspector = NameInspector::new(mainnet().clone(), chain, indexer);
    let tree = inspector
        .subnames("Foo.eth", 0, TreeLimits::INDEXER, NOW)
        .await
        .unwrap();

    let names: Vec<_> = tree.root.preorder().iter().map(|n| n.name.clone()).collect();
    assert_eq!(names, ["foo.eth", "a.foo.eth", "x.a.foo.eth", "b.foo.eth"]);
    assert_eq!(tree.root.children[0].children[0].wrapper.owner, ALICE);
    assert_eq!(tree.page, 0);
}

#[tokio::test]
async fn inspector_pages_through_children() {
    let children = (0..12).map(|i| subname(&format!("n{i}"), vec![])).collect();
    let inspector = NameInspector::new(
        mainnet().clone(),
        MockChain::new(),
        indexer_with("foo.eth", children),
    );
    let first = inspector
        .subnames("foo.eth", 0, TreeLimits::INDEXER, NOW)
        .await
        .unwrap();
    assert_eq!(first.root.children.len(), 10);
    let second = inspector
        .subnames("foo.eth", 1, TreeLimits::INDEXER, NOW)
        .await
        .unwrap();
    assert_eq!(second.root.children.len(), 2);
    assert_eq!(second.root.children[0].name, "n10.foo.eth");
}

#[tokio::test]
async fn inspector_rejects_shallow_or_invalid_names() {
    let inspector = NameInspector::new(mainnet().clone(), MockChain::new(), MockIndexer::default());
    assert!(inspector
        .subnames("eth", 0, TreeLimits::INDEXER, NOW)
        .await
        .is_err());
    assert!(inspector
        .subnames("a..eth", 0, TreeLimits::INDEXER, NOW)
        .await
        .is_err());
}

#[tokio::test]
async fn indexer_failure_is_an_error_for_trees() {
    let indexer = MockIndexer {
        fail: true,
        ..Default::default()
    };
    let inspector = NameInspector::new(mainnet().clone(), MockChain::new(), indexer);
    let err = inspector
        .subnames("foo.eth", 0, TreeLimits::INDEXER, NOW)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("indexer unavailable"));
}
