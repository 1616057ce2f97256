//! ENS name state inspection
//!
//! Reads the Registry, the legacy .eth Registrar, the NameWrapper and the
//! Universal Resolver for a name and turns the raw answers into one
//! deterministic [`NameState`]:
//!
//! - **Names**: normalization, namehash and labelhash, DNS encoding ([`names`])
//! - **Calls**: keyed read batches and tolerant decoding ([`multicall`])
//! - **State**: wrapper, expiry and resolver classification, subname trees ([`state`])
//! - **Snapshots**: offline chain and indexer data loaded from JSON ([`snapshot`])
//!
//! Every classifier is a pure function of already-fetched records, so the same
//! inputs at the same `now` always produce the same state.

pub mod snapshot;

pub use ens_inspect_types as types;
pub use ens_multicall as multicall;
pub use ens_names as names;
pub use ens_state as state;

pub use ens_inspect_types::{Chain, ChainContracts, ChainRegistry};
pub use ens_names::{Name, NameInfo};
pub use ens_state::{NameInspector, NameState, SubnameTree, TreeLimits};
pub use snapshot::Snapshot;
