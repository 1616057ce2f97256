//! ENS State
//!
//! Turns already-fetched ENS reads into one consistent picture of a name.
//!
//! This crate provides:
//! - [`resolver`]: Resolver classification and the wildcard flag
//! - [`wrapper`]: NameWrapper state machine and registrar out-of-sync detection
//! - [`expiry`]: Expiry status against a 90-day grace window
//! - [`subnames`]: Bounded subname trees and their flat pre-order read batch
//! - [`name_state`]: The assembled [`NameState`] of one query
//! - [`transport`]: Boundary traits for batch execution and the indexer
//! - [`inspector`]: Two-phase orchestration from raw name to [`NameState`]
//! - [`presentation`]: Human-readable tags and dates; never feeds back into state
//!
//! Every classifier is a pure function of its arguments. Only [`inspector`]
//! touches a transport, and it never retries.
//!
//! # Example
//!
//! ```
//! use ens_inspect_types::{Address, FuseSet, WrapperRecord};
//! use ens_state::wrapper::{classify_wrapper_state, WrapperState};
//!
//! let wrapper = WrapperRecord {
//!     owner: Address::repeat_byte(0xab),
//!     fuses: FuseSet::from_bits(0x10001),
//!     expiry: 2_000_000_000,
//! };
//! let state = classify_wrapper_state("test.eth", false, Address::ZERO, &wrapper, Address::ZERO);
//! assert_eq!(state, WrapperState::Locked);
//! ```

pub mod expiry;
pub mod inspector;
pub mod name_state;
pub mod presentation;
pub mod resolver;
pub mod subnames;
pub mod transport;
pub mod wrapper;

pub use expiry::{classify_expiry, ExpiryStatus, GraceState};
pub use inspector::NameInspector;
pub use name_state::NameState;
pub use resolver::{classify_resolver, ResolverClassification, ResolverKind};
pub use subnames::{IndexedSubname, SubnameNode, SubnameTree, TreeLimits};
pub use transport::{CallTransport, IndexerSource};
pub use wrapper::{classify_wrapper_state, is_out_of_sync, UnregisteredReason, WrapperState};
