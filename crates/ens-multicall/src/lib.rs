//! ENS Multicall
//!
//! Read batches against the ENS contracts and tolerant decoding of their results.
//!
//! This crate provides:
//! - [`abi`]: Solidity interfaces for the Registry, BaseRegistrar, NameWrapper,
//!   UniversalResolver and public resolvers
//! - [`batch`]: Keyed call descriptors ([`CallKey`], [`CallRequest`]), plans and results
//! - [`decode`]: [`Decoded`], the per-entry success / error / unavailable classification
//! - [`reads`]: Typed accessors that decode one ENS read out of a [`BatchResults`]
//! - [`returns`]: ABI return-data encoders for offline and test transports
//!
//! # Positional results, keyed consumers
//!
//! A transport executes a [`BatchPlan`] and hands back one [`RawCallResult`] per
//! request, in plan order. [`BatchResults::from_positional`] pairs the two exactly
//! once; from then on every consumer looks its result up by [`CallKey`], so a
//! conditionally skipped call can never shift another call's result.
//!
//! ```
//! use ens_inspect_types::{contracts, Chain};
//! use ens_multicall::{BatchPlan, BatchResults, CallKey, CallRequest, RawCallResult, returns};
//! use ens_names::namehash;
//!
//! let mainnet = contracts::builtin(Chain::Mainnet);
//! let node = namehash("nick.eth").0;
//!
//! let mut plan = BatchPlan::new();
//! plan.push(CallRequest::registry_owner(mainnet, node));
//!
//! let owner = mainnet.name_wrapper;
//! let results = BatchResults::from_positional(
//!     &plan,
//!     vec![RawCallResult::Success(returns::address(owner))],
//! )
//! .unwrap();
//!
//! assert_eq!(results.registry_owner(node).value(), Some(owner));
//! assert!(results.raw(&CallKey::RegistryResolver { node }).is_none());
//! ```

pub mod abi;
pub mod batch;
pub mod decode;
pub mod error;
pub mod reads;
pub mod returns;

pub use batch::{BatchPlan, BatchResults, CallKey, CallRequest, RawCallResult};
pub use decode::Decoded;
pub use error::{BatchError, CallError};
pub use reads::{resolution_or_failed, ReverseRecord};
