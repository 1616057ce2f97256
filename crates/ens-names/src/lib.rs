//! ENS Names
//!
//! Name validation and hashing for ENS.
//!
//! This crate provides:
//! - [`normalize`]: Name normalization with a beautified display form
//! - [`namehash`]: Recursive namehash, labelhash and the derived token ids
//! - [`label`]: Known and hash-only labels, encoded `[labelhash]` labels
//! - [`dns`]: DNS wire-format encoding used by the Universal Resolver
//!
//! # Namehash
//!
//! A name's node is built from the right:
//! - `node("") = 0x00…00`
//! - `node(label.parent) = keccak256(node(parent) ++ keccak256(label))`
//!
//! The Registrar identifies a .eth second-level name by its labelhash; the
//! NameWrapper identifies any wrapped name by its full node. Both ids are the
//! same 32 bytes read as a big-endian `uint256`.

pub mod dns;
pub mod error;
pub mod label;
pub mod namehash;
pub mod normalize;

pub use dns::{dns_encode, reverse_name};
pub use error::NameError;
pub use label::{Label, LabelHash};
pub use namehash::{labelhash, namehash, NameInfo, Node};
pub use normalize::{normalize, Name, Normalized};
