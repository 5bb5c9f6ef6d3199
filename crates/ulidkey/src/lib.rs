#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! A 128-bit, lexicographically sortable identifier for use as an index key.
//!
//! A [`Ulid`] is 16 big-endian bytes: a 48-bit Unix timestamp in
//! milliseconds followed by 80 bits of randomness. The crate provides the
//! pieces a storage host needs to bind it as a native type:
//!
//! - Crockford Base32 text I/O ([`Ulid::encode`], [`Ulid::decode`])
//! - a total order ([`cmp::compare`] and the derived predicates)
//! - generation from a clock and a secure random source ([`UlidGenerator`])
//! - fixed and seeded hashing ([`hash::hash`], [`hash::hash_extended`])
//! - abbreviated sort keys with cardinality-based abort ([`SortAbbreviator`])
//!
//! ```
//! use ulidkey::Ulid;
//!
//! let id = Ulid::decode("01H00000000000000000000000").unwrap();
//! assert_eq!(id.encode(), "01H00000000000000000000000");
//! assert!(Ulid::NIL < id && id < Ulid::MAX);
//! ```

#[macro_use]
mod macros;

mod base32;
mod clock;
pub mod cmp;
mod entropy;
mod error;
mod generator;
pub mod hash;
mod id;
#[cfg(feature = "serde")]
pub mod serde;
#[cfg(feature = "std")]
pub mod sort;

pub use crate::base32::*;
pub use crate::clock::*;
pub use crate::entropy::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
#[cfg(feature = "std")]
pub use crate::sort::{AbbrevConfig, AbbrevKey, AbbrevState, SortAbbreviator};
