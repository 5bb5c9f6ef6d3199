//! Abbreviated sort keys for bulk sorts of [`Ulid`](crate::Ulid) values.
//!
//! A sort that compares full 16-byte values can instead compare the first
//! machine word of each value, falling back to the full comparison only on
//! ties. The word prefix is mostly the timestamp, so when many values share
//! it the prefix stops paying off. [`SortAbbreviator`] watches the number of
//! distinct prefixes with a HyperLogLog sketch and tells the driver when to
//! give up on abbreviation.
//!
//! ```
//! use ulidkey::{Ulid, sort};
//!
//! let mut values: Vec<Ulid> = (0..100_u64).rev().map(Ulid::from_timestamp).collect();
//! sort::sort(&mut values);
//! assert!(values.windows(2).all(|w| w[0] < w[1]));
//! ```

mod abbrev;
mod config;
mod driver;
mod hll;

pub use abbrev::*;
pub use config::*;
pub use driver::*;
pub use hll::*;
