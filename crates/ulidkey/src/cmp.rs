//! Total order over ULIDs.
//!
//! [`compare`] is the single source of ordering. The predicates are thin
//! wrappers with the usual relationships: `gt` commutes `lt`, `le` negates
//! `gt`, `ge` negates `lt`, and `ne` negates `eq`.

use crate::Ulid;
use core::cmp::Ordering;

/// Compares two ULIDs as unsigned big-endian 128-bit integers.
///
/// This is the same as comparing the 16 bytes lexicographically, and the same
/// as comparing the encoded text.
#[inline]
#[must_use]
pub fn compare(a: &Ulid, b: &Ulid) -> Ordering {
    u128::from_be_bytes(*a.as_bytes()).cmp(&u128::from_be_bytes(*b.as_bytes()))
}

/// [`compare`] as the `-1`/`0`/`1` integer that index support functions
/// return.
#[inline]
#[must_use]
pub fn compare_i32(a: &Ulid, b: &Ulid) -> i32 {
    match compare(a, b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[inline]
#[must_use]
pub fn lt(a: &Ulid, b: &Ulid) -> bool {
    compare(a, b) == Ordering::Less
}

#[inline]
#[must_use]
pub fn gt(a: &Ulid, b: &Ulid) -> bool {
    lt(b, a)
}

#[inline]
#[must_use]
pub fn le(a: &Ulid, b: &Ulid) -> bool {
    !gt(a, b)
}

#[inline]
#[must_use]
pub fn ge(a: &Ulid, b: &Ulid) -> bool {
    !lt(a, b)
}

#[inline]
#[must_use]
pub fn eq(a: &Ulid, b: &Ulid) -> bool {
    compare(a, b) == Ordering::Equal
}

#[inline]
#[must_use]
pub fn ne(a: &Ulid, b: &Ulid) -> bool {
    !eq(a, b)
}
