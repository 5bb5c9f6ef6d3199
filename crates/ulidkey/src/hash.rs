//! Hash functions for hash indexes and hash joins.
//!
//! Both functions hash the 16 raw bytes as an opaque string; the
//! timestamp/random split plays no part. Equal ULIDs always hash equal, but
//! equal hashes do not imply equal ULIDs.

use crate::Ulid;
use xxhash_rust::{xxh3::xxh3_64_with_seed, xxh32::xxh32};

/// 32-bit hash of the binary form (xxHash32, seed 0).
#[inline]
#[must_use]
pub fn hash(ulid: &Ulid) -> u32 {
    xxh32(ulid.as_bytes(), 0)
}

/// 64-bit seeded hash of the binary form (XXH3-64).
#[inline]
#[must_use]
pub fn hash_extended(ulid: &Ulid, seed: u64) -> u64 {
    xxh3_64_with_seed(ulid.as_bytes(), seed)
}

/// 32-bit hash of a machine word, used to feed cardinality estimation.
#[cfg(feature = "std")]
#[inline]
pub(crate) fn hash_u32(value: u32) -> u32 {
    xxh32(&value.to_le_bytes(), 0)
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn hash_is_deterministic() {
        let id = Ulid::from_components(1_704_067_200_000, 0xABCDEF);
        assert_eq!(hash(&id), hash(&id));
        assert_eq!(hash_extended(&id, 7), hash_extended(&id, 7));
        assert_eq!(hash(&id), hash(&Ulid::from_bytes(*id.as_bytes())));
    }

    #[test]
    fn hash_spreads_sequential_values() {
        let hashes: HashSet<u32> = (0..1_000_u128)
            .map(|i| hash(&Ulid::from_u128(i)))
            .collect();
        assert_eq!(hashes.len(), 1_000);
    }

    #[test]
    fn hash_depends_on_random_bytes_too() {
        let a = Ulid::from_components(1_000, 1);
        let b = Ulid::from_components(1_000, 2);
        assert_ne!(hash(&a), hash(&b));
        assert_ne!(hash_extended(&a, 0), hash_extended(&b, 0));
    }

    #[test]
    fn hash_u32_spreads_small_inputs() {
        let hashes: HashSet<u32> = (0..1_000_u32).map(hash_u32).collect();
        assert_eq!(hashes.len(), 1_000);
    }

    proptest! {
        #[test]
        fn extended_hash_is_seed_sensitive(
            bytes in any::<[u8; 16]>(),
            seed1 in any::<u64>(),
            seed2 in any::<u64>(),
        ) {
            prop_assume!(seed1 != seed2);
            let id = Ulid::from_bytes(bytes);
            prop_assert_ne!(hash_extended(&id, seed1), hash_extended(&id, seed2));
        }
    }
}
