use core::cmp::Ordering;
use core::mem::size_of;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::hash::hash_u32;
use crate::sort::{AbbrevConfig, HyperLogLog};
use crate::{Ulid, cmp};

/// A machine-word prefix of a [`Ulid`]: its first `size_of::<usize>()` bytes
/// read big-endian, so unsigned comparison of keys agrees with the full
/// comparison whenever the keys differ.
pub type AbbrevKey = usize;

const WORD: usize = size_of::<AbbrevKey>();

/// Where a [`SortAbbreviator`] is in its abort decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AbbrevState {
    /// Still counting distinct prefixes.
    Estimating,
    /// Enough distinct prefixes were seen; abbreviation stays on and the
    /// sketch is no longer fed.
    Converged,
    /// Too few distinct prefixes; the sort should compare full values only.
    Aborted,
}

/// Per-sort abbreviation state.
///
/// One value is owned by one sort. The driver calls [`convert`] for every
/// input and [`should_abort`] at intervals of its choosing; once aborted the
/// abbreviated keys must be discarded.
///
/// [`convert`]: SortAbbreviator::convert
/// [`should_abort`]: SortAbbreviator::should_abort
#[derive(Clone, Debug)]
pub struct SortAbbreviator {
    config: AbbrevConfig,
    input_count: u64,
    estimator: HyperLogLog,
    state: AbbrevState,
}

impl Default for SortAbbreviator {
    fn default() -> Self {
        Self::new()
    }
}

impl SortAbbreviator {
    pub fn new() -> Self {
        Self::with_config(AbbrevConfig::default())
    }

    pub fn with_config(config: AbbrevConfig) -> Self {
        Self {
            config,
            input_count: 0,
            estimator: HyperLogLog::new(config.precision()),
            state: AbbrevState::Estimating,
        }
    }

    pub const fn config(&self) -> &AbbrevConfig {
        &self.config
    }

    pub const fn state(&self) -> AbbrevState {
        self.state
    }

    /// Number of values passed to [`convert`](Self::convert).
    pub const fn input_count(&self) -> u64 {
        self.input_count
    }

    /// Current distinct-prefix estimate.
    pub fn estimate(&self) -> f64 {
        self.estimator.estimate()
    }

    /// Returns the abbreviated key of `id` and, while estimating, records its
    /// prefix in the sketch.
    #[inline]
    pub fn convert(&mut self, id: &Ulid) -> AbbrevKey {
        let mut word = [0_u8; WORD];
        word.copy_from_slice(&id.as_bytes()[..WORD]);
        let key = AbbrevKey::from_be_bytes(word);

        self.input_count += 1;
        if self.state == AbbrevState::Estimating {
            self.estimator.insert_hash(hash_u32(fold(key)));
        }
        key
    }

    /// Decides whether the sort should stop using abbreviated keys.
    ///
    /// `row_count` is the number of rows the sort has taken in so far. No
    /// estimate is made until both it and the input count reach their
    /// minimums. A converged abbreviator never aborts; an aborted one keeps
    /// answering `true`.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(self), fields(inputs = self.input_count))
    )]
    pub fn should_abort(&mut self, row_count: usize) -> bool {
        match self.state {
            AbbrevState::Aborted => return true,
            AbbrevState::Converged => return false,
            AbbrevState::Estimating => {}
        }

        if row_count < self.config.min_rows() || self.input_count < self.config.min_inputs() {
            return false;
        }

        let cardinality = self.estimator.estimate();

        if cardinality > self.config.cardinality_ceiling() {
            debug_event!(
                cardinality,
                inputs = self.input_count,
                row_count,
                "ulid abbreviation estimation converged"
            );
            self.state = AbbrevState::Converged;
            return false;
        }

        let floor = self.config.abort_floor(self.input_count);
        if cardinality < floor {
            debug_event!(
                cardinality,
                floor,
                inputs = self.input_count,
                row_count,
                "ulid abbreviation aborted"
            );
            self.state = AbbrevState::Aborted;
            return true;
        }

        trace_event!(
            cardinality,
            inputs = self.input_count,
            row_count,
            "ulid abbreviation kept"
        );
        false
    }

    /// Compares two abbreviated keys. `Equal` means "unknown", not equal
    /// values; the caller must fall back to [`compare_full`](Self::compare_full).
    #[inline]
    pub fn compare_abbrev(a: AbbrevKey, b: AbbrevKey) -> Ordering {
        a.cmp(&b)
    }

    #[inline]
    pub fn compare_full(a: &Ulid, b: &Ulid) -> Ordering {
        cmp::compare(a, b)
    }
}

/// Folds a key to 32 bits for the sketch.
#[inline]
fn fold(key: AbbrevKey) -> u32 {
    #[cfg(target_pointer_width = "64")]
    {
        (key as u32) ^ ((key >> 32) as u32)
    }
    #[cfg(not(target_pointer_width = "64"))]
    {
        key as u32
    }
}
