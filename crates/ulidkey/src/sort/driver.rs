#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::sort::{AbbrevConfig, AbbrevState, SortAbbreviator};
use crate::{Ulid, cmp};

/// Values converted before the first abort check.
const FIRST_CHECK: usize = 10;

/// Sorts `values` ascending, using abbreviated keys while they pay off.
///
/// See [`sort_with_config`].
pub fn sort(values: &mut [Ulid]) -> AbbrevState {
    sort_with_config(values, AbbrevConfig::default())
}

/// Sorts `values` ascending with the given abbreviation settings and returns
/// the abbreviator's final state.
///
/// Every value is converted to its abbreviated key; each time the converted
/// count reaches the next checkpoint (10, then doubling) the abbreviator is
/// asked whether to abort. After an abort the keys are dropped and the slice
/// is sorted by the full comparator. The resulting order is the same either
/// way.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip_all, fields(len = values.len()))
)]
pub fn sort_with_config(values: &mut [Ulid], config: AbbrevConfig) -> AbbrevState {
    let mut abbrev = SortAbbreviator::with_config(config);
    let mut keyed = Vec::with_capacity(values.len());
    let mut next_check = FIRST_CHECK;

    for value in values.iter() {
        keyed.push((abbrev.convert(value), *value));
        if keyed.len() >= next_check {
            next_check = next_check.saturating_mul(2);
            if abbrev.should_abort(keyed.len()) {
                break;
            }
        }
    }

    if abbrev.state() == AbbrevState::Aborted {
        values.sort_unstable_by(cmp::compare);
    } else {
        keyed.sort_unstable_by(|(ka, a), (kb, b)| {
            SortAbbreviator::compare_abbrev(*ka, *kb)
                .then_with(|| SortAbbreviator::compare_full(a, b))
        });
        for (slot, (_, value)) in values.iter_mut().zip(keyed) {
            *slot = value;
        }
    }

    debug_event!(state = ?abbrev.state(), inputs = abbrev.input_count(), "ulid sort finished");
    abbrev.state()
}
