use crate::stats::{FinalTable, PartialTable};
use hashbrown::hash_map::Entry;

/// Fold `other` into `into`, moving keys that `into` has not seen yet.
pub fn absorb(into: &mut FinalTable, other: PartialTable) {
    into.records += other.records;
    into.parse_errors += other.parse_errors;
    into.entries.reserve(other.entries.len());
    for (key, acc) in other.entries {
        match into.entries.entry(key) {
            Entry::Occupied(mut slot) => slot.get_mut().combine(&acc),
            Entry::Vacant(slot) => {
                slot.insert(acc);
            }
        }
    }
}

/// Combine two tables into one.
pub fn merge_pair(mut left: PartialTable, mut right: PartialTable) -> PartialTable {
    // Keep the larger map so fewer keys are rehashed.
    if left.entries.len() < right.entries.len() {
        absorb(&mut right, left);
        return right;
    }
    absorb(&mut left, right);
    left
}

/// Left-fold every partial table into the final table.
///
/// Order and grouping do not affect the result.
pub fn merge<I>(partials: I) -> FinalTable
where
    I: IntoIterator<Item = PartialTable>,
{
    partials.into_iter().fold(FinalTable::new(), merge_pair)
}
