use hashbrown::HashMap;
use std::time::Duration;

use crate::range::ByteRange;

/// Running statistics for one key, in tenths.
///
/// Only ever built from a first observation, so `count >= 1` and
/// `min <= max` hold for every live value. `sum` is wide enough that no
/// run of `i64` observations can overflow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accumulator {
    pub min: i64,
    pub max: i64,
    pub sum: i128,
    pub count: u64,
}

impl Accumulator {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self {
            min: value,
            max: value,
            sum: value as i128,
            count: 1,
        }
    }

    #[inline]
    pub fn observe(&mut self, value: i64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += i128::from(value);
        self.count += 1;
    }

    /// Associative, commutative combine used by the merger.
    #[inline]
    pub fn combine(&mut self, other: &Self) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.count += other.count;
    }

    /// `sum / count` rounded to the nearest tenth, ties away from zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn mean_tenths(&self) -> i64 {
        let sum = self.sum;
        let count = i128::from(self.count);
        let rounded = (2 * sum.abs() + count) / (2 * count);
        (if sum < 0 { -rounded } else { rounded }) as i64
    }
}

/// Accumulators keyed by raw key bytes, plus record counters.
///
/// Used both as one worker's private partial table and as the merged final table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsTable {
    pub entries: HashMap<Vec<u8>, Accumulator>,
    /// Records aggregated successfully.
    pub records: u64,
    /// Records skipped as malformed.
    pub parse_errors: u64,
}

pub type PartialTable = StatsTable;
pub type FinalTable = StatsTable;

impl StatsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Record one value for `key`. Only the first sighting of a key allocates.
    #[inline]
    pub fn record(&mut self, key: &[u8], value: i64) {
        if let Some(acc) = self.entries.get_mut(key) {
            acc.observe(value);
        } else {
            self.entries.insert(key.to_vec(), Accumulator::new(value));
        }
        self.records += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &[u8]) -> Option<&Accumulator> {
        self.entries.get(key)
    }
}

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub table: FinalTable,
    pub ranges: Vec<ByteRange>,
    pub file_size: u64,
    pub elapsed: Duration,
}
