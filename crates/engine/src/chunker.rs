use crate::error::{EngineError, Result};
use crate::range::ByteRange;

/// Split `[0, file_size)` into `worker_count` contiguous, record-aligned ranges.
///
/// `align` is called once per interior boundary; the aligned offset becomes
/// both the end of one range and the start of the next.
///
/// # Errors
///
/// Returns [`EngineError::Config`] for a zero worker count and otherwise
/// propagates the first error returned by `align`.
pub fn chunk<F>(file_size: u64, worker_count: usize, mut align: F) -> Result<Vec<ByteRange>>
where
    F: FnMut(u64) -> Result<u64>,
{
    if worker_count == 0 {
        return Err(EngineError::Config("worker count must be at least 1".into()));
    }

    let chunk_size = file_size / worker_count as u64;
    let mut ranges = Vec::with_capacity(worker_count);
    let mut start = 0;

    for i in 1..worker_count as u64 {
        let provisional = i * chunk_size;
        let boundary = align(provisional)?.clamp(start, file_size);
        ranges.push(ByteRange::new(start, boundary));
        start = boundary;
    }
    ranges.push(ByteRange::new(start, file_size));

    Ok(ranges)
}
