//! Record-boundary alignment.
//!
//! An interior offset is moved to the first record start at or after it. The
//! scan begins one byte early so that an offset which already follows a `\n`
//! stays where it is.

use crate::error::{EngineError, Result};
use crate::source::Peek;

/// Offset just past the first `\n` in `window`, if any.
#[inline]
pub fn find_boundary(window: &[u8]) -> Option<usize> {
    memchr::memchr(b'\n', window).map(|pos| pos + 1)
}

/// Align `offset` to the start of a record.
///
/// `0` and `file_size` are returned as is without reading anything.
///
/// # Errors
///
/// Returns [`EngineError::BoundaryNotFound`] when `lookahead` bytes contain no
/// newline, and propagates read errors from `source`.
pub fn align<S>(source: &S, offset: u64, file_size: u64, lookahead: usize) -> Result<u64>
where
    S: Peek + ?Sized,
{
    if offset == 0 || offset >= file_size {
        return Ok(offset.min(file_size));
    }

    let scan_from = offset - 1;
    let window = source.peek(scan_from, lookahead)?;
    match find_boundary(&window) {
        Some(step) => Ok(scan_from + step as u64),
        // Ran into end-of-file: the last record has no trailing newline.
        None if scan_from + window.len() as u64 >= file_size => Ok(file_size),
        None => Err(EngineError::BoundaryNotFound { offset, lookahead }),
    }
}
