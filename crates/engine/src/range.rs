use std::fmt;

/// Half-open `[start, end)` span of file offsets owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    #[inline]
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn len(&self) -> u64 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Index form for slicing an in-memory view of the file.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn as_usize_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_range_has_zero_len() {
        let range = ByteRange::new(7, 7);
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
    }

    #[test]
    fn display_is_half_open() {
        assert_eq!(ByteRange::new(0, 12).to_string(), "[0, 12)");
    }
}
