use crate::error::{EngineError, ParseError, Result};
use crate::fixed_point::parse_tenths;
use crate::range::ByteRange;
use crate::source::InputFile;
use crate::stats::PartialTable;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};

/// Typical number of distinct keys; avoids rehashing in the hot loop.
const TABLE_CAPACITY: usize = 1024;

/// Split one record into its key and tenths value.
///
/// # Errors
///
/// Returns the [`ParseError`] that makes the record unusable.
#[inline]
pub fn parse_record(line: &[u8]) -> std::result::Result<(&[u8], i64), ParseError> {
    let split = memchr::memchr(b';', line).ok_or(ParseError::MissingDelimiter)?;
    let (key, value) = (&line[..split], &line[split + 1..]);
    if key.is_empty() {
        return Err(ParseError::EmptyKey);
    }
    Ok((key, parse_tenths(value)?))
}

#[inline]
fn consume_record(table: &mut PartialTable, line: &[u8]) {
    match parse_record(line) {
        Ok((key, value)) => table.record(key, value),
        Err(_) => table.parse_errors += 1,
    }
}

/// Aggregate every record in `bytes`. A final segment without `\n` counts as a record.
pub fn process_bytes(bytes: &[u8]) -> PartialTable {
    let mut table = PartialTable::with_capacity(TABLE_CAPACITY);
    let mut start = 0;
    for newline in memchr::memchr_iter(b'\n', bytes) {
        consume_record(&mut table, &bytes[start..newline]);
        start = newline + 1;
    }
    if start < bytes.len() {
        consume_record(&mut table, &bytes[start..]);
    }
    table
}

/// Streaming counterpart of [`process_bytes`] for buffered reads.
///
/// `base` is the file offset of the first byte `reader` yields; it only
/// appears in error reports.
///
/// # Errors
///
/// Returns [`EngineError::Read`] if the reader fails.
pub fn process_reader<R: BufRead>(reader: &mut R, base: u64) -> Result<PartialTable> {
    let mut table = PartialTable::with_capacity(TABLE_CAPACITY);
    let mut line_buf = Vec::with_capacity(128);
    let mut offset = base;

    loop {
        line_buf.clear();
        match reader.read_until(b'\n', &mut line_buf) {
            Ok(0) => break,
            Ok(n) => {
                offset += n as u64;
                let line = line_buf.strip_suffix(b"\n").unwrap_or(&line_buf[..]);
                consume_record(&mut table, line);
            }
            Err(e) => return Err(EngineError::Read { offset, source: e }),
        }
    }

    Ok(table)
}

/// Process exactly the bytes of `range` and return the worker's private table.
///
/// # Errors
///
/// In buffered mode, returns [`EngineError::FileOpen`], [`EngineError::Seek`] or
/// [`EngineError::Read`]. Mapped input cannot fail here.
pub fn process(input: &InputFile, range: ByteRange, buffer_size: usize) -> Result<PartialTable> {
    if range.is_empty() {
        return Ok(PartialTable::new());
    }

    if let Some(bytes) = input.mapped() {
        return Ok(process_bytes(&bytes[range.as_usize_range()]));
    }

    let mut file = File::open(input.path()).map_err(|e| EngineError::FileOpen {
        path: input.path().to_path_buf(),
        source: e,
    })?;
    file.seek(SeekFrom::Start(range.start))
        .map_err(|e| EngineError::Seek {
            offset: range.start,
            source: e,
        })?;
    let mut reader = BufReader::with_capacity(buffer_size, file.take(range.len()));
    process_reader(&mut reader, range.start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::IoMode;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    const DATA: &[u8] = b"A;10.0\nB;-5.5\nA;20.0\n";

    #[test]
    fn parse_record_splits_at_first_delimiter() {
        assert_eq!(parse_record(b"Oslo;-3.2"), Ok((&b"Oslo"[..], -32)));
        assert_eq!(parse_record(b"no delimiter"), Err(ParseError::MissingDelimiter));
        assert_eq!(parse_record(b";1.0"), Err(ParseError::EmptyKey));
        assert_eq!(parse_record(b"C;abc"), Err(ParseError::InvalidValue));
        // Everything after the first ';' is the value.
        assert_eq!(parse_record(b"a;b;1.0"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn aggregates_fixed_example() {
        let table = process_bytes(DATA);
        let a = table.get(b"A").unwrap();
        assert_eq!((a.min, a.max, a.sum, a.count), (100, 200, 300, 2));
        let b = table.get(b"B").unwrap();
        assert_eq!((b.min, b.max, b.sum, b.count), (-55, -55, -55, 1));
        assert_eq!(table.records, 3);
        assert_eq!(table.parse_errors, 0);
    }

    #[test]
    fn malformed_lines_are_counted_and_skipped() {
        let table = process_bytes(b"A;1.0\nC;abc\n\nnodelim\nB;2.0\n");
        assert_eq!(table.len(), 2);
        assert!(table.get(b"C").is_none());
        assert_eq!(table.parse_errors, 3);
        assert_eq!(table.records, 2);
    }

    #[test]
    fn last_record_without_newline_is_kept() {
        let table = process_bytes(b"A;1.0\nB;2.5");
        assert_eq!(table.get(b"B").map(|b| b.sum), Some(25));
    }

    #[test]
    fn largest_values_sum_without_overflow() {
        let table = process_bytes(b"A;922337203685477580.7\nA;1.0\n");
        let a = table.get(b"A").unwrap();
        assert_eq!(a.sum, i128::from(i64::MAX) + 10);
        assert_eq!(a.count, 2);
        assert_eq!(table.parse_errors, 0);
    }

    #[test]
    fn reader_and_slice_agree() {
        let input = b"x;1.0\ny;-2.0\nbad\nx;3.5";
        let mut reader = Cursor::new(&input[..]);
        assert_eq!(process_reader(&mut reader, 0).unwrap(), process_bytes(input));
    }

    #[test]
    fn process_reads_only_its_range() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(DATA).unwrap();
        file.flush().unwrap();

        for mode in [IoMode::Mmap, IoMode::Buffered] {
            let input = InputFile::open(file.path(), mode).unwrap();
            let table = process(&input, ByteRange::new(7, 21), 4).unwrap();
            assert_eq!(table.records, 2, "{mode:?}");
            assert_eq!(table.get(b"A").map(|a| a.sum), Some(200));
            assert_eq!(table.get(b"B").map(|b| b.sum), Some(-55));

            let empty = process(&input, ByteRange::new(7, 7), 4).unwrap();
            assert!(empty.is_empty());
        }
    }
}
