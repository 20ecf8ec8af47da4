// src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use onebrc_engine::formatter;
use onebrc_engine::stats::RunResult;
use std::io::Write;

/// Write the aggregated table to `out` in the requested format.
///
/// # Errors
///
/// Fails if `out` cannot be written or JSON serialization fails.
pub fn write_results<W: Write>(out: &mut W, result: &RunResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", formatter::render(&result.table))?,
        OutputFormat::Json => {
            let rows = formatter::summaries(&result.table);
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Run statistics for `--stats`. Meant for stderr so stdout stays a single line.
///
/// # Errors
///
/// Fails if `out` cannot be written.
pub fn write_stats<W: Write>(out: &mut W, result: &RunResult, workers: usize) -> Result<()> {
    let table = &result.table;
    writeln!(out, "onebrc v{} · workers={workers}", crate::VERSION)?;
    writeln!(out, "----------------------------------------------")?;
    for (i, range) in result.ranges.iter().enumerate() {
        writeln!(out, "{i:>5}  {:>16}  {range}", range.len())?;
    }
    writeln!(out, "---")?;
    writeln!(out, "{:>16} bytes", result.file_size)?;
    writeln!(out, "{:>16} records", table.records)?;
    writeln!(out, "{:>16} keys", table.len())?;
    writeln!(out, "{:>16} malformed records skipped", table.parse_errors)?;
    writeln!(out, "[onebrc] Completed in {:?}", result.elapsed)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use onebrc_engine::range::ByteRange;
    use onebrc_engine::worker::process_bytes;
    use std::time::Duration;

    fn sample() -> RunResult {
        RunResult {
            table: process_bytes(b"A;10.0\nB;-5.5\nA;20.0\nC;abc\n"),
            ranges: vec![ByteRange::new(0, 14), ByteRange::new(14, 28)],
            file_size: 28,
            elapsed: Duration::from_millis(3),
        }
    }

    #[test]
    fn text_is_a_single_line() {
        let mut out = Vec::new();
        write_results(&mut out, &sample(), OutputFormat::Text).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{A=10.0/15.0/20.0, B=-5.5/-5.5/-5.5}\n"
        );
    }

    #[test]
    fn json_lists_rows_in_key_order() {
        let mut out = Vec::new();
        write_results(&mut out, &sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["station"], "A");
        assert_eq!(rows[0]["mean"], 15.0);
        assert_eq!(rows[0]["count"], 2);
        assert_eq!(rows[1]["min"], -5.5);
    }

    #[test]
    fn stats_report_skipped_records() {
        let mut out = Vec::new();
        write_stats(&mut out, &sample(), 2).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("workers=2"));
        assert!(text.contains("[0, 14)"));
        assert!(text.contains("1 malformed records skipped"));
        assert!(text.contains("3 records"));
    }
}
