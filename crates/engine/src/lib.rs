// crates/engine/src/lib.rs
use rayon::prelude::*;
use std::time::Instant;

pub mod aligner;
pub mod chunker;
pub mod config;
pub mod error;
pub mod fixed_point;
pub mod formatter;
pub mod merger;
pub mod options;
pub mod range;
pub mod source;
pub mod stats;
pub mod worker;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::source::InputFile;
use crate::stats::RunResult;

/// Aggregate the file named by `config` with `config.workers` parallel workers.
///
/// Malformed records are skipped and only show up in
/// `RunResult::table.parse_errors`.
///
/// # Errors
///
/// Returns the first fatal error: bad configuration, a file that cannot be
/// opened, stat-ed or mapped, an alignment failure, or a worker I/O error.
/// No partial result is returned in that case.
pub fn run(config: &Config) -> Result<RunResult> {
    config.validate()?;
    let started = Instant::now();

    let input = InputFile::open(&config.path, config.io_mode)?;
    let file_size = input.size();

    let ranges = chunker::chunk(file_size, config.workers, |offset| {
        aligner::align(&input, offset, file_size, config.lookahead)
    })?;
    for (i, range) in ranges.iter().enumerate() {
        log::debug!("worker {i}: {range} ({} bytes)", range.len());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .thread_name(|i| format!("onebrc-worker-{i}"))
        .build()
        .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

    // Join barrier: nothing is merged until every worker has returned.
    let partials = pool.install(|| {
        ranges
            .par_iter()
            .with_max_len(1)
            .map(|range| worker::process(&input, *range, config.buffer_size))
            .collect::<Result<Vec<_>>>()
    })?;

    let table = merger::merge(partials);
    let elapsed = started.elapsed();

    log::info!(
        "aggregated {} records into {} keys from {} bytes in {elapsed:?}",
        table.records,
        table.len(),
        file_size,
    );
    if table.parse_errors > 0 {
        log::warn!("skipped {} malformed records", table.parse_errors);
    }

    Ok(RunResult {
        table,
        ranges,
        file_size,
        elapsed,
    })
}
