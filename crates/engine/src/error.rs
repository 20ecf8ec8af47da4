use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors. Any of these aborts the whole run.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to open file '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to stat file '{path}': {source}")]
    FileStat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to memory-map file '{path}': {source}")]
    Map {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to seek to offset {offset}: {source}")]
    Seek {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read at offset {offset}: {source}")]
    Read {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("No record boundary within {lookahead} bytes of offset {offset}")]
    BoundaryNotFound { offset: u64, lookahead: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Per-record failure. Counted by the worker, never propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("record has no ';' delimiter")]
    MissingDelimiter,

    #[error("record has an empty key")]
    EmptyKey,

    #[error("value is not a fixed-point number with one fractional digit")]
    InvalidValue,
}
