use crate::error::{EngineError, Result};
use crate::options::IoMode;
use derive_builder::Builder;
use std::path::PathBuf;

pub const DEFAULT_PATH: &str = "measurements.txt";
/// Far longer than any plausible `key;value` line.
pub const DEFAULT_LOOKAHEAD: usize = 4096;
pub const DEFAULT_BUFFER_SIZE: usize = 4 * 1024 * 1024;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "PathBuf::from(DEFAULT_PATH)")]
    pub path: PathBuf,
    #[builder(default = "num_cpus::get()")]
    pub workers: usize,
    #[builder(default = "DEFAULT_LOOKAHEAD")]
    pub lookahead: usize,
    #[builder(default)]
    pub io_mode: IoMode,
    #[builder(default = "DEFAULT_BUFFER_SIZE")]
    pub buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            workers: num_cpus::get(),
            lookahead: DEFAULT_LOOKAHEAD,
            io_mode: IoMode::default(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl Config {
    /// Reject values the engine cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] for a zero worker count, lookahead or buffer size.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(EngineError::Config("worker count must be at least 1".into()));
        }
        if self.lookahead == 0 {
            return Err(EngineError::Config("lookahead must be at least 1 byte".into()));
        }
        if self.buffer_size == 0 {
            return Err(EngineError::Config("buffer size must be at least 1 byte".into()));
        }
        Ok(())
    }
}
