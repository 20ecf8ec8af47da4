// src/config.rs
use crate::args::Args;
use crate::options::OutputFormat;
use onebrc_engine::config::Config;

/// Engine configuration plus the settings only the binary cares about.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub engine: Config,
    pub format: OutputFormat,
    pub stats: bool,
    pub verbosity: u8,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        let defaults = Config::default();
        let engine = Config {
            path: args.file,
            workers: args.workers.unwrap_or(defaults.workers),
            lookahead: args.lookahead.unwrap_or(defaults.lookahead),
            io_mode: args.io_mode.into(),
            buffer_size: args.buffer_size.unwrap_or(defaults.buffer_size),
        };

        Self {
            engine,
            format: args.format,
            stats: args.stats,
            verbosity: args.verbose,
        }
    }
}
