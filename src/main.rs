use clap::Parser;
use onebrc::args::Args;
use onebrc::config::AppConfig;
use onebrc::presentation;
use std::process::ExitCode;

fn init_logger(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(config: &AppConfig) -> onebrc::error::Result<()> {
    let result = onebrc_engine::run(&config.engine)?;

    if config.stats {
        presentation::write_stats(&mut std::io::stderr().lock(), &result, config.engine.workers)?;
    }
    presentation::write_results(&mut std::io::stdout().lock(), &result, config.format)
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = AppConfig::from(args);
    init_logger(config.verbosity);
    log::debug!("{:?}", config.engine);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
