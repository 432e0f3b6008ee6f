//! pagewin CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use pagewin_core::config::AppConfig;
use pagewin_core::config::logging::{LogFormat, LoggingConfig};

mod commands;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    // Commands report their own config errors; logging just falls back.
    let logging = AppConfig::load(&cli.config)
        .map(|config| config.logging)
        .unwrap_or_default();
    init_logging(&logging);

    if let Err(e) = cli.execute() {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
