//! cacheopt - Build/launch cache option parser
//!
//! CLI entry point that dispatches to subcommands.

use cacheopt::cli::args::LogFormat;
use cacheopt::cli::{Cli, Commands};
use cacheopt::config::ConfigManager;
use cacheopt::error::CacheOptResult;
use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> CacheOptResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("cacheopt=warn"),
        1 => EnvFilter::new("cacheopt=info"),
        _ => EnvFilter::new("cacheopt=debug"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    match cli.log_format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    // Load configuration
    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    debug!("Using config file {}", config_manager.path().display());

    // Config command loads the file only where it needs it
    if let Commands::Config(args) = cli.command {
        return cacheopt::cli::commands::config(args, &config_manager).await;
    }

    let config = config_manager.load().await?;

    // Dispatch to command
    match cli.command {
        Commands::Parse(args) => cacheopt::cli::commands::parse(args, &config).await,
        Commands::Config(_) => unreachable!("Config handled above"),
    }
}
