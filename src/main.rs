mod cli;
mod error;
mod explain;
mod kinds;
mod normalize;
mod status;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use error::{Result, ResultExt};
use http_error::NormalizerConfig;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn load_config(path: Option<&Path>) -> Result<NormalizerConfig> {
    match path {
        Some(path) => NormalizerConfig::load_from_file(path)
            .with_context(|| format!("Failed to load {}", path.display())),
        None => Ok(NormalizerConfig::from_env()?),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Kinds => kinds::execute(),
        Commands::Status { code } => status::execute(code),
        Commands::Explain { kind } => {
            let config = load_config(cli.config.as_deref())?;
            explain::execute(&kind, config)
        }
        Commands::Normalize {
            status,
            name,
            message,
            debug,
        } => {
            let mut config = load_config(cli.config.as_deref())?;
            config.debug |= debug;
            normalize::execute(status, name, message, config)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
