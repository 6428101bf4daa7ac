use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "serious")]
#[command(
    author,
    version,
    about = "Inspect the serious error taxonomy and how it maps onto HTTP"
)]
pub struct Cli {
    /// Normalizer configuration file (TOML); defaults come from the environment
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output with debug logging
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the kind hierarchy as a tree
    Kinds,

    /// Show a kind's ancestors and the HTTP status its errors normalize to
    Explain {
        /// Kind name, e.g. ItemNotFoundError
        kind: String,
    },

    /// Look up the reason phrase of an HTTP status code
    Status {
        /// Numeric status code
        code: u16,
    },

    /// Build an HTTP error from explicit parts and print it as JSON
    Normalize {
        /// Status code; the configured default when omitted
        #[clap(short, long)]
        status: Option<u16>,

        /// Error name
        #[clap(short, long)]
        name: Option<String>,

        /// Error message
        #[clap(short, long)]
        message: Option<String>,

        /// Include the stack in the output
        #[clap(long, default_value_t = false)]
        debug: bool,
    },
}
