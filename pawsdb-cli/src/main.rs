//! pawsdb-cli - Command-line tool for PAWS request documents
//!
//! Checks, inspects, and wraps request documents without a server.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pawsdb-cli")]
#[command(about = "Check, inspect, and wrap PAWS request documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode and validate a request document
    Check {
        /// Path to the document, or - for stdin
        file: String,

        /// Emit the error envelope a server would return instead of
        /// human-readable output
        #[arg(long)]
        json: bool,
    },

    /// Decode a request document and print the projected request
    Inspect {
        /// Path to the document, or - for stdin
        file: String,
    },

    /// Wrap a bare params object into a full request envelope
    Wrap {
        /// Wire method name, e.g. spectrum.paws.getSpectrum
        #[arg(short, long)]
        method: String,

        /// Request ID (generated if not provided)
        #[arg(short, long)]
        id: Option<String>,

        /// Path to the params object, or - for stdin
        file: String,
    },
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Check { file, json } => commands::check(&file, json),
        Commands::Inspect { file } => commands::inspect(&file),
        Commands::Wrap { method, id, file } => commands::wrap(&method, id, &file),
    };

    std::process::exit(code);
}
