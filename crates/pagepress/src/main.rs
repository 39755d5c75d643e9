//! pagepress CLI - Markdown to Notion page uploader.
//!
//! Provides commands for:
//! - `upload`: Scan a markdown file and append its blocks to a Notion page
//! - `convert`: Scan a markdown file and emit the block JSON to stdout

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConvertArgs, UploadArgs};
use output::Output;

/// pagepress - Markdown to Notion page uploader.
#[derive(Parser)]
#[command(name = "pagepress", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a markdown file to a Notion page.
    Upload(UploadArgs),
    /// Convert a markdown file to Notion block JSON on stdout.
    Convert(ConvertArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for the upload command
    let verbose = matches!(&cli.command, Commands::Upload(args) if args.verbose);

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Upload(args) => args.execute(),
        Commands::Convert(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
