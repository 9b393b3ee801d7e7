//! navlint CLI - Navigation manifest linter.
//!
//! Provides commands for:
//! - `check`: Validate the manifest against the docs tree
//! - `tree`: Print the parsed navigation hierarchy
//! - `fmt`: Render the manifest in canonical form

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, FmtArgs, TreeArgs};
use output::Output;

/// navlint - Navigation manifest linter.
#[derive(Parser)]
#[command(name = "navlint", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the manifest against the documentation tree.
    Check(CheckArgs),
    /// Print the parsed navigation hierarchy.
    Tree(TreeArgs),
    /// Render the manifest in canonical form.
    Fmt(FmtArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for the check command
    let verbose = matches!(&cli.command, Commands::Check(args) if args.verbose);

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Tree(args) => args.execute(),
        Commands::Fmt(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
