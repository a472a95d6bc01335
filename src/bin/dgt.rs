//! CLI entry point for the `dgt` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use digraph_tool::cli::{commands, OutputFormat};
use digraph_tool::ErrorKind;

#[derive(Parser)]
#[command(
    name = "dgt",
    about = "digraph-tool CLI — replay graph operation scripts against an in-memory graph"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply every operation of a JSON script, stopping at the first failure
    Run {
        /// Path to the JSON script
        script: PathBuf,
    },
    /// Parse a JSON script and report its size without running it
    Check {
        /// Path to the JSON script
        script: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == OutputFormat::Json;

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Run { script } => commands::cmd_run(&script, json),
        Commands::Check { script } => commands::cmd_check(&script, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match e.kind() {
            ErrorKind::Io => 1,
            ErrorKind::Script => 2,
            ErrorKind::Node => 3,
            ErrorKind::Edge => 4,
            ErrorKind::Graph => 5,
        };
        process::exit(code);
    }
}
