//! Command-line support for the `dgt` binary.

pub mod commands;
pub mod script;

pub use script::{Op, Outcome};

/// Output format of the `dgt` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
