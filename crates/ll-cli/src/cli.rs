//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Ledgerline - inspect and update a migration ledger table
#[derive(Parser, Debug)]
#[command(name = "ledger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Print journal messages to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing ledgerline.yml
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override database path (DuckDB file or :memory:)
    #[arg(short, long, global = true)]
    pub database: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List applied script names in lexical order
    List(ListArgs),

    /// Show applied scripts with their ids and timestamps
    History(ListArgs),

    /// Record scripts as applied, in the order given
    Record(RecordArgs),

    /// Report whether the ledger table exists and how many scripts it holds
    Status,
}

/// Arguments for the list and history commands
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: ListOutput,
}

/// List output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutput {
    /// Plain text, one entry per line
    Table,
    /// JSON output
    Json,
}

/// Arguments for the record command
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Script names to record
    #[arg(required = true, num_args = 1..)]
    pub scripts: Vec<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
