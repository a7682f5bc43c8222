//! Ledgerline CLI - inspect and update the applied-script ledger

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{history, list, record, status};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::List(args) => list::execute(args, &cli.global),
        cli::Commands::History(args) => history::execute(args, &cli.global),
        cli::Commands::Record(args) => record::execute(args, &cli.global),
        cli::Commands::Status => status::execute(&cli.global),
    }
}
