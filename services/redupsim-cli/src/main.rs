//! Redupsim command-line entry point

use anyhow::Result;
use clap::Parser;
use redupsim_cli::commands::Commands;

/// Lexical and reduplication-structure similarity of parallel sentences
#[derive(Debug, Parser)]
#[command(name = "redupsim", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
