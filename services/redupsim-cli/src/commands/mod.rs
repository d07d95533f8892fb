//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod analyze;
pub mod classify;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score every language of a corpus against a reference language
    Analyze(analyze::AnalyzeArgs),

    /// Print the reduplication category of each word
    Classify(classify::ClassifyArgs),
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Classify(args) => args.execute(),
        }
    }
}
