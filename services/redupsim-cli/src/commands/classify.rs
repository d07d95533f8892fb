//! Classify command implementation

use anyhow::Result;
use clap::Args;
use redupsim_core::{classify, strip_punctuation, ReduplicationCategory};
use std::io::{self, Write};

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Words to classify
    #[arg(required = true, value_name = "WORD")]
    pub words: Vec<String>,
}

impl ClassifyArgs {
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for (token, category) in self.classified() {
            writeln!(out, "{}\t{}", token, category)?;
        }
        Ok(())
    }

    /// Normalized tokens with their categories, in argument order
    pub fn classified(&self) -> Vec<(String, ReduplicationCategory)> {
        self.words
            .iter()
            .map(|word| {
                let lowered = word.to_lowercase();
                let token = strip_punctuation(&lowered).to_string();
                let category = classify(&token);
                (token, category)
            })
            .collect()
    }
}
