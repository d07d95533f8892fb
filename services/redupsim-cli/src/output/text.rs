//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use redupsim_core::types::round_to;
use redupsim_core::AnalysisResult;
use std::io::Write;

/// Plain text formatter - one block per comparison language
pub struct TextFormatter<W: Write> {
    writer: W,
    precision: u32,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, precision: u32) -> Self {
        Self { writer, precision }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn write_result(&mut self, result: &AnalysisResult) -> Result<()> {
        let rounded = result.rounded(self.precision);
        let p = self.precision as usize;

        for (n, entry) in rounded.languages.iter().enumerate() {
            if n > 0 {
                writeln!(self.writer)?;
            }
            writeln!(
                self.writer,
                "Results for {} (reference {}):",
                entry.language, rounded.reference
            )?;
            for (i, score) in entry.scores.iter().enumerate() {
                writeln!(
                    self.writer,
                    "Sentence {}: lexical={:.*}, structural={:.*}",
                    i + 1,
                    p,
                    score.lexical,
                    p,
                    score.structural
                )?;
            }

            // means are taken over unrounded scores
            let summary = result.languages[n].summary();
            writeln!(
                self.writer,
                "Mean: lexical={:.*}, structural={:.*}",
                p,
                round_to(summary.mean_lexical, self.precision),
                p,
                round_to(summary.mean_structural, self.precision)
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
