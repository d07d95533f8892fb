//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use redupsim_core::AnalysisResult;
use std::io::Write;

/// JSON formatter - outputs the rounded analysis result
pub struct JsonFormatter<W: Write> {
    writer: W,
    precision: u32,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, precision: u32) -> Self {
        Self { writer, precision }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn write_result(&mut self, result: &AnalysisResult) -> Result<()> {
        let json = result.rounded(self.precision).to_json()?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redupsim_core::{LanguageScores, SentencePairScore};

    #[test]
    fn test_json_report() {
        let result = AnalysisResult::new(
            "ID".to_string(),
            vec![LanguageScores::new(
                "EN".to_string(),
                vec![
                    SentencePairScore::new(2.0 / 3.0, 0.0),
                    SentencePairScore::new(0.8125, 0.0625),
                ],
            )],
        );

        let mut formatter = JsonFormatter::new(Vec::new(), 3);
        formatter.write_result(&result).unwrap();
        formatter.finish().unwrap();
        let text = String::from_utf8(formatter.into_inner()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["reference"], "ID");
        assert_eq!(value["languages"][0]["language"], "EN");
        assert_eq!(value["languages"][0]["scores"][0]["lexical"], 0.667);
        assert_eq!(value["languages"][0]["scores"][1]["lexical"], 0.812);
        assert_eq!(value["languages"][0]["scores"][1]["structural"], 0.062);
    }
}
