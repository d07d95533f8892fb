//! Output formatting module

use anyhow::Result;
use redupsim_core::AnalysisResult;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a full analysis result
    fn write_result(&mut self, result: &AnalysisResult) -> Result<()>;

    /// Flush buffered output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
