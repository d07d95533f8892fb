//! Analysis configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SimilarityError};

/// Largest supported presentation precision
pub const MAX_PRECISION: u32 = 10;

/// Settings for a similarity analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Language every other language is compared against
    pub reference_language: String,

    /// Decimal places kept when presenting scores
    pub precision: u32,

    /// Score comparison languages on the rayon thread pool
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reference_language: "ID".to_string(),
            precision: 3,
            parallel: true,
        }
    }
}

impl AnalysisConfig {
    pub fn with_reference(reference_language: impl Into<String>) -> Self {
        Self {
            reference_language: reference_language.into(),
            ..Self::default()
        }
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SimilarityError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.reference_language.trim().is_empty() {
            return Err(SimilarityError::Configuration(
                "reference language must not be empty".to_string(),
            ));
        }
        if self.precision > MAX_PRECISION {
            return Err(SimilarityError::Configuration(format!(
                "precision {} exceeds maximum of {}",
                self.precision, MAX_PRECISION
            )));
        }
        Ok(())
    }
}
