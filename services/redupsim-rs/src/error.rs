//! Error types for corpus loading, configuration and analysis.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the similarity kernel
#[derive(Error, Debug)]
pub enum SimilarityError {
    /// Reference language missing or empty, or an invalid setting
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A comparison language has fewer sentences than the reference
    #[error(
        "alignment error: language '{language}' has {available} sentences, reference requires {required}"
    )]
    Alignment {
        /// The comparison language code
        language: String,
        /// Number of reference sentences
        required: usize,
        /// Number of sentences the comparison language provides
        available: usize,
    },

    /// Corpus or configuration file could not be read
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for `AnalysisConfig`
    #[error("invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
