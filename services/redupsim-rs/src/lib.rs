//! Redupsim Core: similarity kernel for parallel sentences.
//!
//! Scores each comparison language against a reference language along two
//! dimensions:
//! - Lexical: normalized Levenshtein distance over the raw sentences
//! - Structural: positional agreement of reduplicated word forms
//!   (`anak-anak`, `xlari-lari`, ...)
//!
//! Python bindings are available behind the `python` feature.

pub mod analyzer;
pub mod config;
pub mod corpus;
pub mod error;
pub mod lexical;
pub mod reduplication;
pub mod structural;
pub mod types;

#[cfg(feature = "python")]
mod python;

pub use analyzer::{analyze_similarity, score_pair, SimilarityAnalyzer};
pub use config::AnalysisConfig;
pub use corpus::Corpus;
pub use error::{Result, SimilarityError};
pub use lexical::{batch_lexical_similarity, edit_distance, lexical_similarity};
pub use reduplication::{classify, extract_reduplicated_words, strip_punctuation};
pub use structural::structural_similarity;
pub use types::{
    AnalysisResult, LanguageScores, LanguageSummary, ReduplicatedWord, ReduplicationCategory,
    SentencePairScore,
};
