//! Shared data structures for the similarity kernel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reduplication pattern of a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReduplicationCategory {
    /// Exact repetition: `anak-anak`
    Pure,
    /// Affix on the first half: `xlari-lari`
    DerivedFirst,
    /// Affix on the second half: `lari-larix`
    DerivedLast,
    /// Prefix on the first half and suffix on the second: `xlari-larix`
    DerivedFirstLast,
    /// Not a reduplicated form
    None,
}

impl ReduplicationCategory {
    pub fn is_reduplicated(self) -> bool {
        !matches!(self, ReduplicationCategory::None)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReduplicationCategory::Pure => "pure",
            ReduplicationCategory::DerivedFirst => "derived_first",
            ReduplicationCategory::DerivedLast => "derived_last",
            ReduplicationCategory::DerivedFirstLast => "derived_first_last",
            ReduplicationCategory::None => "none",
        }
    }
}

impl fmt::Display for ReduplicationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reduplicated token found in a sentence, in sentence order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduplicatedWord {
    pub word: String,
    pub category: ReduplicationCategory,
}

impl ReduplicatedWord {
    pub fn new(word: String, category: ReduplicationCategory) -> Self {
        Self { word, category }
    }
}

/// Lexical and structural similarity of one aligned sentence pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentencePairScore {
    pub lexical: f64,
    pub structural: f64,
}

impl SentencePairScore {
    pub fn new(lexical: f64, structural: f64) -> Self {
        Self {
            lexical,
            structural,
        }
    }

    /// Copy with both scores rounded to `precision` decimal places
    pub fn rounded(&self, precision: u32) -> Self {
        Self {
            lexical: round_to(self.lexical, precision),
            structural: round_to(self.structural, precision),
        }
    }
}

/// Round to `precision` decimal places, exact ties to the even digit
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round_ties_even() / factor
}

/// Scores of one comparison language against the reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageScores {
    pub language: String,
    pub scores: Vec<SentencePairScore>,
}

impl LanguageScores {
    pub fn new(language: String, scores: Vec<SentencePairScore>) -> Self {
        Self { language, scores }
    }

    /// Mean lexical and structural score over all sentence pairs
    pub fn summary(&self) -> LanguageSummary {
        let count = self.scores.len();
        if count == 0 {
            return LanguageSummary {
                sentence_count: 0,
                mean_lexical: 0.0,
                mean_structural: 0.0,
            };
        }

        let (lexical, structural) = self
            .scores
            .iter()
            .fold((0.0, 0.0), |(l, s), score| (l + score.lexical, s + score.structural));

        LanguageSummary {
            sentence_count: count,
            mean_lexical: lexical / count as f64,
            mean_structural: structural / count as f64,
        }
    }
}

/// Aggregate view of a language's scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanguageSummary {
    pub sentence_count: usize,
    pub mean_lexical: f64,
    pub mean_structural: f64,
}

/// Per-language scores, in corpus order, against a single reference language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub reference: String,
    pub languages: Vec<LanguageScores>,
}

impl AnalysisResult {
    pub fn new(reference: String, languages: Vec<LanguageScores>) -> Self {
        Self {
            reference,
            languages,
        }
    }

    /// Scores for a comparison language, if it was analyzed
    pub fn get(&self, language: &str) -> Option<&[SentencePairScore]> {
        self.languages
            .iter()
            .find(|entry| entry.language == language)
            .map(|entry| entry.scores.as_slice())
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Copy with every score rounded for presentation
    pub fn rounded(&self, precision: u32) -> Self {
        Self {
            reference: self.reference.clone(),
            languages: self
                .languages
                .iter()
                .map(|entry| {
                    LanguageScores::new(
                        entry.language.clone(),
                        entry.scores.iter().map(|s| s.rounded(precision)).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Export to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
