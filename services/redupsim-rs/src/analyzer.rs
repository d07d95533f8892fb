//! Corpus-wide scoring of every comparison language against a reference.

use rayon::prelude::*;

use crate::config::AnalysisConfig;
use crate::corpus::Corpus;
use crate::error::{Result, SimilarityError};
use crate::lexical::lexical_similarity;
use crate::structural::structural_similarity;
use crate::types::{AnalysisResult, LanguageScores, SentencePairScore};

/// Scores aligned sentence pairs of a corpus
#[derive(Debug, Clone, Default)]
pub struct SimilarityAnalyzer {
    config: AnalysisConfig,
}

impl SimilarityAnalyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Score every non-reference language of `corpus`, sentence by sentence.
    ///
    /// Fails if the reference language is absent or has no sentences, or if a
    /// comparison language has fewer sentences than the reference. Extra
    /// sentences in a comparison language are ignored.
    pub fn analyze(&self, corpus: &Corpus) -> Result<AnalysisResult> {
        let reference = self.config.reference_language.as_str();
        let reference_sentences = match corpus.get(reference) {
            Some(sentences) if !sentences.is_empty() => sentences,
            Some(_) => {
                return Err(SimilarityError::Configuration(format!(
                    "reference language '{}' has no sentences",
                    reference
                )))
            }
            None => {
                return Err(SimilarityError::Configuration(format!(
                    "reference language '{}' not found in corpus",
                    reference
                )))
            }
        };

        let comparisons: Vec<(&str, &[String])> = corpus
            .iter()
            .filter(|(language, _)| *language != reference)
            .collect();

        log::info!(
            "analyzing {} languages against '{}' ({} sentences)",
            comparisons.len(),
            reference,
            reference_sentences.len()
        );

        // collect every outcome first so the reported error is the first in corpus order
        let outcomes: Vec<Result<LanguageScores>> = if self.config.parallel {
            comparisons
                .par_iter()
                .map(|(language, sentences)| {
                    score_language(language, reference_sentences, sentences)
                })
                .collect()
        } else {
            comparisons
                .iter()
                .map(|(language, sentences)| {
                    score_language(language, reference_sentences, sentences)
                })
                .collect()
        };
        let languages = outcomes.into_iter().collect::<Result<Vec<_>>>()?;

        Ok(AnalysisResult::new(reference.to_string(), languages))
    }
}

/// Score one comparison language against the reference sentences
pub fn score_language(
    language: &str,
    reference: &[String],
    comparison: &[String],
) -> Result<LanguageScores> {
    if comparison.len() < reference.len() {
        return Err(SimilarityError::Alignment {
            language: language.to_string(),
            required: reference.len(),
            available: comparison.len(),
        });
    }
    if comparison.len() > reference.len() {
        log::warn!(
            "language '{}' has {} extra sentences, ignoring them",
            language,
            comparison.len() - reference.len()
        );
    }

    let scores = reference
        .iter()
        .zip(comparison)
        .map(|(a, b)| score_pair(a, b))
        .collect();

    log::debug!("scored {} sentence pairs for '{}'", reference.len(), language);
    Ok(LanguageScores::new(language.to_string(), scores))
}

/// Lexical and structural similarity of one sentence pair
pub fn score_pair(reference: &str, comparison: &str) -> SentencePairScore {
    SentencePairScore::new(
        lexical_similarity(reference, comparison),
        structural_similarity(reference, comparison),
    )
}

/// Analyze `corpus` against `reference` with default settings
pub fn analyze_similarity(corpus: &Corpus, reference: &str) -> Result<AnalysisResult> {
    SimilarityAnalyzer::new(AnalysisConfig::with_reference(reference))?.analyze(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::edit_distance;

    fn corpus(entries: Vec<(&str, Vec<&str>)>) -> Corpus {
        entries.into_iter().collect()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let corpus = corpus(vec![
            ("ID", vec!["anak-anak bermain"]),
            ("EN", vec!["children play"]),
        ]);
        let result = analyze_similarity(&corpus, "ID").unwrap();

        let scores = result.get("EN").unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].structural, 0.0);

        let expected =
            1.0 - edit_distance("anak-anak bermain", "children play") as f64 / 17.0;
        assert!((scores[0].lexical - expected).abs() < 1e-12);
        assert!(result.get("ID").is_none());
    }

    #[test]
    fn test_missing_reference() {
        let corpus = corpus(vec![("EN", vec!["children play"])]);
        let err = analyze_similarity(&corpus, "ID").unwrap_err();
        assert!(matches!(err, SimilarityError::Configuration(_)));
    }

    #[test]
    fn test_empty_reference() {
        let corpus = corpus(vec![("ID", vec![]), ("EN", vec!["children play"])]);
        let err = analyze_similarity(&corpus, "ID").unwrap_err();
        assert!(matches!(err, SimilarityError::Configuration(_)));
    }

    #[test]
    fn test_short_comparison_is_alignment_error() {
        let corpus = corpus(vec![("ID", vec!["satu", "dua"]), ("EN", vec!["one"])]);
        match analyze_similarity(&corpus, "ID").unwrap_err() {
            SimilarityError::Alignment {
                language,
                required,
                available,
            } => {
                assert_eq!(language, "EN");
                assert_eq!(required, 2);
                assert_eq!(available, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extra_comparison_sentences_ignored() {
        let corpus = corpus(vec![("ID", vec!["satu"]), ("EN", vec!["one", "two"])]);
        let result = analyze_similarity(&corpus, "ID").unwrap();
        assert_eq!(result.get("EN").unwrap().len(), 1);
    }

    #[test]
    fn test_reference_only_corpus() {
        let corpus = corpus(vec![("ID", vec!["satu"])]);
        let result = analyze_similarity(&corpus, "ID").unwrap();
        assert!(result.is_empty());
        assert_eq!(result.reference, "ID");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let corpus = corpus(vec![
            ("EN", vec!["the kids play", "they run around"]),
            ("ID", vec!["anak-anak bermain", "mereka berlari-lari"]),
            ("MS", vec!["kanak-kanak bermain", "mereka berlari-lari"]),
            ("JV", vec!["bocah-bocah dolanan", "dheweke mlayu-mlayu"]),
        ]);

        let parallel = SimilarityAnalyzer::new(AnalysisConfig::with_reference("ID"))
            .unwrap()
            .analyze(&corpus)
            .unwrap();
        let sequential = SimilarityAnalyzer::new(AnalysisConfig {
            parallel: false,
            ..AnalysisConfig::with_reference("ID")
        })
        .unwrap()
        .analyze(&corpus)
        .unwrap();

        assert_eq!(parallel, sequential);
        let order: Vec<_> = parallel.languages.iter().map(|l| l.language.as_str()).collect();
        assert_eq!(order, vec!["EN", "MS", "JV"]);
    }

    #[test]
    fn test_first_misaligned_language_reported() {
        let corpus = corpus(vec![
            ("ID", vec!["satu", "dua", "tiga"]),
            ("EN", vec!["one", "two", "three"]),
            ("MS", vec!["satu"]),
            ("JV", vec!["siji", "loro"]),
            ("SU", vec![]),
        ]);

        for parallel in [true, false] {
            for _ in 0..20 {
                let analyzer = SimilarityAnalyzer::new(AnalysisConfig {
                    parallel,
                    ..AnalysisConfig::with_reference("ID")
                })
                .unwrap();
                match analyzer.analyze(&corpus).unwrap_err() {
                    SimilarityError::Alignment { language, .. } => assert_eq!(language, "MS"),
                    other => panic!("unexpected error: {other}"),
                }
            }
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalysisConfig {
            precision: 42,
            ..AnalysisConfig::default()
        };
        assert!(SimilarityAnalyzer::new(config).is_err());
    }
}
