//! Python bindings via PyO3.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::analyzer::SimilarityAnalyzer;
use crate::config::AnalysisConfig;
use crate::corpus::Corpus;
use crate::error::SimilarityError;
use crate::lexical::{batch_lexical_similarity, edit_distance, lexical_similarity};
use crate::reduplication::{classify, strip_punctuation};
use crate::structural::structural_similarity;

impl From<SimilarityError> for PyErr {
    fn from(err: SimilarityError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

// ============================================================================
// SCORING FUNCTIONS
// ============================================================================

#[pyfunction]
#[pyo3(name = "edit_distance")]
fn py_edit_distance(s1: &str, s2: &str) -> PyResult<usize> {
    Ok(edit_distance(s1, s2))
}

#[pyfunction]
#[pyo3(name = "lexical_similarity")]
fn py_lexical_similarity(s1: &str, s2: &str) -> PyResult<f64> {
    Ok(lexical_similarity(s1, s2))
}

#[pyfunction]
#[pyo3(name = "batch_lexical_similarity")]
fn py_batch_lexical_similarity(pairs: Vec<(String, String)>) -> PyResult<Vec<f64>> {
    Ok(batch_lexical_similarity(&pairs))
}

#[pyfunction]
#[pyo3(name = "structural_similarity")]
fn py_structural_similarity(s1: &str, s2: &str) -> PyResult<f64> {
    Ok(structural_similarity(s1, s2))
}

/// Category name of a word, lowercased and stripped of punctuation first
#[pyfunction]
#[pyo3(name = "classify_reduplication")]
fn py_classify_reduplication(word: &str) -> PyResult<String> {
    let token = word.to_lowercase();
    Ok(classify(strip_punctuation(&token)).as_str().to_string())
}

// ============================================================================
// ANALYSIS
// ============================================================================

/// Scores per comparison language as `(lexical, structural)` tuples, rounded
#[pyfunction]
#[pyo3(name = "analyze_similarity", signature = (corpus, reference = "ID", precision = 3))]
fn py_analyze_similarity(
    corpus: Vec<(String, Vec<String>)>,
    reference: &str,
    precision: u32,
) -> PyResult<Vec<(String, Vec<(f64, f64)>)>> {
    let corpus: Corpus = corpus.into_iter().collect();
    let config = AnalysisConfig {
        precision,
        ..AnalysisConfig::with_reference(reference)
    };

    let result = SimilarityAnalyzer::new(config)?
        .analyze(&corpus)?
        .rounded(precision);

    Ok(result
        .languages
        .into_iter()
        .map(|entry| {
            let scores = entry
                .scores
                .iter()
                .map(|s| (s.lexical, s.structural))
                .collect();
            (entry.language, scores)
        })
        .collect())
}

// ============================================================================
// MODULE DEFINITION
// ============================================================================

#[pymodule]
fn redupsim_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_edit_distance, m)?)?;
    m.add_function(wrap_pyfunction!(py_lexical_similarity, m)?)?;
    m.add_function(wrap_pyfunction!(py_batch_lexical_similarity, m)?)?;
    m.add_function(wrap_pyfunction!(py_structural_similarity, m)?)?;
    m.add_function(wrap_pyfunction!(py_classify_reduplication, m)?)?;
    m.add_function(wrap_pyfunction!(py_analyze_similarity, m)?)?;

    Ok(())
}
