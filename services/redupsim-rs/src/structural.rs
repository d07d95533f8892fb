//! Structural similarity from positional reduplication category matches.

use crate::reduplication::extract_reduplicated_words;
use crate::types::ReduplicatedWord;

/// Similarity in `[0, 1]` of how two sentences use reduplicated forms.
///
/// The i-th reduplicated word of one sentence is compared with the i-th of
/// the other by category only; the longer sequence is the denominator, so
/// missing and extra occurrences both cost.
pub fn structural_similarity(s1: &str, s2: &str) -> f64 {
    let words_a = extract_reduplicated_words(s1);
    let words_b = extract_reduplicated_words(s2);
    sequence_similarity(&words_a, &words_b)
}

/// Positional category agreement between two extracted sequences
pub fn sequence_similarity(a: &[ReduplicatedWord], b: &[ReduplicatedWord]) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let matches = a
        .iter()
        .zip(b.iter())
        .filter(|(x, y)| x.category == y.category)
        .count();

    matches as f64 / a.len().max(b.len()) as f64
}
