//! Character-level edit distance and lexical similarity.

use ndarray::Array2;
use rayon::prelude::*;

/// Levenshtein distance over Unicode scalar values with unit costs.
///
/// Fills the whole `(m+1) x (n+1)` table.
pub fn edit_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    levenshtein(&a, &b)
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    let len_a = a.len();
    let len_b = b.len();

    let mut dp = Array2::<usize>::zeros((len_a + 1, len_b + 1));

    for i in 0..=len_a {
        dp[[i, 0]] = i;
    }
    for j in 0..=len_b {
        dp[[0, j]] = j;
    }

    for i in 1..=len_a {
        for j in 1..=len_b {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };

            dp[[i, j]] = std::cmp::min(
                std::cmp::min(
                    dp[[i - 1, j]] + 1, // Deletion
                    dp[[i, j - 1]] + 1, // Insertion
                ),
                dp[[i - 1, j - 1]] + cost, // Substitution
            );
        }
    }

    dp[[len_a, len_b]]
}

/// Similarity in `[0, 1]` derived from the edit distance of two raw sentences
pub fn lexical_similarity(s1: &str, s2: &str) -> f64 {
    let max_len = s1.chars().count().max(s2.chars().count());
    if max_len == 0 {
        return 1.0; // Both empty = identical
    }

    let distance = edit_distance(s1, s2);
    1.0 - distance as f64 / max_len as f64
}

/// Batch compute lexical similarity for many sentence pairs (parallelized)
pub fn batch_lexical_similarity(pairs: &[(String, String)]) -> Vec<f64> {
    pairs
        .par_iter()
        .map(|(a, b)| lexical_similarity(a, b))
        .collect()
}
