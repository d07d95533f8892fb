//! Reduplication pattern classification and extraction.
//!
//! A token is considered reduplicated when it consists of two word-character
//! halves joined by a single hyphen and the halves are equal, possibly after
//! removing one affix character from the front of the first half and/or the
//! end of the second half.

use regex::Regex;
use std::sync::OnceLock;

use crate::types::{ReduplicatedWord, ReduplicationCategory};

static TWO_HALVES: OnceLock<Regex> = OnceLock::new();

fn two_halves() -> &'static Regex {
    TWO_HALVES.get_or_init(|| Regex::new(r"^(\w+)-(\w+)$").expect("static pattern is valid"))
}

/// Lowercase a sentence before tokenization
pub fn normalize_sentence(sentence: &str) -> String {
    sentence.to_lowercase()
}

/// Strip leading and trailing ASCII punctuation from a token
pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_ascii_punctuation())
}

/// Classify a normalized token. First matching rule wins:
/// pure, derived-first, derived-last, derived-first-last.
pub fn classify(token: &str) -> ReduplicationCategory {
    let Some(caps) = two_halves().captures(token) else {
        return ReduplicationCategory::None;
    };
    let (part1, part2) = (&caps[1], &caps[2]);

    if part1 == part2 {
        ReduplicationCategory::Pure
    } else if drop_first(part1) == part2 {
        ReduplicationCategory::DerivedFirst
    } else if part1 == drop_last(part2) {
        ReduplicationCategory::DerivedLast
    } else if drop_first(part1) == drop_last(part2) {
        ReduplicationCategory::DerivedFirstLast
    } else {
        ReduplicationCategory::None
    }
}

fn drop_first(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.as_str()
}

fn drop_last(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next_back();
    chars.as_str()
}

/// Reduplicated words of a sentence, left to right
pub fn extract_reduplicated_words(sentence: &str) -> Vec<ReduplicatedWord> {
    normalize_sentence(sentence)
        .split_whitespace()
        .filter_map(|word| {
            let category = classify(strip_punctuation(word));
            category
                .is_reduplicated()
                .then(|| ReduplicatedWord::new(word.to_string(), category))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ReduplicationCategory::*;

    #[test]
    fn test_pure() {
        assert_eq!(classify("anak-anak"), Pure);
        assert_eq!(classify("lari-lari"), Pure);
    }

    #[test]
    fn test_derived() {
        assert_eq!(classify("xlari-lari"), DerivedFirst);
        assert_eq!(classify("lari-larix"), DerivedLast);
        assert_eq!(classify("xlari-larix"), DerivedFirstLast);
    }

    #[test]
    fn test_not_reduplicated() {
        assert_eq!(classify("kucing"), None);
        assert_eq!(classify("a-b-c"), None);
        assert_eq!(classify("berlari-lari"), None);
        assert_eq!(classify("-"), None);
        assert_eq!(classify("anak-"), None);
        assert_eq!(classify("-anak"), None);
        assert_eq!(classify("an.ak-an.ak"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_single_char_halves() {
        // both trimmed halves are empty
        assert_eq!(classify("a-b"), DerivedFirstLast);
        assert_eq!(classify("a-a"), Pure);
    }

    #[test]
    fn test_word_characters_include_digits_and_underscore() {
        assert_eq!(classify("a_1-a_1"), Pure);
        assert_eq!(classify("x2-2"), DerivedFirst);
    }

    #[test]
    fn test_non_ascii_affixes() {
        assert_eq!(classify("éanak-anak"), DerivedFirst);
        assert_eq!(classify("anak-anaké"), DerivedLast);
    }

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("\"anak-anak,\""), "anak-anak");
        assert_eq!(strip_punctuation("(lari-lari)."), "lari-lari");
        assert_eq!(strip_punctuation("--"), "");
        assert_eq!(strip_punctuation("kata"), "kata");
    }

    #[test]
    fn test_extract_keeps_order() {
        let words = extract_reduplicated_words("Anak-anak berlari-lari, lalu xmain-main.");
        let categories: Vec<_> = words.iter().map(|w| w.category).collect();
        assert_eq!(categories, vec![Pure, DerivedFirst]);
        assert_eq!(words[0].word, "anak-anak");
        assert_eq!(words[1].word, "xmain-main.");
    }

    #[test]
    fn test_extract_none() {
        assert!(extract_reduplicated_words("kucing duduk").is_empty());
        assert!(extract_reduplicated_words("").is_empty());
    }
}
