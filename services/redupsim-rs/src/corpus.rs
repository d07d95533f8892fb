//! Parallel corpus: language code to index-aligned sentence lists.
//!
//! Text format is one record per line, `<code>,<sentence>`, split at the
//! first comma. Lines without a comma are skipped.

use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, SimilarityError};

/// Sentences grouped by language, languages kept in first-seen order
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    languages: Vec<(String, Vec<String>)>,
    index: FxHashMap<String, usize>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sentence to a language, registering the language if new
    pub fn push(&mut self, language: &str, sentence: String) {
        let idx = self.slot(language);
        self.languages[idx].1.push(sentence);
    }

    /// Append a batch of sentences to a language
    pub fn extend<I>(&mut self, language: &str, sentences: I)
    where
        I: IntoIterator<Item = String>,
    {
        let idx = self.slot(language);
        self.languages[idx].1.extend(sentences);
    }

    fn slot(&mut self, language: &str) -> usize {
        if let Some(&idx) = self.index.get(language) {
            return idx;
        }
        let idx = self.languages.len();
        self.languages.push((language.to_string(), Vec::new()));
        self.index.insert(language.to_string(), idx);
        idx
    }

    pub fn get(&self, language: &str) -> Option<&[String]> {
        self.index
            .get(language)
            .map(|&idx| self.languages[idx].1.as_slice())
    }

    pub fn contains(&self, language: &str) -> bool {
        self.index.contains_key(language)
    }

    /// Languages with their sentences, in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.languages
            .iter()
            .map(|(code, sentences)| (code.as_str(), sentences.as_slice()))
    }

    pub fn language_codes(&self) -> Vec<&str> {
        self.languages.iter().map(|(code, _)| code.as_str()).collect()
    }

    /// Number of languages
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Parse corpus text already held in memory
    pub fn parse(text: &str) -> Self {
        let mut corpus = Self::new();
        for line in text.lines() {
            corpus.push_line(line);
        }
        corpus
    }

    /// Read a corpus line by line
    pub fn read_from<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut corpus = Self::new();
        for line in reader.lines() {
            corpus.push_line(&line?);
        }
        Ok(corpus)
    }

    /// Load a corpus file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let io_err = |source| SimilarityError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let corpus = Self::read_from(BufReader::new(file)).map_err(io_err)?;

        log::debug!(
            "loaded corpus from {}: {} languages",
            path.display(),
            corpus.len()
        );
        Ok(corpus)
    }

    fn push_line(&mut self, line: &str) {
        let Some((code, sentence)) = line.trim().split_once(',') else {
            log::trace!("skipping line without delimiter: {:?}", line);
            return;
        };
        self.push(code.trim(), sentence.trim().to_string());
    }
}

impl<L, S> FromIterator<(L, Vec<S>)> for Corpus
where
    L: AsRef<str>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (L, Vec<S>)>>(iter: T) -> Self {
        let mut corpus = Self::new();
        for (language, sentences) in iter {
            corpus.extend(language.as_ref(), sentences.into_iter().map(Into::into));
        }
        corpus
    }
}
