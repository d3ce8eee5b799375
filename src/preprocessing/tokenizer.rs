use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::config;
use crate::preprocessing::StopWords;
use crate::stemmer::{SnowballStemmer, Stemmer};

static LETTER_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+").expect("valid regex literal"));

/// Turns raw text into root tokens.
///
/// Pipeline: lowercase → non-letters to spaces → split on whitespace
///           → drop single letters → remove stop words → stem
pub struct Normalizer {
    stop_words: StopWords,
    stemmer: Box<dyn Stemmer>,
    min_len: usize,
}

impl Normalizer {
    pub fn new(stop_words: StopWords, stemmer: Box<dyn Stemmer>) -> Self {
        Self {
            stop_words,
            stemmer,
            min_len: config::MIN_TOKEN_LEN,
        }
    }

    /// English stop words and the Snowball stemmer.
    pub fn english() -> Self {
        Self::new(StopWords::english(), Box::new(SnowballStemmer::english()))
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn stemmer_name(&self) -> &'static str {
        self.stemmer.name()
    }

    pub fn min_token_len(&self) -> usize {
        self.min_len
    }

    /// Normalized stems in input order, duplicates kept.
    ///
    /// ```
    /// use tfidf_search::Normalizer;
    ///
    /// let tokens = Normalizer::english().normalize("The dog and the cat play together.");
    /// assert_eq!(tokens, vec!["dog", "cat", "play"]);
    /// ```
    pub fn normalize(&self, text: &str) -> Vec<String> {
        self.normalize_iter(text).collect()
    }

    /// Lazy form of [`normalize`](Self::normalize): each whitespace-separated
    /// word is lowercased and split into `[a-z]` runs only when the iterator
    /// reaches it, so a caller that stops early never touches the rest.
    pub fn normalize_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.split_whitespace()
            .flat_map(|word| {
                let lowered = word.to_lowercase();
                LETTER_RUNS
                    .find_iter(&lowered)
                    .map(|m| m.as_str().to_string())
                    .collect::<Vec<_>>()
            })
            .filter(move |t| t.len() >= self.min_len)
            .filter(move |t| !self.stop_words.contains(t))
            .map(move |t| self.stemmer.stem(&t))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("stop_words", &self.stop_words.len())
            .field("stemmer", &self.stemmer.name())
            .field("min_len", &self.min_len)
            .finish()
    }
}
