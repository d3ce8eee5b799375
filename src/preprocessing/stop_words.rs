use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config;
use crate::error::{Error, Result};

/// Closed set of function words excluded from indexing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Bundled English list.
    pub fn english() -> Self {
        Self::parse(config::DEFAULT_STOP_WORDS)
    }

    /// One word per line; blank lines ignored, entries lowercased.
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();
        Self { words }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::StopWords {
            path: path.display().to_string(),
            source,
        })?;
        let stop_words = Self::parse(&content);
        tracing::debug!(path = %path.display(), count = stop_words.len(), "Loaded stop words");
        Ok(stop_words)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
