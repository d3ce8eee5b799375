use std::collections::HashSet;

use indexmap::IndexSet;

/// Distinct terms in first-seen order; a term's position is its column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: IndexSet<String>,
}

impl Vocabulary {
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Number of documents containing each vocabulary term at least once,
/// indexed by column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFrequency {
    counts: Vec<usize>,
}

impl DocumentFrequency {
    pub fn as_slice(&self) -> &[usize] {
        &self.counts
    }
}

/// Single pass over the tokenized corpus.
pub fn build_vocabulary<S: AsRef<str>>(documents: &[Vec<S>]) -> (Vocabulary, DocumentFrequency) {
    let mut terms = IndexSet::new();
    let mut counts = Vec::new();

    for tokens in documents {
        let mut seen = HashSet::new();
        for token in tokens {
            let token = token.as_ref();
            let index = match terms.get_index_of(token) {
                Some(index) => index,
                None => {
                    counts.push(0);
                    terms.insert_full(token.to_string()).0
                }
            };
            if seen.insert(index) {
                counts[index] += 1;
            }
        }
    }

    (Vocabulary { terms }, DocumentFrequency { counts })
}
