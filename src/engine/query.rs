use crate::matrix::{self, Vocabulary};
use crate::preprocessing::Normalizer;

/// A held-out query projected into the corpus column space.
///
/// The query never touches the vocabulary or the document frequencies.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryVector {
    tokens: Vec<String>,
    weights: Vec<f64>,
}

impl QueryVector {
    /// Normalized query tokens, including those outside the vocabulary.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|&w| w == 0.0)
    }
}

pub fn encode_query(
    query: &str,
    normalizer: &Normalizer,
    vocabulary: &Vocabulary,
    idf: &[f64],
) -> QueryVector {
    encode_tokens(normalizer.normalize(query), vocabulary, idf)
}

/// Same weighting as the document rows, with the IDF frozen by
/// [`TfIdfMatrix::build`](crate::matrix::TfIdfMatrix::build).
pub fn encode_tokens(tokens: Vec<String>, vocabulary: &Vocabulary, idf: &[f64]) -> QueryVector {
    let weights = matrix::weigh_terms(&tokens, vocabulary, idf);
    QueryVector { tokens, weights }
}
