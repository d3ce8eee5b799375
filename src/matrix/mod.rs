pub mod idf;
pub mod norm;
pub mod vocabulary;

pub use vocabulary::{DocumentFrequency, Vocabulary, build_vocabulary};

use serde::Serialize;

/// Dense document × term weights. Every row is unit length or all zeros.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TfIdfMatrix {
    rows: Vec<Vec<f64>>,
    idf: Vec<f64>,
}

impl TfIdfMatrix {
    /// Encodes every tokenized document against a frozen vocabulary.
    /// The corpus size is the number of rows in `documents`.
    pub fn build<S: AsRef<str>>(
        documents: &[Vec<S>],
        vocabulary: &Vocabulary,
        df: &DocumentFrequency,
    ) -> Self {
        let idf = idf::calculate_idf(df, documents.len());
        let rows = documents
            .iter()
            .map(|tokens| weigh_terms(tokens, vocabulary, &idf))
            .collect();

        Self { rows, idf }
    }

    pub fn row(&self, doc_index: usize) -> Option<&[f64]> {
        self.rows.get(doc_index).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn n_terms(&self) -> usize {
        self.idf.len()
    }
}

/// Raw count × IDF for each in-vocabulary token, then L2-normalized.
/// Tokens outside the vocabulary are ignored.
pub fn weigh_terms<S: AsRef<str>>(tokens: &[S], vocabulary: &Vocabulary, idf: &[f64]) -> Vec<f64> {
    let mut weights = vec![0.0; vocabulary.len()];

    for token in tokens {
        if let Some(term_index) = vocabulary.index_of(token.as_ref()) {
            weights[term_index] += 1.0;
        }
    }
    for (weight, idf) in weights.iter_mut().zip(idf) {
        *weight *= idf;
    }

    norm::normalize(&mut weights);
    weights
}
