//! Full ranking run: normalize → vocabulary → TF-IDF → query → rank.
//!
//! Every call to [`Retriever::run`] builds its own vocabulary, document
//! frequencies, matrix and query vector; only the normalizer is shared.

pub mod query;
pub mod search;

use serde::Serialize;

use crate::config;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::matrix::{TfIdfMatrix, Vocabulary, build_vocabulary};
use crate::preprocessing::Normalizer;

pub use query::{QueryVector, encode_query};
pub use search::{cosine, rank};

#[derive(Debug)]
pub struct Retriever {
    normalizer: Normalizer,
    max_tokens: usize,
    max_bytes: usize,
}

/// Weight matrix labelled for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightTable {
    /// Document ordinals, one per row.
    pub rows: Vec<usize>,
    /// Vocabulary terms, one per column.
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedDocument {
    pub ordinal: usize,
    pub text: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingReport {
    pub weight_matrix: WeightTable,
    pub ranked_results: Vec<RankedDocument>,
    pub best_match: RankedDocument,
    /// Query stems present in the vocabulary with non-zero weight in the
    /// best document, in query order.
    pub matched_query_terms: Vec<String>,
}

impl Retriever {
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            max_tokens: config::MAX_TOTAL_TOKENS,
            max_bytes: config::MAX_INPUT_BYTES,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    pub fn run(&self, documents: &[Document], query: &str) -> Result<RankingReport> {
        if documents.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let bytes = query.len() + documents.iter().map(|d| d.text.len()).sum::<usize>();
        if bytes > self.max_bytes {
            tracing::warn!(bytes, limit = self.max_bytes, "Input size limit exceeded");
            return Err(Error::InputTooLarge {
                bytes,
                limit: self.max_bytes,
            });
        }

        let mut total = 0;
        let mut tokenized = Vec::with_capacity(documents.len());
        for doc in documents {
            let tokens = self.tokens_within_budget(&doc.text, total)?;
            total += tokens.len();
            tokenized.push(tokens);
        }

        let (vocabulary, df) = build_vocabulary(&tokenized);
        tracing::debug!(
            documents = documents.len(),
            tokens = total,
            terms = vocabulary.len(),
            "Vocabulary built"
        );

        let matrix = TfIdfMatrix::build(&tokenized, &vocabulary, &df);

        let query_tokens = self.tokens_within_budget(query, total)?;
        let query = query::encode_tokens(query_tokens, &vocabulary, matrix.idf());
        if query.is_zero() {
            tracing::debug!("Query shares no terms with the corpus");
        }

        let ranked = rank(&query, &matrix)?;

        let ranked_results: Vec<RankedDocument> = ranked
            .iter()
            .map(|&(doc_idx, score)| RankedDocument {
                ordinal: documents[doc_idx].ordinal,
                text: documents[doc_idx].text.clone(),
                score,
            })
            .collect();
        let (best_idx, _) = ranked[0];
        let best_match = ranked_results[0].clone();
        let matched_query_terms = matched_terms(&query, &vocabulary, &matrix, best_idx);

        Ok(RankingReport {
            weight_matrix: WeightTable {
                rows: documents.iter().map(|d| d.ordinal).collect(),
                columns: vocabulary.terms().map(String::from).collect(),
                values: matrix.rows().to_vec(),
            },
            ranked_results,
            best_match,
            matched_query_terms,
        })
    }

    /// Normalizes `text`, stopping one token past what is left of the budget.
    fn tokens_within_budget(&self, text: &str, used: usize) -> Result<Vec<String>> {
        let remaining = self.max_tokens.saturating_sub(used);
        let tokens: Vec<String> = self
            .normalizer
            .normalize_iter(text)
            .take(remaining.saturating_add(1))
            .collect();
        if tokens.len() > remaining {
            tracing::warn!(limit = self.max_tokens, "Token limit exceeded");
            return Err(Error::TokenLimit {
                limit: self.max_tokens,
            });
        }
        Ok(tokens)
    }
}

fn matched_terms(
    query: &QueryVector,
    vocabulary: &Vocabulary,
    matrix: &TfIdfMatrix,
    doc_idx: usize,
) -> Vec<String> {
    let Some(row) = matrix.row(doc_idx) else {
        return Vec::new();
    };
    query
        .tokens()
        .iter()
        .filter(|token| {
            vocabulary
                .index_of(token)
                .is_some_and(|term_idx| row[term_idx] > 0.0)
        })
        .cloned()
        .collect()
}
