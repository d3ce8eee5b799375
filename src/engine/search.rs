use crate::engine::query::QueryVector;
use crate::error::{Error, Result};
use crate::matrix::{TfIdfMatrix, norm};

/// Cosine similarity of two unit-or-zero vectors. Zero when either side is
/// the zero vector; clamped into `[0, 1]`.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let sim = norm::dot(a, b);
    if sim.is_finite() { sim.clamp(0.0, 1.0) } else { 0.0 }
}

/// Scores every document, best first. Equal scores keep document order.
///
/// Returns `(doc_index, score)` pairs with 0-based indices into the matrix rows.
pub fn rank(query: &QueryVector, matrix: &TfIdfMatrix) -> Result<Vec<(usize, f64)>> {
    if query.weights().len() != matrix.n_terms() {
        return Err(Error::DimensionMismatch {
            expected: matrix.n_terms(),
            found: query.weights().len(),
        });
    }

    let mut similarities: Vec<(usize, f64)> = matrix
        .rows()
        .iter()
        .enumerate()
        .map(|(doc_idx, row)| (doc_idx, cosine(query.weights(), row)))
        .collect();

    // sort_by is stable
    similarities.sort_by(|a, b| b.1.total_cmp(&a.1));
    Ok(similarities)
}
