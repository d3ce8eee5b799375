use crate::matrix::DocumentFrequency;

/// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`.
///
/// Finite and at least 1 for every `df <= n`, including terms present in
/// every document.
pub fn smoothed_idf(df: usize, doc_count: usize) -> f64 {
    ((1 + doc_count) as f64 / (1 + df) as f64).ln() + 1.0
}

pub fn calculate_idf(df: &DocumentFrequency, doc_count: usize) -> Vec<f64> {
    df.as_slice()
        .iter()
        .map(|&df| smoothed_idf(df, doc_count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_in_every_document() {
        assert!((smoothed_idf(3, 3) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rare_terms_weigh_more() {
        assert!(smoothed_idf(1, 10) > smoothed_idf(5, 10));
        assert!((smoothed_idf(1, 3) - (2.0f64.ln() + 1.0)).abs() < 1e-12);
    }
}
