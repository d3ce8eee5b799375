use tfidf_search::document::parser::{parse_block, parse_lines};
use tfidf_search::matrix::norm::l2_norm;
use tfidf_search::{Error, Normalizer, Retriever, StemmerKind, StopWords};

const CORPUS: &str = "The dog barks loudly.\nThe cat meows at night.\nThe dog and the cat play together.";

fn retriever() -> Retriever {
    Retriever::new(Normalizer::english())
}

#[test]
fn test_playing_matches_the_playing_document() {
    let docs = parse_block(CORPUS);
    let report = retriever().run(&docs, "Who is playing?").unwrap();

    let table = &report.weight_matrix;
    let play = table.columns.iter().position(|t| t == "play").unwrap();
    assert_eq!(table.values[0][play], 0.0);
    assert_eq!(table.values[1][play], 0.0);
    assert!(table.values[2][play] > 0.0);

    assert_eq!(report.best_match.ordinal, 3);
    assert_eq!(report.best_match.text, "The dog and the cat play together.");
    assert!((report.best_match.score - 0.6809).abs() < 1e-3);
    for other in &report.ranked_results[1..] {
        assert!(report.best_match.score > other.score);
    }
    assert_eq!(report.matched_query_terms, vec!["play"]);
}

#[test]
fn test_vocabulary_in_first_seen_order() {
    let docs = parse_block(CORPUS);
    let report = retriever().run(&docs, "dog").unwrap();
    let columns = &report.weight_matrix.columns;

    assert_eq!(&columns[..2], &["dog".to_string(), "bark".to_string()]);
    assert_eq!(columns.last().map(String::as_str), Some("play"));
    assert_eq!(columns.len(), 7);
}

#[test]
fn test_no_shared_words_scores_zero() {
    let docs = parse_block("The cat sleeps on the sofa.");
    let report = retriever().run(&docs, "quantum physics").unwrap();

    assert_eq!(report.best_match.score, 0.0);
    assert_eq!(report.best_match.ordinal, 1);
    assert!(report.matched_query_terms.is_empty());
}

#[test]
fn test_blank_lines_are_not_documents() {
    let docs = parse_lines(["", "  ", "cat"]);
    assert_eq!(docs.len(), 1);

    let report = retriever().run(&docs, "cat").unwrap();
    assert_eq!(report.weight_matrix.columns, vec!["cat"]);
    assert_eq!(report.weight_matrix.rows, vec![1]);
    assert_eq!(report.best_match.score, 1.0);
}

#[test]
fn test_stop_word_query_scores_zero_everywhere() {
    let docs = parse_block(CORPUS);
    let report = retriever().run(&docs, "is at a").unwrap();

    assert!(report.ranked_results.iter().all(|r| r.score == 0.0));
    let order: Vec<usize> = report.ranked_results.iter().map(|r| r.ordinal).collect();
    assert_eq!(order, vec![1, 2, 3]);
    assert!(report.matched_query_terms.is_empty());
}

#[test]
fn test_all_documents_empty_after_normalization() {
    let docs = parse_block("the and\n123 !!\nis at");
    let report = retriever().run(&docs, "dog").unwrap();

    assert!(report.weight_matrix.columns.is_empty());
    assert!(report.weight_matrix.values.iter().all(Vec::is_empty));
    assert!(report.ranked_results.iter().all(|r| r.score == 0.0));
    assert_eq!(report.ranked_results.len(), 3);
}

#[test]
fn test_empty_corpus_is_rejected() {
    let docs = parse_block("\n   \n");
    assert!(matches!(retriever().run(&docs, "cat"), Err(Error::EmptyCorpus)));
}

#[test]
fn test_rows_are_unit_or_zero() {
    let docs = parse_block("dog dog cat\nthe a is\nbird\ncat bird fish");
    let report = retriever().run(&docs, "bird").unwrap();

    for row in &report.weight_matrix.values {
        let norm = l2_norm(row);
        assert!((norm - 1.0).abs() < 1e-9 || row.iter().all(|&w| w == 0.0));
    }
}

#[test]
fn test_runs_are_identical() {
    let docs = parse_block(CORPUS);
    let a = retriever().run(&docs, "dog cat night").unwrap();
    let b = retriever().run(&docs, "dog cat night").unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_porter_stemmer_pipeline() {
    let normalizer = Normalizer::new(StopWords::english(), StemmerKind::Porter.build());
    let docs = parse_block(CORPUS);
    let report = Retriever::new(normalizer).run(&docs, "Who is playing?").unwrap();

    assert_eq!(report.best_match.ordinal, 3);
    assert_eq!(report.matched_query_terms, vec!["plai"]);
}
