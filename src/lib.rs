//! Ranks a small corpus of short texts against a query with TF-IDF weights
//! and cosine similarity.
//!
//! ```
//! use tfidf_search::{Normalizer, Retriever};
//! use tfidf_search::document::parser::parse_block;
//!
//! let docs = parse_block("The dog barks loudly.\nThe cat meows at night.\nThe dog and the cat play together.");
//! let report = Retriever::new(Normalizer::english()).run(&docs, "Who is playing?").unwrap();
//! assert_eq!(report.best_match.ordinal, 3);
//! assert_eq!(report.matched_query_terms, vec!["play"]);
//! ```

pub mod api;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod preprocessing;
pub mod stemmer;

pub use document::Document;
pub use engine::{RankedDocument, RankingReport, Retriever, WeightTable};
pub use error::{Error, Result};
pub use preprocessing::{Normalizer, StopWords};
pub use stemmer::{Stemmer, StemmerKind};
