//! Compile-time defaults for the retrieval engine and its shells.
//!
//! Runtime overrides (stop-word file, stemmer, token limit, bind address)
//! come from the command line in `main.rs`.

/// Candidate tokens shorter than this are dropped before stop-word filtering.
pub const MIN_TOKEN_LEN: usize = 2;

/// Upper bound on normalized tokens per run (all documents plus the query).
pub const MAX_TOTAL_TOKENS: usize = 200_000;

/// Upper bound on raw input bytes per run (all document texts plus the query),
/// checked before any tokenizing.
pub const MAX_INPUT_BYTES: usize = 4 * 1024 * 1024;

/// Maximum accepted JSON body for `POST /rank`.
pub const MAX_PAYLOAD_BYTES: usize = 2 * 1024 * 1024;

pub const DEFAULT_HOST: &str = "127.0.0.1";

pub const DEFAULT_PORT: u16 = 8080;

/// Decimal places used when the CLI prints weights.
pub const DISPLAY_PRECISION: usize = 3;

/// Stop-word list bundled with the binary.
pub const DEFAULT_STOP_WORDS: &str = include_str!("../stop_words/english.txt");
