use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no documents to rank: enter at least one non-blank line")]
    EmptyCorpus,

    #[error("input produced more than {limit} tokens")]
    TokenLimit { limit: usize },

    #[error("input is {bytes} bytes, above the limit of {limit}")]
    InputTooLarge { bytes: usize, limit: usize },

    #[error("query vector has {found} dimensions but the matrix has {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("failed to read stop words from {path}: {source}")]
    StopWords {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown stemmer '{0}' (expected 'snowball' or 'porter')")]
    UnknownStemmer(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
