//! Stemming capability used by the normalizer.
//!
//! A stemmer is a pure `&str -> String` mapping with no state shared between
//! calls, so any implementation can be swapped in without touching the
//! vocabulary or the encoders.

mod porter;

use std::fmt;
use std::str::FromStr;

use rust_stemmers::Algorithm;

use crate::error::Error;

pub use porter::porter_stem;

pub trait Stemmer: Send + Sync {
    fn name(&self) -> &'static str;

    fn stem(&self, token: &str) -> String;
}

/// English Snowball ("Porter2") stemmer.
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn english() -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SnowballStemmer(english)")
    }
}

impl Stemmer for SnowballStemmer {
    fn name(&self) -> &'static str {
        "snowball"
    }

    fn stem(&self, token: &str) -> String {
        self.inner.stem(token).into_owned()
    }
}

/// Classic Porter (1980) stemmer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PorterStemmer;

impl Stemmer for PorterStemmer {
    fn name(&self) -> &'static str {
        "porter"
    }

    fn stem(&self, token: &str) -> String {
        porter_stem(token)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StemmerKind {
    #[default]
    Snowball,
    Porter,
}

impl StemmerKind {
    pub fn build(self) -> Box<dyn Stemmer> {
        match self {
            StemmerKind::Snowball => Box::new(SnowballStemmer::english()),
            StemmerKind::Porter => Box::new(PorterStemmer),
        }
    }
}

impl FromStr for StemmerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snowball" | "english" => Ok(StemmerKind::Snowball),
            "porter" => Ok(StemmerKind::Porter),
            other => Err(Error::UnknownStemmer(other.to_string())),
        }
    }
}
