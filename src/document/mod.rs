pub mod parser;

use serde::{Deserialize, Serialize};

/// One line of the submitted corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// 1-based position among the non-blank lines.
    pub ordinal: usize,
    pub text: String,
}

impl Document {
    pub fn new(ordinal: usize, text: impl Into<String>) -> Self {
        Self {
            ordinal,
            text: text.into(),
        }
    }
}
