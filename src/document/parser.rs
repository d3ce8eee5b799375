use std::io::Read;

use crate::document::Document;
use crate::error::{Error, Result};

/// Reads UTF-8 text, failing once more than `limit` bytes have arrived.
pub fn read_bounded<R: Read>(reader: R, limit: usize) -> Result<String> {
    let mut content = String::new();
    reader
        .take((limit as u64).saturating_add(1))
        .read_to_string(&mut content)?;
    if content.len() > limit {
        return Err(Error::InputTooLarge {
            bytes: content.len(),
            limit,
        });
    }
    Ok(content)
}

/// Splits a multi-line block into documents, one per non-blank line.
pub fn parse_block(content: &str) -> Vec<Document> {
    parse_lines(content.lines())
}

/// Trims every line, drops the blank ones and numbers the rest from 1.
pub fn parse_lines<I, S>(lines: I) -> Vec<Document>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut documents = Vec::new();

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        documents.push(Document::new(documents.len() + 1, line));
    }

    documents
}
