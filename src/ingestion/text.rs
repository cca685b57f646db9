//! Delimited-text parser: one quote per line

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::Quote;

use super::parser::QuoteParser;

/// Parser for plain-text files with one `body - author` line per quote.
///
/// This format is operator-authored, so it is strict: a non-empty line that
/// does not split cleanly fails the whole file rather than being dropped.
pub struct TextParser;

impl QuoteParser for TextParser {
    fn parse(&self, path: &Path) -> Result<Vec<Quote>> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let mut quotes = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let quote = Quote::from_hyphen_line(line).ok_or_else(|| {
                Error::parse(
                    path,
                    format!("line {}: expected exactly one 'body - author' separator", idx + 1),
                )
            })?;
            quotes.push(quote);
        }

        tracing::debug!(path = %path.display(), count = quotes.len(), "parsed text file");
        Ok(quotes)
    }
}
