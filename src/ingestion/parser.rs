//! The shared parsing contract implemented by every format

use std::path::Path;

use crate::error::Result;
use crate::types::Quote;

/// Per-format quote extraction.
///
/// Given a readable file path purported to match the parser's format, return
/// the quotes it contains in source order. File-level I/O failures surface as
/// [`crate::Error::Io`]; what happens on a malformed individual entry is a
/// per-format policy, but a parser never fabricates a record.
pub trait QuoteParser {
    /// Extract all quotes from the file at `path`
    fn parse(&self, path: &Path) -> Result<Vec<Quote>>;
}
