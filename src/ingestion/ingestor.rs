//! Dispatcher: the public entry point of the ingestion subsystem

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::Quote;

use super::format::{extension_token, Format};
use super::registry::IngestorRegistry;

/// Routes a file to the parser registered for its format.
///
/// Extension is the sole source of truth for format selection; there is no
/// content sniffing. The registry is immutable after construction, so one
/// `Ingestor` can serve independent `parse` calls from multiple threads.
pub struct Ingestor {
    registry: IngestorRegistry,
}

impl Ingestor {
    /// Create a dispatcher over the default registry
    pub fn new() -> Self {
        Self::with_registry(IngestorRegistry::default())
    }

    /// Create a dispatcher over a custom-built registry
    pub fn with_registry(registry: IngestorRegistry) -> Self {
        Self { registry }
    }

    /// Parse one file into its ordered quote records.
    ///
    /// Fails with [`Error::UnsupportedFormat`] when the extension names no
    /// registered format; otherwise the per-format parser's result is
    /// propagated unchanged.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<Vec<Quote>> {
        let path = path.as_ref();
        let token = extension_token(path);

        let format = match Format::from_token(&token) {
            Some(format) if self.registry.supports(&token) => format,
            _ => return Err(Error::UnsupportedFormat(token)),
        };
        let parser = self
            .registry
            .parser_for(format)
            .ok_or_else(|| Error::UnsupportedFormat(token))?;

        parser.parse(path)
    }

    /// Parse a batch of files, concatenating records in input order.
    ///
    /// The first per-file failure fails the whole batch; callers wanting
    /// partial tolerance loop over [`parse`](Self::parse) themselves.
    pub fn parse_all<I, P>(&self, paths: I) -> Result<Vec<Quote>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut quotes = Vec::new();
        for path in paths {
            quotes.extend(self.parse(path)?);
        }
        Ok(quotes)
    }
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_unsupported_extension_names_the_token() {
        let ingestor = Ingestor::new();
        let err = ingestor.parse("notes.md").unwrap_err();

        match err {
            Error::UnsupportedFormat(token) => assert_eq!(token, "md"),
            other => panic!("expected unsupported format, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let ingestor = Ingestor::new();
        assert!(matches!(
            ingestor.parse("no_extension"),
            Err(Error::UnsupportedFormat(token)) if token.is_empty()
        ));
    }

    #[test]
    fn test_extension_lookup_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.TXT");
        fs::write(&path, "Woof - A Dog\n").unwrap();

        let quotes = Ingestor::new().parse(&path).unwrap();
        assert_eq!(quotes.len(), 1);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.txt");
        fs::write(&path, "Woof - A Dog\nTreats now - Another Dog\n").unwrap();

        let ingestor = Ingestor::new();
        let first = ingestor.parse(&path).unwrap();
        let second = ingestor.parse(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_all_concatenates_in_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("a.txt");
        let csv = dir.path().join("b.csv");
        fs::write(&txt, "Woof - A Dog\n").unwrap();
        fs::write(&csv, "Treats now,Another Dog\n").unwrap();

        let quotes = Ingestor::new().parse_all([&txt, &csv]).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].author(), "A Dog");
        assert_eq!(quotes[1].author(), "Another Dog");
    }

    #[test]
    fn test_parse_all_fails_on_first_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let bad = dir.path().join("bad.txt");
        fs::write(&good, "Woof - A Dog\n").unwrap();
        fs::write(&bad, "malformed line\n").unwrap();

        assert!(Ingestor::new().parse_all([&good, &bad]).is_err());
    }
}
