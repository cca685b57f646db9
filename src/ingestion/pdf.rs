//! PDF parser: text extraction via the external pdftotext tool

use std::fs;
use std::path::Path;
use std::process::Command;

use crate::config::PdfExtractConfig;
use crate::error::{Error, Result};
use crate::types::Quote;

use super::parser::QuoteParser;

/// Parser for PDFs, delegating text extraction to `pdftotext`.
///
/// PDF text comes out of a lossy rendering pipeline, so this variant is
/// lenient where the others are strict: lines that do not look like
/// `body - author` are extraction noise and are skipped, and a missing or
/// failing extraction tool degrades to an empty result with a warning
/// instead of failing the call.
pub struct PdfParser {
    config: PdfExtractConfig,
}

impl PdfParser {
    /// Create a parser using the given extraction settings
    pub fn new(config: PdfExtractConfig) -> Self {
        Self { config }
    }
}

impl QuoteParser for PdfParser {
    fn parse(&self, path: &Path) -> Result<Vec<Quote>> {
        // Scratch dir is removed on drop, covering every exit path below.
        let scratch = tempfile::tempdir().map_err(|e| Error::io(path, e))?;
        let out_path = scratch.path().join("extracted.txt");

        let output = match Command::new(&self.config.pdftotext_bin)
            .arg(path)
            .arg(&out_path)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(
                    tool = %self.config.pdftotext_bin,
                    path = %path.display(),
                    "pdf extraction tool unavailable, returning no quotes: {e}"
                );
                return Ok(Vec::new());
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!(
                path = %path.display(),
                status = ?output.status.code(),
                "pdftotext failed, returning no quotes: {}",
                stderr.trim()
            );
            return Ok(Vec::new());
        }

        let text = fs::read_to_string(&out_path).map_err(|e| Error::io(&out_path, e))?;
        let quotes = quotes_from_extracted(&text);

        tracing::debug!(path = %path.display(), count = quotes.len(), "parsed pdf file");
        Ok(quotes)
    }
}

/// Keep exactly the lines that split into two non-empty parts on `" - "`.
///
/// Extraction artifacts such as page numbers or running headers do not match
/// that shape and are dropped without being counted as errors.
fn quotes_from_extracted(text: &str) -> Vec<Quote> {
    text.lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.trim().split(" - ").collect();
            if parts.len() == 2 {
                Quote::new(parts[0], parts[1])
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracted_lines_are_filtered_not_fatal() {
        let text = "Woof - A Dog\nPage 1\n\nTreats. Now. - Another Dog\nDogQuotes\n";
        let quotes = quotes_from_extracted(text);

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].body(), "Woof");
        assert_eq!(quotes[0].author(), "A Dog");
        assert_eq!(quotes[1].author(), "Another Dog");
    }

    #[test]
    fn test_line_with_two_tokens_is_skipped() {
        let quotes = quotes_from_extracted("a - b - c\n");
        assert!(quotes.is_empty());
    }

    #[test]
    fn test_missing_tool_degrades_to_empty_result() {
        let parser = PdfParser::new(PdfExtractConfig {
            pdftotext_bin: "definitely-not-a-real-extractor".to_string(),
        });
        let quotes = parser.parse(Path::new("whatever.pdf")).unwrap();
        assert!(quotes.is_empty());
    }
}
