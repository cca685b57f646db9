//! Word-processor parser: one quote per paragraph

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::Quote;

use super::parser::QuoteParser;

/// Parser for .docx documents with one `body - author` paragraph per quote.
///
/// Paragraphs that are empty after trimming are skipped; a non-empty
/// paragraph that does not split cleanly fails the whole file, same as the
/// text format.
pub struct DocxParser;

impl QuoteParser for DocxParser {
    fn parse(&self, path: &Path) -> Result<Vec<Quote>> {
        let data = fs::read(path).map_err(|e| Error::io(path, e))?;
        let doc = docx_rs::read_docx(&data).map_err(|e| Error::parse(path, e.to_string()))?;

        let mut quotes = Vec::new();
        let mut paragraph_idx = 0usize;
        for child in doc.document.children {
            let docx_rs::DocumentChild::Paragraph(paragraph) = child else {
                continue;
            };
            paragraph_idx += 1;

            let mut text = String::new();
            for child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for child in run.children {
                        if let docx_rs::RunChild::Text(t) = child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }

            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            let quote = Quote::from_hyphen_line(text).ok_or_else(|| {
                Error::parse(
                    path,
                    format!(
                        "paragraph {paragraph_idx}: expected exactly one 'body - author' separator"
                    ),
                )
            })?;
            quotes.push(quote);
        }

        tracing::debug!(path = %path.display(), count = quotes.len(), "parsed docx file");
        Ok(quotes)
    }
}
