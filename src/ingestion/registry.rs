//! Registry mapping format identifiers to their parsers

use std::collections::HashMap;

use crate::config::PdfExtractConfig;

use super::csv::CsvParser;
use super::docx::DocxParser;
use super::format::Format;
use super::parser::QuoteParser;
use super::pdf::PdfParser;
use super::text::TextParser;

/// Lookup table from [`Format`] to the parser responsible for it.
///
/// Built once, read-only afterwards. Extending the supported formats means
/// one parser implementation plus one entry here; the dispatcher never
/// changes.
pub struct IngestorRegistry {
    parsers: HashMap<Format, Box<dyn QuoteParser + Send + Sync>>,
}

impl IngestorRegistry {
    /// Build the registry with all four format parsers
    pub fn new(pdf_config: PdfExtractConfig) -> Self {
        let mut parsers: HashMap<Format, Box<dyn QuoteParser + Send + Sync>> = HashMap::new();
        parsers.insert(Format::Txt, Box::new(TextParser));
        parsers.insert(Format::Csv, Box::new(CsvParser));
        parsers.insert(Format::Docx, Box::new(DocxParser));
        parsers.insert(Format::Pdf, Box::new(PdfParser::new(pdf_config)));
        Self { parsers }
    }

    /// Whether `token` names a registered format
    pub fn supports(&self, token: &str) -> bool {
        Format::from_token(token)
            .map(|format| self.parsers.contains_key(&format))
            .unwrap_or(false)
    }

    /// The parser registered for `format`.
    ///
    /// `None` means the caller skipped the [`supports`](Self::supports)
    /// check; the dispatcher always checks first.
    pub fn parser_for(&self, format: Format) -> Option<&(dyn QuoteParser + Send + Sync)> {
        self.parsers.get(&format).map(|parser| parser.as_ref())
    }
}

impl Default for IngestorRegistry {
    fn default() -> Self {
        Self::new(PdfExtractConfig::default())
    }
}
