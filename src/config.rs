//! Configuration for the ingestion subsystem

use serde::{Deserialize, Serialize};

/// Settings for the external PDF text-extraction tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfExtractConfig {
    /// Binary invoked to render a PDF as plain text (default: pdftotext)
    pub pdftotext_bin: String,
}

impl Default for PdfExtractConfig {
    fn default() -> Self {
        Self {
            pdftotext_bin: "pdftotext".to_string(),
        }
    }
}
