//! Format identifiers derived from file extensions

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Supported source file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Delimited plain text, one quote per line
    Txt,
    /// Comma-separated rows of (body, author)
    Csv,
    /// Word-processor document, one quote per paragraph
    Docx,
    /// PDF, text-extracted via an external tool
    Pdf,
}

impl Format {
    /// Resolve a lowercase extension token to a format.
    ///
    /// Tokens are matched exactly; callers normalize case before lookup.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "txt" => Some(Self::Txt),
            "csv" => Some(Self::Csv),
            "docx" => Some(Self::Docx),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Derive the format from a path's extension, case-insensitively
    pub fn from_path(path: &Path) -> Option<Self> {
        Self::from_token(&extension_token(path))
    }

    /// The lowercase token naming this format
    pub fn token(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Csv => "csv",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Lowercased extension of a path; empty string when there is none
pub(crate) fn extension_token(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase()
}
