//! Error types for quote ingestion

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for ingestion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ingestion errors
#[derive(Debug, Error)]
pub enum Error {
    /// File extension does not map to any registered format
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Malformed entry in a strict format; fails the whole file
    #[error("failed to parse '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    /// File-level I/O failure, tagged with the offending path
    #[error("io error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a parse error for a file
    pub fn parse(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Create an I/O error tagged with the offending path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
