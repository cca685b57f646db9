//! quote-engine: format-dispatching quote ingestion
//!
//! This crate routes quote source files (txt, csv, docx, pdf) to the parser
//! responsible for their format and normalizes every source into uniform
//! [`Quote`] records. Adding a format means implementing
//! [`ingestion::QuoteParser`] and registering it; the dispatch logic itself
//! never changes.

pub mod config;
pub mod error;
pub mod ingestion;
pub mod types;

pub use config::PdfExtractConfig;
pub use error::{Error, Result};
pub use ingestion::{Format, Ingestor, IngestorRegistry, QuoteParser};
pub use types::Quote;
