//! Quote ingestion pipeline with multi-format parsing

mod csv;
mod docx;
mod format;
mod ingestor;
mod parser;
mod pdf;
mod registry;
mod text;

pub use self::csv::CsvParser;
pub use docx::DocxParser;
pub use format::Format;
pub use ingestor::Ingestor;
pub use parser::QuoteParser;
pub use pdf::PdfParser;
pub use registry::IngestorRegistry;
pub use text::TextParser;
