//! CSV parser: one quote per (body, author) row

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{Error, Result};
use crate::types::Quote;

use super::parser::QuoteParser;

/// Parser for comma-separated files with exactly two columns: body, author.
///
/// Every row is data; there is no header convention in the quote files.
/// Like the text format this is strict: a row with the wrong field count
/// fails the whole file.
pub struct CsvParser;

impl QuoteParser for CsvParser {
    fn parse(&self, path: &Path) -> Result<Vec<Quote>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| csv_error(path, e))?;

        let mut quotes = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result.map_err(|e| csv_error(path, e))?;
            if record.len() != 2 {
                return Err(Error::parse(
                    path,
                    format!("row {}: expected 2 fields (body, author), got {}", idx + 1, record.len()),
                ));
            }
            let quote = Quote::new(&record[0], &record[1]).ok_or_else(|| {
                Error::parse(path, format!("row {}: empty body or author", idx + 1))
            })?;
            quotes.push(quote);
        }

        tracing::debug!(path = %path.display(), count = quotes.len(), "parsed csv file");
        Ok(quotes)
    }
}

/// Split a csv crate error into the I/O and malformed-content halves
fn csv_error(path: &Path, err: csv::Error) -> Error {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => Error::io(path, source),
        _ => Error::parse(path, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_fixture(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_parses_rows_in_order() {
        let (_dir, path) = write_fixture(
            "\"Be water, my friend\",Bruce Lee\nChase the mailman,A Dog\n",
        );
        let quotes = CsvParser.parse(&path).unwrap();

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].body(), "Be water, my friend");
        assert_eq!(quotes[0].author(), "Bruce Lee");
        assert_eq!(quotes[1].body(), "Chase the mailman");
    }

    #[test]
    fn test_row_with_three_fields_fails_whole_parse() {
        let (_dir, path) = write_fixture("Be water,Bruce Lee,extra\n");
        let err = CsvParser.parse(&path).unwrap_err();

        match err {
            Error::Parse { message, .. } => {
                assert!(message.contains("row 1"));
                assert!(message.contains("got 3"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_row_with_empty_author_fails() {
        let (_dir, path) = write_fixture("Be water,\n");
        assert!(CsvParser.parse(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CsvParser.parse(Path::new("does-not-exist.csv")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
