//! Normalized quote record produced by ingestion

use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized quote: body text plus attribution.
///
/// Both fields are non-empty and trimmed of surrounding whitespace; a record
/// with either side empty is not constructible. Records are immutable after
/// construction and owned by the caller that requested ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    body: String,
    author: String,
}

impl Quote {
    /// Build a quote from raw body and author text.
    ///
    /// Returns `None` if either side is empty after trimming.
    pub fn new(body: impl AsRef<str>, author: impl AsRef<str>) -> Option<Self> {
        let body = body.as_ref().trim();
        let author = author.as_ref().trim();
        if body.is_empty() || author.is_empty() {
            return None;
        }
        Some(Self {
            body: body.to_string(),
            author: author.to_string(),
        })
    }

    /// Split a source line on `-` into body and author.
    ///
    /// The line must contain exactly one hyphen with non-empty text on both
    /// sides. A body that itself contains a hyphen therefore fails the split;
    /// that is the documented shape of the line-oriented quote formats.
    pub fn from_hyphen_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split('-').collect();
        if parts.len() != 2 {
            return None;
        }
        Self::new(parts[0], parts[1])
    }

    /// Quote body, attribution-free
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Attribution
    pub fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.body, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_both_sides() {
        let quote = Quote::new("  Stay hungry ", " Steve Jobs  ").unwrap();
        assert_eq!(quote.body(), "Stay hungry");
        assert_eq!(quote.author(), "Steve Jobs");
    }

    #[test]
    fn test_new_rejects_empty_parts() {
        assert!(Quote::new("", "Steve Jobs").is_none());
        assert!(Quote::new("Stay hungry", "   ").is_none());
    }

    #[test]
    fn test_from_hyphen_line() {
        let quote = Quote::from_hyphen_line("Stay hungry - Steve Jobs").unwrap();
        assert_eq!(quote.body(), "Stay hungry");
        assert_eq!(quote.author(), "Steve Jobs");
    }

    #[test]
    fn test_from_hyphen_line_requires_exactly_one_separator() {
        assert!(Quote::from_hyphen_line("no separator here").is_none());
        assert!(Quote::from_hyphen_line("well-known - Someone").is_none());
        assert!(Quote::from_hyphen_line("- Nobody").is_none());
    }

    #[test]
    fn test_display() {
        let quote = Quote::new("Woof", "A Dog").unwrap();
        assert_eq!(quote.to_string(), "Woof - A Dog");
    }
}
