//! Parsed HTML, queryable by CSS selector.

use scraper::{Html, Selector};

/// An HTML document parsed into a DOM tree.
///
/// Parsing never fails: malformed markup is repaired the way a browser
/// would, and invalid UTF-8 is replaced.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse raw bytes presumed to be HTML.
    pub fn parse(bytes: &[u8]) -> Self {
        Self::from_html(&String::from_utf8_lossy(bytes))
    }

    pub fn from_html(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// Whether `selector` matches at least one element.
    pub fn contains(&self, selector: &Selector) -> bool {
        self.html.select(selector).next().is_some()
    }

    /// Parser errors recovered from while building the tree.
    pub fn parse_errors(&self) -> usize {
        self.html.errors.len()
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("parse_errors", &self.parse_errors())
            .finish()
    }
}
