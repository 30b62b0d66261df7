//! Result types for extraction output.
//!
//! An [`Article`] is built once from a parsed page, read once by the
//! renderer, and then dropped.

/// Placeholder title when the page has no post title heading.
pub const UNTITLED: &str = "Untitled";

/// Placeholder author when neither meta tags nor linked data name one.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Metadata extracted from an HTML document.
///
/// Every field is already resolved through its fallback chain, so nothing
/// here is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Post title, or [`UNTITLED`].
    pub title: String,

    /// Author name, or [`UNKNOWN_AUTHOR`].
    pub author: String,

    /// Display date such as `Jan 05, 2024`; empty when unknown.
    pub date: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: UNTITLED.to_string(),
            author: UNKNOWN_AUTHOR.to_string(),
            date: String::new(),
        }
    }
}

/// A cleaned article ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Plain-text title.
    pub title: String,

    /// Plain-text author.
    pub author: String,

    /// Display date, possibly empty.
    pub date: String,

    /// Cleaned body as an HTML fragment, including its enclosing tag.
    pub body: String,
}

impl Article {
    /// Combine resolved metadata with a cleaned body fragment.
    #[must_use]
    pub fn new(metadata: Metadata, body: String) -> Self {
        let Metadata { title, author, date } = metadata;
        Self {
            title,
            author,
            date,
            body,
        }
    }

    /// Whether the metadata line should carry a date.
    #[must_use]
    pub fn has_date(&self) -> bool {
        !self.date.is_empty()
    }
}
