//! Metadata extraction module.
//!
//! Resolves title, author and publish date. Each source is tried in order
//! and the first one that yields a value wins; when all of them come up
//! empty the field falls back to its placeholder.

pub mod dom_extraction;
pub mod json_ld;
pub mod meta_tags;

use dom_query::Document;
use tracing::debug;

use crate::result::{Metadata, UNKNOWN_AUTHOR, UNTITLED};

pub use dom_extraction::extract_dom_title;
pub use json_ld::{extract_json_ld, parse_iso_date, LinkedData};
pub use meta_tags::{meta_author, meta_published_date};

/// Extract all metadata from a document.
///
/// Orchestrates metadata extraction from multiple sources:
/// - Title: `h1.post-title`, else `"Untitled"`
/// - Author: `<meta name="author">`, then JSON-LD `author`, else `"Unknown Author"`
/// - Date: JSON-LD `datePublished` (reformatted), then the
///   `article:published_time` meta tag (date prefix), else empty
///
/// Never fails: malformed sources are skipped.
#[must_use]
pub fn extract_metadata(doc: &Document) -> Metadata {
    let linked = extract_json_ld(doc);

    let title = extract_dom_title(doc).unwrap_or_else(|| {
        debug!("no post title heading, using placeholder");
        UNTITLED.to_string()
    });

    let author = meta_author(doc)
        .or_else(|| linked.as_ref().and_then(LinkedData::author_name))
        .unwrap_or_else(|| {
            debug!("no author found, using placeholder");
            UNKNOWN_AUTHOR.to_string()
        });

    let date = linked
        .as_ref()
        .and_then(LinkedData::published_date)
        .or_else(|| meta_published_date(doc))
        .unwrap_or_default();

    Metadata { title, author, date }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_metadata_defaults() {
        let doc = Document::from("<html><body><p>Nothing here</p></body></html>");
        assert_eq!(extract_metadata(&doc), Metadata::default());
    }

    #[test]
    fn test_meta_author_beats_json_ld() {
        let html = r#"<!DOCTYPE html>
        <html>
        <head>
            <meta name="author" content="Meta Person">
            <script type="application/ld+json">
            {"@type": "NewsArticle", "author": [{"name": "LD Person"}]}
            </script>
        </head>
        <body></body>
        </html>"#;

        let doc = Document::from(html);
        assert_eq!(extract_metadata(&doc).author, "Meta Person");
    }

    #[test]
    fn test_json_ld_author_when_meta_empty() {
        let html = r#"<html>
        <head>
            <meta name="author" content="">
            <script type="application/ld+json">{"author": {"name": "LD Person"}}</script>
        </head>
        <body></body>
        </html>"#;

        let doc = Document::from(html);
        assert_eq!(extract_metadata(&doc).author, "LD Person");
    }

    #[test]
    fn test_json_ld_date_beats_meta_date() {
        let html = r#"<html>
        <head>
            <meta property="article:published_time" content="2020-02-02T00:00:00Z">
            <script type="application/ld+json">{"datePublished": "2024-01-05T12:00:00Z"}</script>
        </head>
        <body></body>
        </html>"#;

        let doc = Document::from(html);
        assert_eq!(extract_metadata(&doc).date, "Jan 05, 2024");
    }

    #[test]
    fn test_meta_date_when_json_ld_unparsable() {
        let html = r#"<html>
        <head>
            <meta property="article:published_time" content="2020-02-02T00:00:00Z">
            <script type="application/ld+json">{"datePublished": "soon"}</script>
        </head>
        <body></body>
        </html>"#;

        let doc = Document::from(html);
        assert_eq!(extract_metadata(&doc).date, "2020-02-02");
    }

    #[test]
    fn test_malformed_json_ld_is_swallowed() {
        let html = r#"<html>
        <head><script type="application/ld+json">{"author": </script></head>
        <body><h1 class="post-title">Still Works</h1></body>
        </html>"#;

        let doc = Document::from(html);
        let metadata = extract_metadata(&doc);

        assert_eq!(metadata.title, "Still Works");
        assert_eq!(metadata.author, "Unknown Author");
        assert!(metadata.date.is_empty());
    }
}
