//! HTML Meta Tag Extraction
//!
//! Page-level `<meta>` tags for author and publish time.

use crate::dom::{self, Document};
use crate::patterns::{META_AUTHOR_SELECTOR, META_PUBLISHED_SELECTOR};

/// Length of the `YYYY-MM-DD` prefix of an ISO timestamp.
const DATE_PREFIX_LEN: usize = 10;

/// Content of the first matching meta tag, if the tag exists.
fn meta_content(doc: &Document, selector: &str) -> Option<String> {
    let meta = doc.select(selector).first();
    if meta.is_empty() {
        return None;
    }
    Some(dom::get_attribute(&meta, "content").unwrap_or_default())
}

/// `<meta name="author">` content, when present and non-empty.
#[must_use]
pub fn meta_author(doc: &Document) -> Option<String> {
    meta_content(doc, META_AUTHOR_SELECTOR).filter(|content| !content.is_empty())
}

/// First ten characters of `article:published_time`, taken verbatim.
///
/// No parsing happens here; a well-formed timestamp yields its `YYYY-MM-DD`
/// prefix. An empty or missing `content` yields `None`.
#[must_use]
pub fn meta_published_date(doc: &Document) -> Option<String> {
    let content = meta_content(doc, META_PUBLISHED_SELECTOR)?;
    let prefix: String = content.chars().take(DATE_PREFIX_LEN).collect();
    (!prefix.is_empty()).then_some(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_author() {
        let doc = dom::parse(r#"<html><head><meta name="author" content="Jane Doe"></head></html>"#);
        assert_eq!(meta_author(&doc).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_meta_author_empty_or_missing() {
        let doc = dom::parse(r#"<html><head><meta name="author" content=""></head></html>"#);
        assert!(meta_author(&doc).is_none());

        let doc = dom::parse(r#"<html><head><meta name="author"></head></html>"#);
        assert!(meta_author(&doc).is_none());

        let doc = dom::parse(r#"<html><head><meta property="og:title" content="x"></head></html>"#);
        assert!(meta_author(&doc).is_none());
    }

    #[test]
    fn test_meta_published_date_takes_prefix() {
        let doc = dom::parse(
            r#"<html><head><meta property="article:published_time" content="2023-11-20T09:00:00.000Z"></head></html>"#,
        );
        assert_eq!(meta_published_date(&doc).as_deref(), Some("2023-11-20"));
    }

    #[test]
    fn test_meta_published_date_short_value_verbatim() {
        let doc = dom::parse(
            r#"<html><head><meta property="article:published_time" content="2023"></head></html>"#,
        );
        assert_eq!(meta_published_date(&doc).as_deref(), Some("2023"));
    }

    #[test]
    fn test_meta_published_date_missing() {
        let doc = dom::parse("<html><head></head></html>");
        assert!(meta_published_date(&doc).is_none());
    }
}
