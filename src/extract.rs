//! Extraction pipeline: parsed page in, [`Article`] out.

use tracing::debug;

use crate::dom;
use crate::error::Result;
use crate::html_processing::{clean_body, locate_body};
use crate::metadata::extract_metadata;
use crate::result::Article;

/// Extract title, author, date and a cleaned body from page HTML.
///
/// Fails only when the page has no article body.
pub fn extract_article(html: &str) -> Result<Article> {
    let doc = dom::parse(html);

    let metadata = extract_metadata(&doc);
    debug!(title = %metadata.title, author = %metadata.author, date = %metadata.date, "metadata resolved");

    let body = locate_body(&doc)?;
    let cleaned = clean_body(&body);

    Ok(Article::new(metadata, cleaned))
}
