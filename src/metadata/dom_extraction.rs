//! DOM-based metadata extraction.

use crate::dom::{self, Document};
use crate::patterns::TITLE_SELECTOR;

/// Trimmed text of the post title heading.
///
/// A heading with no text counts as missing.
#[must_use]
pub fn extract_dom_title(doc: &Document) -> Option<String> {
    let heading = doc.select(TITLE_SELECTOR).first();
    if heading.is_empty() {
        return None;
    }
    let title = dom::text_content(&heading).trim().to_string();
    (!title.is_empty()).then_some(title)
}
