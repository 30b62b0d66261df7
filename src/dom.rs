//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate so the extraction and cleaning
//! code reads in terms of attributes, tags and subtrees rather than raw
//! node handles.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Attribute Operations ===

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Set an attribute value
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Remove an attribute
#[inline]
fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// Get all attributes as key-value pairs
///
/// Returns empty vector if node has no attributes or if selection is empty.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Remove every attribute whose name is not in `keep`.
pub fn retain_attributes(sel: &Selection, keep: &[&str]) {
    for (key, _) in get_all_attributes(sel) {
        if !keep.contains(&key.as_str()) {
            remove_attribute(sel, &key);
        }
    }
}

/// Clear all attributes from a selection.
pub fn clear_all_attributes(sel: &Selection) {
    retain_attributes(sel, &[]);
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get outer HTML content, including the element's own tag.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

// === Tree Manipulation ===

/// Remove elements (and their descendants) from the tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Replace an element with parsed HTML markup
#[inline]
pub fn replace_with_html(sel: &Selection, html: &str) {
    sel.replace_with_html(html);
}

/// Deep-copy the first element of `sel` into a fresh document.
///
/// The source document is never touched. Use [`subtree_root`] to get back
/// at the copied element.
#[must_use]
pub fn clone_subtree(sel: &Selection) -> Document {
    Document::from(outer_html(sel).to_string())
}

/// The copied element inside a document produced by [`clone_subtree`].
#[must_use]
pub fn subtree_root(doc: &Document) -> Selection<'_> {
    doc.select("body > *").first()
}

/// Wrap every node of a selection in its own single-node selection.
///
/// Node handles are collected up front so callers can remove or rewrite
/// elements while walking the list.
#[must_use]
pub fn each<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_select() {
        let doc = parse(r#"<div id="main" class="container">content</div>"#);
        let div = doc.select("div");

        assert_eq!(get_attribute(&div, "id"), Some("main".to_string()));
        assert_eq!(class_name(&div), Some("container".to_string()));
    }

    #[test]
    fn test_retain_attributes() {
        let doc = parse(r#"<a href="/x" class="c" data-track="1">link</a>"#);
        let a = doc.select("a");

        retain_attributes(&a, &["href"]);

        assert_eq!(get_all_attributes(&a), vec![("href".to_string(), "/x".to_string())]);
    }

    #[test]
    fn test_clear_all_attributes() {
        let doc = parse(r#"<p class="a" id="b" style="c">text</p>"#);
        let p = doc.select("p");

        clear_all_attributes(&p);

        assert!(get_all_attributes(&p).is_empty());
        assert_eq!(text_content(&p).to_string(), "text");
    }

    #[test]
    fn test_clone_subtree_leaves_source_untouched() {
        let doc = parse(r#"<div class="outer"><p class="x">one</p></div>"#);
        let source = doc.select("div.outer");

        let copy = clone_subtree(&source);
        let root = subtree_root(&copy);
        assert_eq!(class_name(&root), Some("outer".to_string()));

        root.select("p").remove();

        assert_eq!(copy.select("p").length(), 0);
        assert_eq!(doc.select("p").length(), 1);
    }

    #[test]
    fn test_each_allows_removal_while_walking() {
        let doc = parse("<div><span>a</span><span>b</span><em>c</em></div>");

        for span in each(&doc.select("span")) {
            remove(&span);
        }

        assert_eq!(doc.select("span").length(), 0);
        assert_eq!(doc.select("em").length(), 1);
    }
}
