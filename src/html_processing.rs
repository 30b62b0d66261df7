//! HTML Processing
//!
//! Locates the article body and strips it down to minimal markup.
//!
//! Cleaning runs on a deep copy of the body, in a fixed order:
//! 1. drop interactive elements (`button`, `svg`, `form`, `input`, `script`)
//! 2. drop UI widgets matched by class-name fragment
//! 3. normalize images to `src`, `alt`, `style`
//! 4. collapse `<picture>` wrappers to their inner image
//! 5. reduce links to `href`
//! 6. strip every attribute outside the allowlist

use tracing::debug;

use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result};
use crate::patterns::{
    ALLOWED_ATTRIBUTES, AVAILABLE_CONTENT_SELECTOR, BODY_SELECTOR, IMAGE_STYLE,
    INTERACTIVE_SELECTOR, UI_WIDGET_CLASS,
};

/// Find the article body container.
///
/// Tries the primary body container first, then the available-content
/// fallback.
pub fn locate_body(doc: &Document) -> Result<Selection<'_>> {
    for selector in [BODY_SELECTOR, AVAILABLE_CONTENT_SELECTOR] {
        let body = doc.select(selector).first();
        if !body.is_empty() {
            debug!(selector, "located article body");
            return Ok(body);
        }
    }
    Err(Error::BodyNotFound)
}

/// Clean a body container and serialize it, enclosing tag included.
///
/// The source document is left untouched.
#[must_use]
pub fn clean_body(body: &Selection) -> String {
    let copy = dom::clone_subtree(body);
    let root = dom::subtree_root(&copy);

    remove_interactive_elements(&root);
    remove_ui_widgets(&root);
    normalize_images(&root);
    collapse_pictures(&root);
    normalize_links(&root);
    strip_attributes(&root);

    dom::outer_html(&root).to_string()
}

/// Delete buttons, inline icons, forms, inputs and scripts.
pub fn remove_interactive_elements(root: &Selection) {
    let doomed = root.select(INTERACTIVE_SELECTOR);
    debug!(count = doomed.length(), "removing interactive elements");
    dom::remove(&doomed);
}

/// Delete elements whose class attribute contains a denylisted fragment.
pub fn remove_ui_widgets(root: &Selection) {
    let mut removed = 0usize;
    for element in dom::each(&root.select("[class]")) {
        let matches = dom::class_name(&element).is_some_and(|class| UI_WIDGET_CLASS.is_match(&class));
        if matches {
            dom::remove(&element);
            removed += 1;
        }
    }
    debug!(count = removed, "removed UI widgets");
}

/// Reduce one image to `src`, `alt` and the responsive inline style.
///
/// Missing `src`/`alt` become empty strings so every image carries exactly
/// the same three attributes.
pub fn normalize_image(img: &Selection) {
    let src = dom::get_attribute(img, "src").unwrap_or_default();
    let alt = dom::get_attribute(img, "alt").unwrap_or_default();

    dom::clear_all_attributes(img);
    dom::set_attribute(img, "src", &src);
    dom::set_attribute(img, "alt", &alt);
    dom::set_attribute(img, "style", IMAGE_STYLE);
}

/// Normalize every image under `root`.
pub fn normalize_images(root: &Selection) {
    for img in dom::each(&root.select("img")) {
        normalize_image(&img);
    }
}

/// Replace each `<picture>` that holds an image with just that image.
///
/// Images are re-normalized afterwards, so this pass holds on its own even
/// if nothing touched them before.
pub fn collapse_pictures(root: &Selection) {
    let mut collapsed = 0usize;
    for picture in dom::each(&root.select("picture")) {
        let img = picture.select("img").first();
        if img.is_empty() {
            continue;
        }
        let markup = dom::outer_html(&img).to_string();
        dom::replace_with_html(&picture, &markup);
        collapsed += 1;
    }
    if collapsed > 0 {
        debug!(count = collapsed, "collapsed picture wrappers");
        normalize_images(root);
    }
}

/// Strip links down to their `href`.
pub fn normalize_links(root: &Selection) {
    for link in dom::each(&root.select("a")) {
        dom::retain_attributes(&link, &["href"]);
    }
}

/// Remove every attribute outside [`ALLOWED_ATTRIBUTES`], root included.
pub fn strip_attributes(root: &Selection) {
    dom::retain_attributes(root, ALLOWED_ATTRIBUTES);
    for element in dom::each(&root.select("*")) {
        dom::retain_attributes(&element, ALLOWED_ATTRIBUTES);
    }
}
