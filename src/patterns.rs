//! Compiled regex patterns and CSS selectors for content extraction.
//!
//! All patterns are compiled once at first use using `LazyLock`.
//! Patterns are organized by their purpose in the extraction pipeline.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Cleaning Patterns
// =============================================================================

/// Class-name fragments identifying UI widgets inside the article body.
///
/// Matched as substrings, so `foo-like-button-bar` is caught by `like-button`.
pub const UI_CLASS_FRAGMENTS: &[&str] = &[
    "image-link-expand",
    "icon-container",
    "restack-image",
    "like-button",
    "share-button",
    "comment-button",
    "subscription-widget",
    "subscribe-widget",
    "paywall",
];

/// Matches any class attribute containing one of [`UI_CLASS_FRAGMENTS`].
pub static UI_WIDGET_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = UI_CLASS_FRAGMENTS
        .iter()
        .map(|fragment| regex::escape(fragment))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("UI_WIDGET_CLASS regex")
});

/// Interactive or non-content tags deleted outright, descendants included.
pub const INTERACTIVE_SELECTOR: &str = "button, svg, form, input, script";

/// Attributes that survive the final cleaning sweep.
pub const ALLOWED_ATTRIBUTES: &[&str] = &["href", "src", "alt", "style"];

/// Inline style forced onto every image.
pub const IMAGE_STYLE: &str = "max-width: 100%; height: auto;";

// =============================================================================
// Locating Patterns
// =============================================================================

/// Primary article body container.
///
/// The class value must be exactly `body markup`; extra classes do not match.
pub const BODY_SELECTOR: &str = r#"div[class="body markup"]"#;

/// Fallback container holding the freely available part of a post.
pub const AVAILABLE_CONTENT_SELECTOR: &str = "div.available-content";

/// Post title heading.
pub const TITLE_SELECTOR: &str = "h1.post-title";

/// Page-level author meta tag.
pub const META_AUTHOR_SELECTOR: &str = r#"meta[name="author"]"#;

/// Page-level publish time meta tag.
pub const META_PUBLISHED_SELECTOR: &str = r#"meta[property="article:published_time"]"#;

/// Structured linked-data script block.
pub const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

// =============================================================================
// URL Patterns
// =============================================================================

/// Numeric post id in an inbox-style path, e.g. `/inbox/post/183535301`.
pub static INBOX_POST_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/inbox/post/(\d+)").expect("INBOX_POST_ID regex")
});
