//! # superstack
//!
//! Fetch a newsletter article and strip it down to a clean, standalone HTML
//! page for offline reading.
//!
//! The pipeline is linear: fetch the page, resolve title/author/date, locate
//! and clean the article body, then render a self-contained document.
//!
//! ## Quick Start
//!
//! ```rust
//! use superstack::{extract_article, render_document};
//!
//! let html = r#"<html><head><meta name="author" content="Jane Doe"></head>
//! <body><h1 class="post-title">My Post</h1>
//! <div class="body markup"><p>Main content here.</p><button>Like</button></div>
//! </body></html>"#;
//!
//! let article = extract_article(html)?;
//! assert_eq!(article.author, "Jane Doe");
//!
//! let page = render_document(&article);
//! assert!(page.contains("<h1>My Post</h1>"));
//! assert!(!page.contains("<button"));
//! # Ok::<(), superstack::Error>(())
//! ```

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Metadata extraction (meta tags, JSON-LD, title heading).
pub mod metadata;

/// Body locating and cleaning.
pub mod html_processing;

/// Character decoding of fetched pages.
pub mod encoding;

/// Blocking page fetcher.
pub mod fetch;

/// Standalone document rendering.
pub mod render;

/// URL validation and post id helper.
pub mod url_utils;

use std::path::Path;

use tracing::info;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::extract_article;
pub use fetch::{fetch_page, Fetcher};
pub use options::{Options, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use render::render_document;
pub use result::{Article, Metadata, UNKNOWN_AUTHOR, UNTITLED};

/// Write a rendered document as UTF-8, replacing any existing file.
pub fn write_document(path: &Path, document: &str) -> Result<()> {
    std::fs::write(path, document)?;
    info!(path = %path.display(), bytes = document.len(), "document written");
    Ok(())
}
