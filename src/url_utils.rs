//! URL Utility Functions
//!
//! Source URL validation and the inbox post id helper.

use url::Url;

use crate::error::{Error, Result};
use crate::patterns::INBOX_POST_ID;

/// Parse the page URL given on the command line.
///
/// Only absolute `http`/`https` URLs with a host are accepted.
pub fn parse_source_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let url = Url::parse(raw).map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!("{raw}: unsupported scheme {}", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(Error::InvalidUrl(format!("{raw}: missing host")));
    }

    Ok(url)
}

/// Numeric post id from an inbox-style URL such as
/// `https://substack.com/inbox/post/183535301`.
///
/// ```
/// use superstack::url_utils::extract_post_id;
///
/// assert_eq!(extract_post_id("https://substack.com/inbox/post/42").as_deref(), Some("42"));
/// assert_eq!(extract_post_id("https://example.substack.com/p/slug"), None);
/// ```
#[must_use]
pub fn extract_post_id(url: &str) -> Option<String> {
    INBOX_POST_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
