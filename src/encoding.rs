//! Character decoding for fetched pages.
//!
//! The charset is taken from the `Content-Type` response header when it
//! names one, otherwise from an in-document `<meta>` declaration, otherwise
//! UTF-8. Decoding is lossy and never fails.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Bytes of the document scanned for a `<meta>` charset declaration.
const SNIFF_LEN: usize = 1024;

/// `charset=` parameter of a Content-Type value.
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("HEADER_CHARSET_RE regex")
});

/// `<meta charset="...">` or `<meta http-equiv=... content="...; charset=...">`.
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("META_CHARSET_RE regex")
});

fn lookup(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Encoding named by a `Content-Type` header value, if any.
#[must_use]
pub fn encoding_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .and_then(|m| lookup(m.as_str()))
}

/// Encoding declared by a `<meta>` tag near the top of the document.
#[must_use]
pub fn encoding_from_meta(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| lookup(m.as_str()))
}

/// Decode a response body to a UTF-8 string.
///
/// Invalid sequences become U+FFFD.
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(encoding_from_content_type)
        .or_else(|| encoding_from_meta(body))
        .unwrap_or(UTF_8);

    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}
