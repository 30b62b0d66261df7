//! JSON-LD Metadata Parsing
//!
//! Reads the first `application/ld+json` block on the page. Every lookup
//! returns `Option`; malformed or oddly shaped data simply yields `None`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::dom::{self, Document};
use crate::patterns::JSON_LD_SELECTOR;

/// Display format for publish dates, e.g. `Jan 05, 2024`.
pub const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

/// The `author` field is either a list of people or a single person.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AuthorField {
    Many(Vec<Value>),
    One(Person),
}

#[derive(Debug, Deserialize)]
struct Person {
    name: Option<String>,
}

/// Decoded top-level JSON-LD object.
#[derive(Debug, Clone, Default)]
pub struct LinkedData {
    data: Map<String, Value>,
}

impl LinkedData {
    /// Parse a raw JSON-LD payload. Only a top-level object is accepted.
    #[must_use]
    pub fn parse(json_text: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(json_text.trim()) {
            Ok(Value::Object(data)) => Some(Self { data }),
            Ok(_) => {
                debug!("JSON-LD block is not an object");
                None
            }
            Err(err) => {
                warn!(error = %err, "malformed JSON-LD block");
                None
            }
        }
    }

    /// Name of the first listed author, or of the single author object.
    #[must_use]
    pub fn author_name(&self) -> Option<String> {
        let raw = self.data.get("author")?;
        let person = match serde_json::from_value::<AuthorField>(raw.clone()).ok()? {
            AuthorField::Many(people) => {
                serde_json::from_value::<Person>(people.into_iter().next()?).ok()?
            }
            AuthorField::One(person) => person,
        };
        person.name
    }

    /// `datePublished`, reformatted for display.
    #[must_use]
    pub fn published_date(&self) -> Option<String> {
        let raw = self.data.get("datePublished")?.as_str()?;
        if raw.is_empty() {
            return None;
        }
        match parse_iso_date(raw) {
            Some(date) => Some(date.format(DISPLAY_DATE_FORMAT).to_string()),
            None => {
                warn!(date = raw, "unparsable datePublished");
                None
            }
        }
    }
}

/// Decode the first JSON-LD script on the page.
#[must_use]
pub fn extract_json_ld(doc: &Document) -> Option<LinkedData> {
    let script = doc.select(JSON_LD_SELECTOR).first();
    if script.is_empty() {
        return None;
    }
    LinkedData::parse(&dom::text_content(&script))
}

/// Parse an ISO-8601 timestamp and return the calendar date in its own offset.
///
/// A trailing `Z` is read as `+00:00`. Date-only and offset-less forms are
/// accepted as well.
#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let normalized = match raw.strip_suffix('Z') {
        Some(stem) => format!("{stem}+00:00"),
        None => raw.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.date_naive());
    }

    const OFFSET_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f%:z",
        "%Y-%m-%dT%H:%M%:z",
        "%Y-%m-%d %H:%M:%S%.f%:z",
        "%Y-%m-%dT%H:%M:%S%.f%z",
    ];
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::<FixedOffset>::parse_from_str(&normalized, fmt) {
            return Some(dt.date_naive());
        }
    }

    const NAIVE_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, fmt) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linked(json: &str) -> LinkedData {
        match LinkedData::parse(json) {
            Some(data) => data,
            None => panic!("expected JSON-LD object, got None for {json}"),
        }
    }

    #[test]
    fn test_author_from_list() {
        let data = linked(r#"{"author":[{"name":"Ada"},{"name":"Grace"}]}"#);
        assert_eq!(data.author_name().as_deref(), Some("Ada"));
    }

    #[test]
    fn test_author_from_object() {
        let data = linked(r#"{"author":{"@type":"Person","name":"Carol","url":"x"}}"#);
        assert_eq!(data.author_name().as_deref(), Some("Carol"));
    }

    #[test]
    fn test_author_wrong_shapes() {
        assert!(linked(r#"{"author":"Just A String"}"#).author_name().is_none());
        assert!(linked(r#"{"author":[]}"#).author_name().is_none());
        assert!(linked(r#"{"author":["Plain"]}"#).author_name().is_none());
        assert!(linked(r#"{"author":{"url":"x"}}"#).author_name().is_none());
        assert!(linked(r#"{"author":{"name":42}}"#).author_name().is_none());
        assert!(linked(r#"{"headline":"x"}"#).author_name().is_none());
    }

    #[test]
    fn test_malformed_and_non_object() {
        assert!(LinkedData::parse("{not json").is_none());
        assert!(LinkedData::parse(r#"[{"author":{"name":"x"}}]"#).is_none());
        assert!(LinkedData::parse("").is_none());
    }

    #[test]
    fn test_published_date_utc_suffix() {
        let data = linked(r#"{"datePublished":"2024-01-05T12:00:00Z"}"#);
        assert_eq!(data.published_date().as_deref(), Some("Jan 05, 2024"));
    }

    #[test]
    fn test_published_date_keeps_own_offset() {
        let data = linked(r#"{"datePublished":"2024-03-01T23:30:00-05:00"}"#);
        assert_eq!(data.published_date().as_deref(), Some("Mar 01, 2024"));
    }

    #[test]
    fn test_published_date_rejects_garbage() {
        assert!(linked(r#"{"datePublished":"yesterday"}"#).published_date().is_none());
        assert!(linked(r#"{"datePublished":""}"#).published_date().is_none());
        assert!(linked(r#"{"datePublished":20240105}"#).published_date().is_none());
    }

    #[test]
    fn test_parse_iso_date_variants() {
        let jan5 = NaiveDate::from_ymd_opt(2024, 1, 5);
        assert_eq!(parse_iso_date("2024-01-05"), jan5);
        assert_eq!(parse_iso_date("2024-01-05T08:15:00"), jan5);
        assert_eq!(parse_iso_date("2024-01-05T08:15:00.123Z"), jan5);
        assert_eq!(parse_iso_date("2024-01-05T08:15:00+02:00"), jan5);
        assert_eq!(parse_iso_date("2024-13-05"), None);
    }

    #[test]
    fn test_extract_json_ld_uses_first_block() {
        let doc = dom::parse(
            r#"<html><head>
            <script type="application/ld+json">{"author":{"name":"First"}}</script>
            <script type="application/ld+json">{"author":{"name":"Second"}}</script>
            </head><body></body></html>"#,
        );
        let data = extract_json_ld(&doc).and_then(|d| d.author_name());
        assert_eq!(data.as_deref(), Some("First"));
    }

    #[test]
    fn test_extract_json_ld_absent() {
        let doc = dom::parse("<html><body><p>No data</p></body></html>");
        assert!(extract_json_ld(&doc).is_none());
    }
}
