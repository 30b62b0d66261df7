//! Configuration options for fetching a page.
//!
//! The `Options` struct controls how the source page is retrieved. Extraction
//! and rendering are fixed and take no options.

use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Desktop browser identity sent with every request.
///
/// Some publishing platforms serve different markup (or refuse service) to
/// clients that do not look like a browser.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Default cap on followed redirects.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Configuration options for the page fetcher.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use superstack::Options;
///
/// let options = Options {
///     timeout: Duration::from_secs(10),
///     ..Options::default()
/// };
/// assert_eq!(options.max_redirects, 10);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Upper bound on the whole request, connect through body.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// `User-Agent` header value.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,

    /// Maximum number of redirects followed before giving up.
    ///
    /// Default: 10
    pub max_redirects: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}
