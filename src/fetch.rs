//! Page fetching.
//!
//! One blocking GET per run: redirects followed, bounded by a timeout,
//! browser-like `User-Agent`. No retries and no caching.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::redirect::Policy;
use tracing::{debug, info};

use crate::encoding;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::url_utils;

/// Blocking HTTP client configured from [`Options`].
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a client with the configured timeout, redirect cap and identity.
    pub fn new(opts: &Options) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&opts.user_agent)
            .map_err(|e| Error::Fetch(format!("invalid user agent: {e}")))?;
        headers.insert(USER_AGENT, agent);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(opts.timeout)
            .redirect(Policy::limited(opts.max_redirects))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch `url` and return its body as text.
    ///
    /// Fails on connection errors, timeouts and any non-2xx final status.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let url = url_utils::parse_source_url(url)?;
        info!(%url, "fetching page");

        let response = self.client.get(url).send()?.error_for_status()?;
        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes()?;
        debug!(%final_url, len = bytes.len(), "page received");

        Ok(encoding::decode_body(&bytes, content_type.as_deref()))
    }
}

/// Fetch a page with the given options.
pub fn fetch_page(url: &str, opts: &Options) -> Result<String> {
    Fetcher::new(opts)?.fetch(url)
}
