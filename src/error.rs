//! Error types for superstack.
//!
//! Only two things abort a run: the page could not be fetched, or the page
//! has no article body. Everything else degrades to a default value.

/// Error type for fetch and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source URL is not an absolute http(s) URL.
    #[error("Invalid source URL: {0}")]
    InvalidUrl(String),

    /// Network or HTTP failure (connect error, timeout, non-2xx status).
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Neither the primary nor the fallback body container is present.
    #[error("Could not find article body in the HTML")]
    BodyNotFound,

    /// Writing the rendered document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Fetch(format!("request timed out: {err}"))
        } else if let Some(status) = err.status() {
            Error::Fetch(format!("server returned {status}"))
        } else {
            Error::Fetch(err.to_string())
        }
    }
}

/// Result type alias for superstack operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_not_found_message_is_stable() {
        assert_eq!(
            Error::BodyNotFound.to_string(),
            "Could not find article body in the HTML"
        );
    }

    #[test]
    fn io_errors_convert() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
