//! Unified error handling for the NoteCrawl library
//!
//! One typed error enum covers every failure the stores and the scraping
//! client can surface. Not-found outcomes are not errors here; they are
//! tagged values (`Option`, [`crate::notes::DeleteOutcome`]) so callers can
//! branch on them without parsing message text.

use std::io;
use thiserror::Error;

/// The main error type for the NoteCrawl library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NotecrawlError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request to the scraping provider failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No scraping API key was supplied and none is set in the environment
    #[error("API key must be provided or set as FIRECRAWL_API_KEY environment variable")]
    MissingApiKey,

    /// Other errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for NoteCrawl operations
pub type Result<T> = std::result::Result<T, NotecrawlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let err: NotecrawlError =
            io::Error::new(io::ErrorKind::NotFound, "file not found").into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_missing_api_key_message_names_env_var() {
        let err = NotecrawlError::MissingApiKey;
        assert!(err.to_string().contains("FIRECRAWL_API_KEY"));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: NotecrawlError = parse_err.into();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
