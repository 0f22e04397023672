//! Error types for sitemeta operations.
//!
//! This module defines the main error type [`SitemetaError`] which represents
//! every way a metadata extraction can fail. Missing tags or attributes are
//! never errors: they become empty strings in [`PageMetadata`](crate::PageMetadata).
//!
//! # Example
//!
//! ```rust
//! use sitemeta_core::{SitemetaError, Result};
//!
//! fn require_url(url: &str) -> Result<&str> {
//!     if url.trim().is_empty() {
//!         return Err(SitemetaError::MissingUrl);
//!     }
//!     Ok(url)
//! }
//! # assert!(require_url("").is_err());
//! ```

use thiserror::Error;

/// Main error type for metadata extraction.
///
/// Only the fetch step and caller mistakes produce errors. Malformed or empty
/// markup is absorbed by the parser and yields empty fields instead.
#[derive(Error, Debug)]
pub enum SitemetaError {
    /// No URL was supplied.
    ///
    /// The extraction is short-circuited before any network activity.
    #[error("No URL supplied")]
    MissingUrl,

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or does not use http(s).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps DNS failures, refused connections, TLS problems
    /// and other transport-level failures.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid CSS selector passed to [`Document::select`](crate::Document::select).
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// Configuration errors.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SitemetaError {
    /// Returns `true` when the page could not be retrieved.
    ///
    /// Callers use this to tell "the page could not be reached" apart from
    /// "the page has no metadata", which is not an error at all.
    pub fn is_fetch_error(&self) -> bool {
        match self {
            SitemetaError::InvalidUrl(_) | SitemetaError::Timeout { .. } => true,
            #[cfg(feature = "fetch")]
            SitemetaError::HttpError(_) => true,
            _ => false,
        }
    }
}

/// Result type alias for SitemetaError.
pub type Result<T> = std::result::Result<T, SitemetaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SitemetaError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_timeout_error() {
        let err = SitemetaError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn test_fetch_error_classification() {
        assert!(SitemetaError::Timeout { timeout: 5 }.is_fetch_error());
        assert!(SitemetaError::InvalidUrl("x".to_string()).is_fetch_error());
        assert!(!SitemetaError::MissingUrl.is_fetch_error());
        assert!(!SitemetaError::HtmlParseError("bad".to_string()).is_fetch_error());
        assert!(!SitemetaError::ConfigError("bad".to_string()).is_fetch_error());
    }
}
