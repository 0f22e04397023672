//! Page metadata extraction API.
//!
//! The main entry point is the [`Extractor`] struct, which pairs a
//! [`Fetcher`] with the title, description and feed scans in
//! [`metadata`](crate::metadata). The one-shot helpers [`extract`] and
//! [`extract_with_config`] build an HTTP-backed extractor per call.
//!
//! # Example
//!
//! ```rust
//! use sitemeta_core::extract_from_html;
//!
//! let html = r#"<title>Hi</title><meta name="description" content="desc text">"#;
//! let metadata = extract_from_html(html);
//! assert_eq!(metadata.title, "Hi");
//! assert_eq!(metadata.description, "desc text");
//! assert_eq!(metadata.rss_url, "");
//! ```

use crate::fetch::Fetcher;
use crate::metadata::PageMetadata;
use crate::parse::Document;
use crate::{Result, SitemetaError};

#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, HttpFetcher};

/// Fetches pages and extracts their metadata.
///
/// Holds no per-request state, so one instance can serve concurrent
/// extractions.
///
/// # Example
///
/// ```rust,no_run
/// use sitemeta_core::Extractor;
///
/// # async fn example() -> sitemeta_core::Result<()> {
/// let extractor = Extractor::new()?;
/// let metadata = extractor.extract("https://example.com").await?;
/// println!("{} -> {}", metadata.title, metadata.rss_url);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Extractor<F> {
    fetcher: F,
}

#[cfg(feature = "fetch")]
impl Extractor<HttpFetcher> {
    /// Creates an HTTP-backed extractor with default fetch settings.
    pub fn new() -> Result<Self> {
        Self::with_config(&FetchConfig::default())
    }

    /// Creates an HTTP-backed extractor with a custom fetch configuration.
    pub fn with_config(config: &FetchConfig) -> Result<Self> {
        Ok(Self::with_fetcher(HttpFetcher::new(config)?))
    }
}

impl<F: Fetcher> Extractor<F> {
    /// Creates an extractor on top of any [`Fetcher`].
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetches `url` and extracts its title, description and feed link.
    ///
    /// # Errors
    ///
    /// Returns [`SitemetaError::MissingUrl`] for an empty `url` without
    /// touching the network, and whatever the fetcher reports when the page
    /// cannot be retrieved. Missing tags are not errors.
    pub async fn extract(&self, url: &str) -> Result<PageMetadata> {
        let url = url.trim();
        if url.is_empty() {
            return Err(SitemetaError::MissingUrl);
        }

        let html = self.fetcher.fetch(url).await?;
        let metadata = extract_from_html(&html);
        tracing::debug!(
            url,
            title = %metadata.title,
            has_description = !metadata.description.is_empty(),
            rss_url = %metadata.rss_url,
            "extracted page metadata"
        );

        Ok(metadata)
    }
}

/// Parses `html` and runs the three metadata scans.
///
/// Never fails: markup that cannot be recovered yields empty fields.
pub fn extract_from_html(html: &str) -> PageMetadata {
    Document::parse(html).extract_metadata()
}

/// Convenience function for one-liner extraction with defaults.
#[cfg(feature = "fetch")]
pub async fn extract(url: &str) -> Result<PageMetadata> {
    extract_with_config(url, &FetchConfig::default()).await
}

/// Fetch `url` with the given configuration and extract its metadata.
#[cfg(feature = "fetch")]
pub async fn extract_with_config(url: &str, config: &FetchConfig) -> Result<PageMetadata> {
    Extractor::with_config(config)?.extract(url).await
}
