//! Content fetching from URLs.
//!
//! The [`Fetcher`] trait is the seam between the extractor and the network.
//! [`HttpFetcher`] is the reqwest-backed implementation used in production.

use std::future::Future;

use crate::Result;

#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use crate::SitemetaError;
#[cfg(feature = "fetch")]
use crate::encoding::decode_html;

#[cfg(feature = "fetch")]
use reqwest::header::CONTENT_TYPE;
#[cfg(feature = "fetch")]
use reqwest::{Client, Response, redirect};
#[cfg(feature = "fetch")]
use url::Url;

/// Retrieves the markup located at a URL.
///
/// Implementations return the decoded body text, or an error when the
/// transport fails. An HTTP error status is not a transport failure.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout, redirect, body size and user agent settings for HTTP requests.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
    /// Maximum number of redirects followed before giving up.
    pub max_redirects: usize,
    /// Bytes of body read before the rest of the response is dropped.
    pub max_body_bytes: usize,
}

#[cfg(feature = "fetch")]
impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Sitemeta/0.1)".to_string(),
            max_redirects: 10,
            max_body_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Fetcher backed by a shared reqwest [`Client`].
///
/// The client is built once so concurrent extractions reuse its connection pool.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: u64,
    max_body_bytes: usize,
}

#[cfg(feature = "fetch")]
impl HttpFetcher {
    /// Builds a fetcher from the given configuration.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .redirect(redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(SitemetaError::HttpError)?;

        Ok(Self { client, timeout: config.timeout, max_body_bytes: config.max_body_bytes })
    }
}

#[cfg(feature = "fetch")]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let parsed_url = parse_http_url(url)?;
        tracing::debug!(url = %parsed_url, "fetching page");

        let response = self
            .client
            .get(parsed_url)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = self.read_body(response).await?;
        tracing::debug!(%status, bytes = body.len(), "fetched page");

        Ok(decode_html(&body, content_type.as_deref()))
    }
}

#[cfg(feature = "fetch")]
impl HttpFetcher {
    /// Reads the body chunk by chunk, stopping at `max_body_bytes`.
    ///
    /// Metadata lives in `<head>`, so a truncated page still yields it.
    async fn read_body(&self, mut response: Response) -> Result<Vec<u8>> {
        let mut body = Vec::new();

        while let Some(chunk) = response.chunk().await.map_err(|e| self.map_transport_error(e))? {
            let remaining = self.max_body_bytes - body.len();
            if chunk.len() >= remaining {
                body.extend_from_slice(&chunk[..remaining]);
                tracing::debug!(limit = self.max_body_bytes, "page body truncated");
                break;
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }

    fn map_transport_error(&self, err: reqwest::Error) -> SitemetaError {
        if err.is_timeout() { SitemetaError::Timeout { timeout: self.timeout } } else { SitemetaError::HttpError(err) }
    }
}

/// Parses `url` and checks that it is an absolute http(s) URL.
#[cfg(feature = "fetch")]
fn parse_http_url(url: &str) -> Result<Url> {
    let parsed_url = Url::parse(url).map_err(|e| SitemetaError::InvalidUrl(e.to_string()))?;

    match parsed_url.scheme() {
        "http" | "https" => Ok(parsed_url),
        scheme => Err(SitemetaError::InvalidUrl(format!(
            "unsupported scheme '{}', expected http:// or https://",
            scheme
        ))),
    }
}

/// Fetches HTML content from a URL with a one-off client.
///
/// Prefer [`HttpFetcher`] when fetching more than one page.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    HttpFetcher::new(config)?.fetch(url).await
}
