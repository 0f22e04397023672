pub mod encoding;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod metadata;
pub mod parse;

pub use encoding::decode_html;
pub use error::{Result, SitemetaError};
pub use extract::{Extractor, extract_from_html};
#[cfg(feature = "fetch")]
pub use extract::{extract, extract_with_config};
pub use fetch::Fetcher;
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, HttpFetcher, fetch_url};
pub use metadata::{FEED_TYPES, PageMetadata};
pub use parse::{Document, Element};
