use serde::{Deserialize, Serialize};

use crate::Document;

/// `type` attribute values that mark a `<link>` as a feed.
pub const FEED_TYPES: [&str; 2] = ["application/rss+xml", "application/atom+xml"];

/// Summary of a page: title, meta description and feed link.
///
/// Every field is always present. A field the page does not provide is an
/// empty string, so the serialized form always carries all three keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub rss_url: String,
}

impl PageMetadata {
    /// Serializes the metadata to a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.title,
            "description": self.description,
            "rssUrl": self.rss_url,
        })
    }

    /// True when none of the three fields were found.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.rss_url.is_empty()
    }

    /// True when the page advertises an RSS or Atom feed.
    pub fn has_feed(&self) -> bool {
        !self.rss_url.is_empty()
    }
}

impl Document {
    /// Text content of the first `<title>` element, or `""`.
    pub fn extract_title(&self) -> String {
        self.title().unwrap_or_default()
    }

    /// `content` of the first `<meta name="description">`, or `""`.
    ///
    /// The `name` comparison is exact and case-sensitive. Once the first
    /// matching tag is found its `content` is used even when absent.
    pub fn extract_description(&self) -> String {
        self.find_all("meta")
            .into_iter()
            .find(|meta| meta.attr("name") == Some("description"))
            .and_then(|meta| meta.attr("content"))
            .unwrap_or_default()
            .to_string()
    }

    /// `href` of the first `<link>` whose `type` is an RSS or Atom feed, or `""`.
    ///
    /// The href is returned as written in the page, relative or not.
    pub fn extract_feed_url(&self) -> String {
        self.find_all("link")
            .into_iter()
            .find(|link| link.attr("type").is_some_and(|ty| FEED_TYPES.contains(&ty)))
            .and_then(|link| link.attr("href"))
            .unwrap_or_default()
            .to_string()
    }

    /// Extract all metadata at once
    pub fn extract_metadata(&self) -> PageMetadata {
        PageMetadata {
            title: self.extract_title(),
            description: self.extract_description(),
            rss_url: self.extract_feed_url(),
        }
    }
}
