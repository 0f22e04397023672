//! HTML parsing and DOM traversal.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML and walking the resulting tag tree.
//!
//! Parsing never fails: html5ever recovers from unclosed tags, bad nesting
//! and stray bytes the way browsers do, and an empty input simply yields a
//! document with no interesting elements.
//!
//! # Example
//!
//! ```rust
//! use sitemeta_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <head>
//!             <link rel="alternate" type="application/rss+xml" href="/feed.xml">
//!         </head>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! let links = doc.find_all("link");
//! assert_eq!(links[0].attr("href"), Some("/feed.xml"));
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::{Result, SitemetaError};

/// Represents a parsed HTML document.
///
/// # Example
///
/// ```rust
/// use sitemeta_core::parse::Document;
///
/// let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
/// let doc = Document::parse(html);
/// assert_eq!(doc.title(), Some("Test".to_string()));
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Parse errors reported by html5ever are dropped; the returned tree is
    /// always the best-effort recovery.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Finds all elements with the given tag name, in document order.
    ///
    /// Tag names are matched in lowercase since the parser normalizes them.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sitemeta_core::parse::Document;
    ///
    /// let doc = Document::parse(r#"<meta name="a"><META name="b">"#);
    /// let names: Vec<_> = doc.find_all("meta").iter().filter_map(|m| m.attr("name")).collect();
    /// assert_eq!(names, vec!["a", "b"]);
    /// ```
    pub fn find_all(&'_ self, tag_name: &str) -> Vec<Element<'_>> {
        let tag_name = tag_name.to_ascii_lowercase();

        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == tag_name)
            .map(|element| Element { element })
            .collect()
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`SitemetaError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = Selector::parse(selector)
            .map_err(|e| SitemetaError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|element| Element { element }).collect())
    }

    /// Gets the text of the first `<title>` element, if any.
    pub fn title(&self) -> Option<String> {
        self.find_all("title").first().map(Element::text)
    }
}

/// A wrapper around scraper's ElementRef.
///
/// # Example
///
/// ```rust
/// use sitemeta_core::parse::Document;
///
/// let html = r#"<link type="application/atom+xml" href="/atom.xml">"#;
/// let doc = Document::parse(html);
/// let link = &doc.find_all("link")[0];
///
/// assert_eq!(link.tag_name(), "link");
/// assert_eq!(link.attr("href"), Some("/atom.xml"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all descendant text nodes, untouched.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute, or `None` if it is not present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Gets the lowercase tag name of this element.
    pub fn tag_name(&self) -> &'a str {
        self.element.value().name()
    }
}
