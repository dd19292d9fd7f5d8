//! HTML document queries used by the content-based rules.
//!
//! [`PageDocument`] wraps a parsed `scraper::Html` and exposes the tag lists
//! the rules need: favicon links, images, anchors, link/script tags and form
//! actions.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::utils::parse_selector_with_fallback;

static LINK_REL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("link[rel]", "favicon links"));
static IMG_SRC_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("img[src]", "image sources"));
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("a", "anchors"));
static ANCHOR_HREF_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("a[href]", "anchor hrefs"));
static LINK_HREF_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("link[href]", "link hrefs"));
static SCRIPT_SRC_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("script[src]", "script sources"));
static FORM_ACTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("form[action]", "form actions"));

/// A parsed HTML page.
pub struct PageDocument {
    html: Html,
}

impl std::fmt::Debug for PageDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageDocument")
            .field("errors", &self.html.errors.len())
            .finish()
    }
}

impl PageDocument {
    /// Parses a response body.
    ///
    /// HTML parsing is error-recovering, so any body yields a document; an
    /// empty or tagless body yields one with no tags to query.
    pub fn parse(body: &str) -> Self {
        let html = Html::parse_document(body);
        if !html.errors.is_empty() {
            log::trace!("HTML parsed with {} recoverable errors", html.errors.len());
        }
        Self { html }
    }

    /// The `href` of the first `<link>` whose `rel` mentions `icon`.
    ///
    /// `Some("")` means an icon link without an `href`; `None` means no icon link.
    pub fn favicon_href(&self) -> Option<&str> {
        self.html
            .select(&LINK_REL_SELECTOR)
            .find(|link| {
                link.value()
                    .attr("rel")
                    .map(|rel| rel.to_ascii_lowercase().contains("icon"))
                    .unwrap_or(false)
            })
            .map(|link| link.value().attr("href").unwrap_or(""))
    }

    /// `src` values of `<img>` tags that have one.
    pub fn image_sources(&self) -> Vec<&str> {
        self.attr_values(&IMG_SRC_SELECTOR, "src")
    }

    /// `href` values of `<a>` tags that have one.
    pub fn anchor_hrefs(&self) -> Vec<&str> {
        self.attr_values(&ANCHOR_HREF_SELECTOR, "href")
    }

    /// Number of `<a>` tags, with or without `href`.
    pub fn anchor_count(&self) -> usize {
        self.html.select(&ANCHOR_SELECTOR).count()
    }

    /// `href` values of `<link>` tags that have one.
    pub fn link_hrefs(&self) -> Vec<&str> {
        self.attr_values(&LINK_HREF_SELECTOR, "href")
    }

    /// `src` values of `<script>` tags that have one.
    pub fn script_sources(&self) -> Vec<&str> {
        self.attr_values(&SCRIPT_SRC_SELECTOR, "src")
    }

    /// `action` values of `<form>` tags that have one (possibly empty).
    pub fn form_actions(&self) -> Vec<&str> {
        self.attr_values(&FORM_ACTION_SELECTOR, "action")
    }

    fn attr_values(&self, selector: &Selector, attr: &str) -> Vec<&str> {
        self.html
            .select(selector)
            .filter_map(|element| element.value().attr(attr))
            .collect()
    }
}
