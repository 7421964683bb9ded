//! Channel scraping: selector sets and generic extraction helpers.
//!
//! Site scraping follows a two-phase pattern:
//!
//! 1. **Indexing**: Parse a channel listing page into ordered article stubs
//! 2. **Enrichment**: Fetch each article page to fill in the full title
//!    and body
//!
//! The site-specific knowledge (which CSS selectors identify a listing
//! entry, a byline, a headline, a content block) lives in the per-site
//! module as typed selector sets ([`ListingSelectors`],
//! [`ArticleSelectors`]). The routines in this module consume those sets
//! generically: text extraction, inner-HTML extraction, node stripping,
//! and absolute-URL joining. A selector that matches nothing yields an
//! empty string, never an error.

pub mod ekantipur;

use crate::utils::normalize_ws;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Selector set for a channel listing page.
#[derive(Debug)]
pub struct ListingSelectors {
    /// One node per listing entry.
    pub entry: Selector,
    /// Anchor inside an entry; the first match supplies title and href.
    pub link: Selector,
    /// Byline node inside an entry.
    pub author: Selector,
}

/// Selector set for an article page.
#[derive(Debug)]
pub struct ArticleSelectors {
    /// Heading node supplying the full article title.
    pub headline: Selector,
    /// Content container; the first match's inner HTML is the body.
    pub content: Selector,
    /// Nodes detached from the document before content extraction.
    pub strip: Vec<Selector>,
}

/// Parse a selector string that is known valid at compile time.
pub(crate) fn sel(raw: &str) -> Selector {
    Selector::parse(raw).expect("valid selector")
}

/// Whitespace-normalized text of an element's text nodes.
pub fn element_text(element: ElementRef<'_>) -> String {
    normalize_ws(&element.text().collect::<Vec<_>>().join(" "))
}

/// Text of the first node under `scope` matching `selector`, or `""`.
pub fn first_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// Inner HTML of the first node under `scope` matching `selector`, or `""`.
pub fn first_inner_html(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(|node| node.inner_html())
        .unwrap_or_default()
}

/// Detach every node matching one of `selectors` from the document.
///
/// Detached nodes no longer appear in any later traversal, so stripped
/// fragments cannot leak into extracted text or inner HTML.
pub fn strip_nodes(document: &mut Html, selectors: &[Selector]) {
    let ids: Vec<_> = selectors
        .iter()
        .flat_map(|selector| document.select(selector).map(|node| node.id()))
        .collect();
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Join a possibly-relative href against the site base URL.
///
/// Falls back to the base URL itself when the href does not join, so the
/// result is always an absolute URL.
pub fn absolute_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|url| url.to_string())
        .unwrap_or_else(|_| base.to_string())
}
