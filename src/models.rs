//! Data models for article stubs, enriched articles, and the assembled feed.
//!
//! This module defines the core data structures used throughout the application:
//! - [`ArticleStub`]: Minimal article record harvested from a channel listing page
//! - [`Article`]: A stub enriched with the full title and body from the article page
//! - [`Feed`]: The terminal output record wrapping the enriched articles
//!
//! Every `link` field holds an absolute URL; relative hrefs from the listing
//! page are joined against the site base URL before a stub is created.

use serde::{Deserialize, Serialize};

/// A minimal article record harvested from a channel listing page.
///
/// Stubs carry whatever the listing page shows: the entry's anchor text as
/// a provisional title, the absolute article URL, the byline, and the
/// channel the listing was fetched for. The provisional title is replaced
/// during enrichment by the article page's own heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleStub {
    /// Anchor text of the listing entry's first link.
    pub title: String,
    /// Absolute URL of the article page.
    pub link: String,
    /// Byline text of the listing entry.
    pub author: String,
    /// The channel the entry was listed under.
    pub category: String,
}

impl ArticleStub {
    /// Combine this stub with the data extracted from the article page.
    ///
    /// The article page's heading replaces the listing title; `description`
    /// holds the article body as a raw HTML fragment.
    pub fn enrich(self, title: String, description: String) -> Article {
        Article {
            title,
            link: self.link,
            author: self.author,
            category: self.category,
            description,
        }
    }
}

/// A fully enriched article: listing metadata plus the article page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Heading text from the article page.
    pub title: String,
    /// Absolute URL of the article page.
    pub link: String,
    /// Byline text from the listing entry.
    pub author: String,
    /// The channel the article was listed under.
    pub category: String,
    /// Article body as a raw HTML fragment.
    pub description: String,
}

/// The assembled feed for one channel.
///
/// Serialized with the item sequence under the key `item`, matching the
/// normalized feed shape consumed downstream. Item order equals the order
/// entries appeared on the listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    /// Feed title, `"Ekantipur - {channel}"`.
    pub title: String,
    /// Absolute URL of the channel listing page.
    pub link: String,
    /// Enriched articles in listing order.
    #[serde(rename = "item")]
    pub items: Vec<Article>,
}
