//! Full-article scraper for [eKantipur](https://ekantipur.com) channels.
//!
//! eKantipur lists articles per channel at `https://ekantipur.com/{channel}`.
//! Listing entries only carry a short title and a byline, so building a
//! full-article feed takes the two-phase pattern: index the listing into
//! stubs, then fetch every article page to pull the real headline and the
//! body HTML. Article pages interleave sponsor links and injected widgets
//! with the content; those are stripped before extraction.
//!
//! # Channels
//!
//! | समाचार | अर्थ / वाणिज्य | विचार | खेलकुद | उपत्यका | मनोरञ्जन | फोटोफिचर | फिचर | विश्व | ब्लग |
//! | ---- | -------- | ------- | ------ | -------- | ------------- | ------------- | ------- | ----- | ---- |
//! | news | business | opinion | sports | national | entertainment | photo_feature | feature | world | blog |

use crate::cache::ResponseCache;
use crate::config::AppConfig;
use crate::fetch::fetch_html;
use crate::models::{Article, ArticleStub};
use crate::scrapers::{
    absolute_url, element_text, first_inner_html, first_text, sel, strip_nodes, ArticleSelectors,
    ListingSelectors,
};
use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt, TryStreamExt};
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::Html;
use std::error::Error;
use tracing::{debug, info, instrument};
use url::Url;

/// Channels from the ekantipur.com site menu.
///
/// Purely informational; any string is accepted as a channel and
/// interpolated into the listing URL.
pub const CHANNELS: &[&str] = &[
    "news",
    "business",
    "opinion",
    "sports",
    "national",
    "entertainment",
    "photo_feature",
    "feature",
    "world",
    "blog",
];

/// Channel used when none is given on the command line.
pub const DEFAULT_CHANNEL: &str = "news";

static LISTING: Lazy<ListingSelectors> = Lazy::new(|| ListingSelectors {
    entry: sel("article.normal"),
    link: sel("a"),
    author: sel("div.author"),
});

static ARTICLE: Lazy<ArticleSelectors> = Lazy::new(|| ArticleSelectors {
    headline: sel("h1.eng-text-heading"),
    content: sel("div.current-news-block"),
    strip: vec![sel("a.static-sponsor"), sel("div.ekans-wrapper")],
});

/// Absolute URL of a channel's listing page.
pub fn listing_url(base_url: &str, channel: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(channel)
    )
}

/// Index a channel listing page into ordered article stubs.
///
/// Fetches `{base_url}/{channel}` and turns every listing entry into an
/// [`ArticleStub`]: the first anchor's text is the provisional title, its
/// href joined against the base URL is the link, the byline node's text is
/// the author, and the channel stamps the category. Entries repeated on
/// the page (featured slots) are deduplicated by link, first occurrence
/// first.
///
/// An entry without an anchor still yields a stub with an empty title and
/// the base URL as its link; no validation is performed.
///
/// # Errors
///
/// Returns an error if the base URL does not parse or the listing fetch
/// fails.
#[instrument(level = "info", skip(client, config))]
pub async fn index_articles(
    client: &reqwest::Client,
    config: &AppConfig,
    channel: &str,
) -> Result<Vec<ArticleStub>, Box<dyn Error>> {
    let base = Url::parse(&config.base_url)?;
    let html = fetch_html(client, &listing_url(&config.base_url, channel)).await?;
    let document = Html::parse_document(&html);

    let stubs: Vec<ArticleStub> = document
        .select(&LISTING.entry)
        .map(|entry| {
            let anchor = entry.select(&LISTING.link).next();
            ArticleStub {
                title: anchor.map(element_text).unwrap_or_default(),
                link: anchor
                    .and_then(|a| a.value().attr("href"))
                    .map(|href| absolute_url(&base, href))
                    .unwrap_or_else(|| base.to_string()),
                author: first_text(entry, &LISTING.author),
                category: channel.to_string(),
            }
        })
        .unique_by(|stub| stub.link.clone())
        .collect();

    info!(count = stubs.len(), "Indexed listing entries");
    debug!(links = ?stubs.iter().map(|s| &s.link).collect::<Vec<_>>(), "Listing links");
    Ok(stubs)
}

/// Fetch and parse a single article page.
async fn enrich_article(
    client: &reqwest::Client,
    stub: ArticleStub,
) -> Result<Article, Box<dyn Error>> {
    let html = fetch_html(client, &stub.link).await?;
    let mut document = Html::parse_document(&html);

    strip_nodes(&mut document, &ARTICLE.strip);

    let title = first_text(document.root_element(), &ARTICLE.headline);
    let description = first_inner_html(document.root_element(), &ARTICLE.content);
    debug!(
        link = %stub.link,
        bytes = description.len(),
        preview = %truncate_for_log(&description, 120),
        "Extracted article content"
    );

    Ok(stub.enrich(title, description))
}

/// Enrich article stubs concurrently through the response cache.
///
/// Every stub is looked up in `cache` by link; on a miss the article page
/// is fetched and parsed, on a hit the previously computed article is
/// returned without a network call. At most
/// `config.max_concurrent_fetches` fetches are in flight at once, and the
/// returned articles keep the stubs' order regardless of completion order.
///
/// # Errors
///
/// The enrichments are joined all-or-nothing: the first failing item
/// aborts the batch and its error is returned. No partial result is
/// produced.
#[instrument(level = "info", skip_all, fields(count = stubs.len()))]
pub async fn fetch_articles(
    client: &reqwest::Client,
    config: &AppConfig,
    cache: &ResponseCache<Article>,
    stubs: Vec<ArticleStub>,
) -> Result<Vec<Article>, Box<dyn Error>> {
    let limit = config.max_concurrent_fetches.max(1);

    let articles: Vec<Article> = stream::iter(stubs)
        .map(|stub| {
            let key = stub.link.clone();
            async move {
                cache
                    .get_or_compute(&key, || enrich_article(client, stub))
                    .await
            }
        })
        .buffered(limit)
        .try_collect()
        .await?;

    info!(count = articles.len(), "Fetched article contents");
    Ok(articles)
}
