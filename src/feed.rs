//! Feed assembly.
//!
//! The last, purely computational stage of the pipeline: wrap the enriched
//! articles of one channel into a titled, linked [`Feed`] record.

use crate::models::{Article, Feed};
use crate::scrapers::ekantipur::listing_url;

/// Assemble the feed for a channel from its enriched articles.
///
/// `title` is `"Ekantipur - {channel}"`, `link` is the channel's listing
/// URL, and the items are passed through in listing order. No side
/// effects, no failure modes.
pub fn assemble(base_url: &str, channel: &str, items: Vec<Article>) -> Feed {
    Feed {
        title: format!("Ekantipur - {channel}"),
        link: listing_url(base_url, channel),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            link: format!("https://ekantipur.com/news/{title}"),
            author: "X".to_string(),
            category: "news".to_string(),
            description: "<p>body</p>".to_string(),
        }
    }

    #[test]
    fn test_assemble_title_and_link() {
        let feed = assemble("https://ekantipur.com", "business", vec![]);
        assert_eq!(feed.title, "Ekantipur - business");
        assert_eq!(feed.link, "https://ekantipur.com/business");
        assert!(feed.title.contains("business"));
    }

    #[test]
    fn test_assemble_preserves_item_order() {
        let feed = assemble(
            "https://ekantipur.com",
            "news",
            vec![article("first"), article("second"), article("third")],
        );
        let titles: Vec<_> = feed.items.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn test_assemble_with_trailing_slash_base() {
        let feed = assemble("https://ekantipur.com/", "news", vec![]);
        assert_eq!(feed.link, "https://ekantipur.com/news");
    }
}
