//! JSON output generation.
//!
//! Serializes the assembled feed to pretty-printed JSON with the item
//! sequence under the `item` key.

use crate::models::Feed;
use std::error::Error;

/// Render a [`Feed`] as pretty-printed JSON.
pub fn render(feed: &Feed) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(feed)?)
}
