//! Output serialization for the assembled feed.
//!
//! This module contains submodules responsible for rendering the feed to
//! its output formats, plus the writer that puts the rendered document on
//! disk or stdout:
//!
//! # Submodules
//!
//! - [`rss`]: Renders the feed as an RSS 2.0 XML document
//! - [`json`]: Renders the feed as pretty-printed JSON

pub mod json;
pub mod rss;

use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Write a rendered feed document to `output`, or stdout when `None`.
#[instrument(level = "info", skip(content))]
pub async fn write(content: &str, output: Option<&str>) -> Result<(), Box<dyn Error>> {
    match output {
        Some(path) => {
            fs::write(path, content).await?;
            info!(path, bytes = content.len(), "Wrote feed");
        }
        None => println!("{content}"),
    }
    Ok(())
}
