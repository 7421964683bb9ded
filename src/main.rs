//! # eKantipur Feed
//!
//! A full-article feed generator for [ekantipur.com](https://ekantipur.com):
//! fetches a channel's listing page, scrapes every listed article's own
//! page for its headline and body HTML, and emits the result as an RSS 2.0
//! or JSON feed.
//!
//! ## Usage
//!
//! ```sh
//! ekantipur_feed news -o news.xml
//! ```
//!
//! ## Architecture
//!
//! The application is a linear pipeline with one fan-out stage:
//! 1. **Indexing**: Parse the channel listing into ordered article stubs
//! 2. **Enrichment**: Fetch the article pages concurrently (bounded,
//!    cached, order-preserving) to fill in titles and body HTML
//! 3. **Assembly**: Wrap the enriched articles into a feed record
//! 4. **Output**: Render RSS or JSON to a file or stdout

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cache;
mod cli;
mod config;
mod feed;
mod fetch;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cache::ResponseCache;
use cli::{Cli, OutputFormat};
use config::AppConfig;
use scrapers::ekantipur;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("ekantipur_feed starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    if args.list_channels {
        for channel in ekantipur::CHANNELS {
            println!("{channel}");
        }
        return Ok(());
    }

    // --- Load configuration ---
    let mut config = match args.config.as_deref() {
        Some(path) => config::load_config(path).await?,
        None => AppConfig::default(),
    };
    if let Some(limit) = args.max_concurrency {
        config.max_concurrent_fetches = limit;
    }
    debug!(?config, "Effective configuration");

    let client = fetch::build_client(&config)?;
    let cache = ResponseCache::new();

    // ---- Index and enrich articles ----
    let stubs = ekantipur::index_articles(&client, &config, &args.channel).await?;
    let articles = ekantipur::fetch_articles(&client, &config, &cache, stubs).await?;

    // ---- Assemble and emit the feed ----
    let feed = feed::assemble(&config.base_url, &args.channel, articles);
    let rendered = match args.format {
        OutputFormat::Rss => outputs::rss::render(&feed)?,
        OutputFormat::Json => outputs::json::render(&feed)?,
    };
    outputs::write(&rendered, args.output.as_deref()).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        channel = %args.channel,
        items = feed.items.len(),
        "Execution complete"
    );

    Ok(())
}
