//! Command-line interface definitions for the eKantipur feed generator.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use crate::scrapers::ekantipur::DEFAULT_CHANNEL;
use clap::{Parser, ValueEnum};

/// Command-line arguments for the eKantipur feed generator.
///
/// # Examples
///
/// ```sh
/// # Full-article RSS for the default channel (news) on stdout
/// ekantipur_feed
///
/// # JSON feed for the business channel, written to a file
/// ekantipur_feed business -f json -o business.json
///
/// # Known channels
/// ekantipur_feed --list-channels
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Channel to fetch; see --list-channels for the site menu
    #[arg(default_value = DEFAULT_CHANNEL)]
    pub channel: String,

    /// Output file path; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "rss")]
    pub format: OutputFormat,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Cap on concurrent article fetches (overrides the config file)
    #[arg(long)]
    pub max_concurrency: Option<usize>,

    /// Print the known channels and exit
    #[arg(long)]
    pub list_channels: bool,
}

/// Serialization format for the assembled feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// RSS 2.0 XML document
    Rss,
    /// Pretty-printed JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["ekantipur_feed"]);
        assert_eq!(cli.channel, "news");
        assert_eq!(cli.format, OutputFormat::Rss);
        assert!(cli.output.is_none());
        assert!(!cli.list_channels);
    }

    #[test]
    fn test_cli_channel_and_flags() {
        let cli = Cli::parse_from([
            "ekantipur_feed",
            "business",
            "-f",
            "json",
            "-o",
            "/tmp/business.json",
            "--max-concurrency",
            "4",
        ]);

        assert_eq!(cli.channel, "business");
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.output.as_deref(), Some("/tmp/business.json"));
        assert_eq!(cli.max_concurrency, Some(4));
    }

    #[test]
    fn test_cli_list_channels() {
        let cli = Cli::parse_from(["ekantipur_feed", "--list-channels"]);
        assert!(cli.list_channels);
    }
}
