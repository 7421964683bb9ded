//! Utility functions for text cleanup and logging.
//!
//! This module provides helper functions used throughout the application:
//! - Whitespace normalization for text scraped out of HTML
//! - String truncation for bounded log previews

use once_cell::sync::Lazy;
use regex::Regex;

static WS_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapse runs of whitespace in scraped text into single spaces.
///
/// Text extracted from HTML carries the markup's indentation and line
/// breaks. This trims the ends and collapses every internal whitespace
/// run so titles and author names read as a single line.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_ws("  Title\n    A  "), "Title A");
/// ```
pub fn normalize_ws(s: &str) -> String {
    WS_RUN.replace_all(s.trim(), " ").into_owned()
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to at most `max` bytes (backing off to the
/// nearest character boundary) with an ellipsis and byte count indicator
/// appended.
///
/// # Arguments
///
/// * `s` - The string to potentially truncate
/// * `max` - Maximum number of bytes to keep
///
/// # Returns
///
/// The original string if within `max` bytes, otherwise a truncated
/// version with `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}
