//! Runtime configuration loaded from an optional YAML file.
//!
//! Every field has a default, so the application runs without any config
//! file at all. A file given via `--config` may override any subset:
//!
//! ```yaml
//! base_url: https://ekantipur.com
//! request_timeout_secs: 30
//! max_concurrent_fetches: 12
//! ```

use serde::Deserialize;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Site base URL used when no config file overrides it.
pub const DEFAULT_BASE_URL: &str = "https://ekantipur.com";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL the channel path is appended to.
    pub base_url: String,
    /// Per-request timeout applied to the HTTP client.
    pub request_timeout_secs: u64,
    /// Cap on concurrently in-flight article fetches.
    pub max_concurrent_fetches: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
            max_concurrent_fetches: 12,
        }
    }
}

/// Load configuration from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as YAML.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn load_config(path: &str) -> Result<AppConfig, Box<dyn Error>> {
    let raw = fs::read_to_string(path).await?;
    let config: AppConfig = serde_yaml::from_str(&raw)?;
    info!(base_url = %config.base_url, "Loaded configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "https://ekantipur.com");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.max_concurrent_fetches, 12);
    }

    #[test]
    fn test_partial_yaml_overrides_defaults() {
        let config: AppConfig =
            serde_yaml::from_str("base_url: http://localhost:8080\n").unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.max_concurrent_fetches, 12);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "base_url: https://example.com\nrequest_timeout_secs: 5\nmax_concurrent_fetches: 3\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.max_concurrent_fetches, 3);
    }
}
