//! HTTP client construction and page fetching.
//!
//! All outbound requests go through one [`reqwest::Client`] built from the
//! application config. The client is handed down explicitly so tests can
//! point the pipeline at a mock server by overriding the base URL.

use crate::config::AppConfig;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, instrument};

/// Build the shared HTTP client from the application config.
///
/// Applies the configured per-request timeout and a crate-identifying
/// User-Agent header.
pub fn build_client(config: &AppConfig) -> Result<reqwest::Client, Box<dyn Error>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;
    Ok(client)
}

/// Fetch a page and return its body as text.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx response status.
#[instrument(level = "debug", skip(client))]
pub async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<String, Box<dyn Error>> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    debug!(bytes = body.len(), "Fetched page");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_html_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let client = build_client(&AppConfig::default()).unwrap();
        let body = fetch_html(&client, &format!("{}/page", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_fetch_html_errors_on_non_2xx() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_client(&AppConfig::default()).unwrap();
        let result = fetch_html(&client, &format!("{}/missing", server.uri())).await;
        assert!(result.is_err());
    }
}
