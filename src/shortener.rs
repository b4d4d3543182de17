//! is.gd URL shortening client.
//!
//! Shortening is best-effort: any failure (transport, non-2xx, malformed
//! body, service-side error message) yields the original URL so content
//! generation is never blocked on this collaborator.

use crate::llm::build_provider_client_with_timeout;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const ISGD_ENDPOINT: &str = "https://is.gd/create.php";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct ShortenResponse {
    shorturl: Option<String>,
    errormessage: Option<String>,
}

pub struct UrlShortener {
    client: Client,
    endpoint: String,
}

impl Default for UrlShortener {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl UrlShortener {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: build_provider_client_with_timeout(timeout),
            endpoint: ISGD_ENDPOINT.to_string(),
        }
    }

    /// Point at a different shortener endpoint (tests).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Shorten `url`, returning the original unchanged on any failure.
    pub async fn shorten(&self, url: &str) -> String {
        match self.try_shorten(url).await {
            Ok(short) => short,
            Err(e) => {
                tracing::warn!("URL shortening failed, using original URL: {e}");
                url.to_string()
            }
        }
    }

    async fn try_shorten(&self, url: &str) -> anyhow::Result<String> {
        // Reject garbage before it reaches the service.
        url::Url::parse(url)?;

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("format", "json"), ("url", url)])
            .send()
            .await?
            .error_for_status()?;

        let body: ShortenResponse = response.json().await?;

        if let Some(message) = body.errormessage {
            anyhow::bail!("is.gd rejected the URL: {message}");
        }

        body.shorturl
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow::anyhow!("is.gd response missing shorturl field"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_falls_back_to_input() {
        // Rejected locally by URL validation, so no runtime I/O is needed.
        let shortener = UrlShortener::default();
        let result = tokio_test::block_on(shortener.shorten("not a url at all"));
        assert_eq!(result, "not a url at all");
    }

    #[test]
    fn response_parses_shorturl() {
        let body = r#"{"shorturl":"https://is.gd/abc123"}"#;
        let parsed: ShortenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.shorturl.as_deref(), Some("https://is.gd/abc123"));
        assert!(parsed.errormessage.is_none());
    }

    #[test]
    fn response_parses_service_error() {
        let body = r#"{"errormessage":"Sorry, the URL you entered is on our internal blacklist."}"#;
        let parsed: ShortenResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.shorturl.is_none());
        assert!(parsed.errormessage.unwrap().contains("blacklist"));
    }
}
