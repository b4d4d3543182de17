use std::time::Duration;

const USER_AGENT: &str = concat!("oakwell-social/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for provider calls, bounded by a hard timeout so a
/// hung generator degrades to the fallback instead of blocking the caller.
#[must_use]
pub fn build_provider_client_with_timeout(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(5))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("HTTP client builder failed, falling back to a default client: {e}");
            reqwest::Client::new()
        })
}
