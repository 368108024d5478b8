//! Client configuration options.

use std::time::Duration;

use url::Url;

use crate::urls::DEFAULT_BASE_URL;

/// OAuth client identifier presented on every login attempt.
pub const DEFAULT_CLIENT_ID: &str = "c82SH0WZOsabOXGP2sxqcj34FxkvfnWRZBKlBjFS";

/// Configuration for the Robinhood client.
///
/// The timeout is applied uniformly to every request the client issues,
/// including the login, challenge, and refresh calls; there is no per-call
/// override.
///
/// # Example
///
/// ```
/// use robinhood_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Per-request timeout.
    pub timeout: Duration,
    /// API origin all requests must belong to.
    pub base_url: Url,
    /// OAuth client identifier.
    pub client_id: String,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            user_agent: format!("robinhood-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Point the client at a different API origin.
    ///
    /// Every request URL, including pagination `next` links, must belong to
    /// this origin.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the OAuth client identifier.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.client_id, DEFAULT_CLIENT_ID);
    }

    #[test]
    fn builder_overrides() {
        let base = Url::parse("http://127.0.0.1:9999/").unwrap();
        let config = ClientConfig::new()
            .with_timeout(Duration::from_millis(250))
            .with_base_url(base.clone())
            .with_client_id("test-client");
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.base_url, base);
        assert_eq!(config.client_id, "test-client");
    }
}
