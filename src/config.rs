//! Connection settings for the Bitstamp API client.

use std::time::Duration;

/// Production API base. Every endpoint path is joined to this.
pub const DEFAULT_BASE_URL: &str = "https://www.bitstamp.net/api/v2/";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`BitstampClient`](crate::BitstampClient).
///
/// The timeout applies per request. There is exactly one attempt per
/// call; callers that want retries wrap the client themselves.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Configuration with the production base URL and a 30s timeout.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
        }
    }

    /// Point the client at a different base URL (staging, a recording
    /// proxy). A missing trailing slash is added so path joining stays
    /// plain concatenation.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
