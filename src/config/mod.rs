//! Client configuration

use std::time::Duration;

/// Default API host for the marketplace endpoints
const DEFAULT_HOST: &str = "api.apiverve.com/v1";

/// Default per-request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a marketplace API client
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use zipdemographics::config::ClientConfig;
///
/// let config = ClientConfig::new("my-api-key")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key credential, sent in the `x-api-key` header
    pub api_key: String,

    /// Use HTTPS; disabling downgrades requests to plain HTTP
    pub secure: bool,

    /// Full base URL override (scheme included); when set, `secure` is ignored
    pub base_url: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with the default host, HTTPS, and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secure: true,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Toggle HTTPS for the default host
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Point the client at a different base URL (e.g. a test server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve the full URL for an endpoint path segment
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), endpoint),
            None => {
                let scheme = if self.secure { "https" } else { "http" };
                format!("{}://{}/{}", scheme, DEFAULT_HOST, endpoint)
            }
        }
    }
}
