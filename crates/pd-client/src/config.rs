//! Client configuration.
//!
//! Two layers: [`ApiConfig`] says *where* and *as whom* (base URL, token,
//! auth mode) and [`ClientConfig`] tunes the transport. Both are immutable
//! once a client is built from them.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::{Error, ErrorKind, Result};

/// Default Pipedrive API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.pipedrive.com/v1";

/// Environment variable holding the API token.
pub const ENV_API_TOKEN: &str = "PIPEDRIVE_API_TOKEN";
/// Alternative token variable name.
pub const ENV_API_KEY: &str = "PIPEDRIVE_API_KEY";
/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "PIPEDRIVE_BASE_URL";

/// Where the API token is placed on each request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// `api_token=<token>` query parameter.
    #[default]
    QueryParameter,
    /// `x-api-token: <token>` header. Keeps the token out of URLs and proxy logs.
    Header,
}

/// Base URL and credentials for a Pipedrive account.
#[derive(Clone)]
pub struct ApiConfig {
    base_url: Url,
    api_token: String,
    auth_mode: AuthMode,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &"[REDACTED]")
            .field("auth_mode", &self.auth_mode)
            .finish()
    }
}

impl ApiConfig {
    /// Create a validated configuration.
    ///
    /// The base URL must be an absolute http(s) URL and the token must be
    /// non-empty.
    pub fn new(base_url: &str, api_token: impl Into<String>) -> Result<Self> {
        let api_token = api_token.into();
        if api_token.trim().is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "API token must not be empty".to_string(),
            )));
        }

        let base_url = Url::parse(base_url.trim())?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(Error::new(ErrorKind::InvalidUrl(format!(
                "base URL must be an absolute http(s) URL: {base_url}"
            ))));
        }
        if base_url.host_str().is_none() {
            return Err(Error::new(ErrorKind::InvalidUrl(format!(
                "base URL has no host: {base_url}"
            ))));
        }

        Ok(Self {
            base_url,
            api_token,
            auth_mode: AuthMode::default(),
        })
    }

    /// Configuration against [`DEFAULT_BASE_URL`].
    pub fn with_token(api_token: impl Into<String>) -> Result<Self> {
        Self::new(DEFAULT_BASE_URL, api_token)
    }

    /// Load from `PIPEDRIVE_API_TOKEN` (or `PIPEDRIVE_API_KEY`) and the
    /// optional `PIPEDRIVE_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let api_token = std::env::var(ENV_API_TOKEN)
            .or_else(|_| std::env::var(ENV_API_KEY))
            .map_err(|_| Error::new(ErrorKind::EnvVar(ENV_API_TOKEN.to_string())))?;

        let base_url =
            std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self::new(&base_url, api_token)
    }

    /// Select where the token is sent.
    pub fn with_auth_mode(mut self, mode: AuthMode) -> Self {
        self.auth_mode = mode;
        self
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// The API token.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// Where the token is sent.
    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }
}

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Pool idle timeout.
    pub pool_idle_timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_max_idle_per_host: usize,
    /// User-Agent header value.
    pub user_agent: String,
    /// Accept gzip/deflate encoded responses.
    pub accept_compressed: bool,
    /// Whether to enable request/response tracing.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            user_agent: crate::USER_AGENT.to_string(),
            accept_compressed: true,
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set pool idle timeout.
    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    pub fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Accept compressed responses.
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.accept_compressed = enabled;
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.accept_compressed);
        assert!(config.user_agent.starts_with("pipedrive-api/"));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::builder()
            .with_timeout(Duration::from_secs(5))
            .with_pool_max_idle(2)
            .with_compression(false)
            .with_user_agent("my-app/1.0")
            .with_tracing(false)
            .build();

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.pool_max_idle_per_host, 2);
        assert!(!config.accept_compressed);
        assert_eq!(config.user_agent, "my-app/1.0");
        assert!(!config.enable_tracing);
    }

    #[test]
    fn test_api_config_trims_trailing_slash() {
        let config = ApiConfig::new("https://api.pipedrive.com/v1/", "token").unwrap();
        assert_eq!(config.base_url(), "https://api.pipedrive.com/v1");
        assert_eq!(config.auth_mode(), AuthMode::QueryParameter);

        let config = ApiConfig::new("http://127.0.0.1:8080", "token").unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_api_config_rejects_empty_token() {
        let err = ApiConfig::new(DEFAULT_BASE_URL, "  ").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Config(_)));
    }

    #[test]
    fn test_api_config_rejects_bad_urls() {
        for url in ["not a url", "/v1", "ftp://api.pipedrive.com", "mailto:me@example.com"] {
            let err = ApiConfig::new(url, "token").unwrap_err();
            assert!(
                matches!(err.kind, ErrorKind::InvalidUrl(_)),
                "{url} should be rejected, got {err}"
            );
        }
    }

    #[test]
    fn test_api_config_debug_redacts_token() {
        let config = ApiConfig::with_token("very-secret-token")
            .unwrap()
            .with_auth_mode(AuthMode::Header);

        let debug = format!("{config:?}");
        assert!(!debug.contains("very-secret-token"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("Header"));
    }
}
