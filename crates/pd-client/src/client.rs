//! Transport executor: sends a built request once and reads the whole body.

use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBuilder, AUTH_HEADER};
use crate::response::Response;
use crate::security::redact_url;

/// HTTP client for the Pipedrive API.
///
/// Wraps a `reqwest::Client`. Cloning is cheap and shares the connection pool.
/// Requests are sent exactly once; failures are returned to the caller.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client from a transport configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed);

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Use a caller-built `reqwest::Client` (proxies, custom TLS roots, ...).
    ///
    /// Timeouts and pooling then come from that client; `config` only drives
    /// tracing.
    pub fn from_reqwest(inner: reqwest::Client, config: ClientConfig) -> Self {
        Self { inner, config }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send the request once and read the response body.
    ///
    /// Any HTTP status is returned as a [`Response`]; judging it is the
    /// decoder's job. Only transport faults are errors here.
    #[instrument(skip_all, fields(method = %request.method))]
    pub async fn execute(&self, request: &RequestBuilder) -> Result<Response> {
        let url = request.full_url()?;
        let redacted = redact_url(&url);

        let mut req = self
            .inner
            .request(request.method.to_reqwest(), url)
            .header("Accept", "application/json");

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(token) = request.header_token() {
            req = req.header(AUTH_HEADER, token);
        }

        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        if let Some(timeout) = request.timeout {
            req = req.timeout(timeout);
        }

        if self.config.enable_tracing {
            debug!(url = %redacted, "Sending request");
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        if self.config.enable_tracing {
            debug!(status, bytes = body.len(), url = %redacted, "Response received");
        }

        Ok(Response::new(status, headers, body))
    }
}
