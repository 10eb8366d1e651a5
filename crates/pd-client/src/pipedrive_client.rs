//! High-level Pipedrive client: the generic request/response pipeline.
//!
//! `PipedriveClient` combines an [`ApiConfig`] with an [`HttpClient`] and
//! exposes one generic [`call`](PipedriveClient::call): build the request,
//! inject the token, send it once and decode the envelope.
//!
//! ## Security
//!
//! - The API token is redacted in Debug output
//! - Spans and error messages only ever see redacted URLs

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{instrument, Span};

use crate::client::HttpClient;
use crate::config::{ApiConfig, ClientConfig};
use crate::endpoint::Endpoint;
use crate::envelope::{decode, ApiResponse};
use crate::error::Result;
use crate::request::{RequestBuilder, RequestMethod};
use crate::security::redact_url;

/// Pipedrive API client.
///
/// Cheap to clone; clones share the connection pool and the read-only
/// configuration. Safe to use from many tasks at once.
///
/// # Example
///
/// ```rust,ignore
/// use pipedrive_api_client::{Endpoint, PipedriveClient};
///
/// let client = PipedriveClient::from_env()?;
/// let deal: serde_json::Value = client
///     .fetch(&Endpoint::get("/deals/42"))
///     .await?
///     .into_data();
/// ```
#[derive(Clone)]
pub struct PipedriveClient {
    http: HttpClient,
    api: ApiConfig,
}

impl std::fmt::Debug for PipedriveClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipedriveClient")
            .field("base_url", &self.api.base_url())
            .field("api_token", &"[REDACTED]")
            .field("auth_mode", &self.api.auth_mode())
            .finish_non_exhaustive()
    }
}

impl PipedriveClient {
    /// Create a client for the given base URL and API token.
    pub fn new(base_url: &str, api_token: impl Into<String>) -> Result<Self> {
        Self::with_config(ApiConfig::new(base_url, api_token)?, ClientConfig::default())
    }

    /// Create a client with custom transport configuration.
    pub fn with_config(api: ApiConfig, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
            api,
        })
    }

    /// Create a client over an existing transport.
    pub fn from_parts(api: ApiConfig, http: HttpClient) -> Self {
        Self { http, api }
    }

    /// Create a client from `PIPEDRIVE_API_TOKEN` / `PIPEDRIVE_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ApiConfig::from_env()?, ClientConfig::default())
    }

    /// The account configuration.
    pub fn api_config(&self) -> &ApiConfig {
        &self.api
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    /// The underlying transport.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Build the full URL for a path: always `base_url + path`.
    ///
    /// Absolute URLs are not followed, so the token never leaves the
    /// configured host.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url(), path)
        } else {
            format!("{}/{}", self.base_url(), path)
        }
    }

    /// Start a request for `path` with the token attached.
    pub fn request(&self, method: RequestMethod, path: &str) -> RequestBuilder {
        RequestBuilder::new(method, self.url(path))
            .api_token(self.api.api_token(), self.api.auth_mode())
    }

    /// Build the request for an endpoint and optional JSON body.
    ///
    /// Pure. The only failure is a body that cannot be encoded.
    pub fn build_request<B>(&self, endpoint: &Endpoint, body: Option<&B>) -> Result<RequestBuilder>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.request(endpoint.method(), endpoint.path());
        for (name, value) in endpoint.query_pairs() {
            request = request.query(name.as_str(), value.as_str());
        }
        match body {
            Some(body) => request.json(body),
            None => Ok(request),
        }
    }

    /// Send a prepared request and decode the envelope into `T`.
    #[instrument(skip_all, fields(method = %request.method(), url = tracing::field::Empty))]
    pub async fn send<T>(&self, request: RequestBuilder) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Default,
    {
        let redacted = redact_url(&request.full_url()?);
        Span::current().record("url", redacted.as_str());

        let response = self.http.execute(&request).await?;
        decode(request.method(), &redacted, &response)
    }

    /// Run one API call: build, authenticate, send once, decode.
    pub async fn call<B, T>(&self, endpoint: &Endpoint, body: Option<&B>) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let request = self.build_request(endpoint, body)?;
        self.send(request).await
    }

    /// [`call`](Self::call) without a body.
    pub async fn fetch<T>(&self, endpoint: &Endpoint) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Default,
    {
        self.call::<(), T>(endpoint, None).await
    }

    /// GET a path and return the unwrapped `data`.
    pub async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        Ok(self.fetch(&Endpoint::get(path)).await?.into_data())
    }

    /// POST a JSON body to a path and return the unwrapped `data`.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        Ok(self.call(&Endpoint::post(path), Some(body)).await?.into_data())
    }

    /// PUT a JSON body to a path and return the unwrapped `data`.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        Ok(self.call(&Endpoint::put(path), Some(body)).await?.into_data())
    }

    /// DELETE a path and return the unwrapped `data`.
    pub async fn delete_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        Ok(self.fetch(&Endpoint::delete(path)).await?.into_data())
    }
}
