//! Pipedrive REST API client.
//!
//! This client wraps `PipedriveClient` from `pd-client` and hands out typed
//! per-resource clients. All resources share one generic implementation driven
//! by the endpoint table in [`crate::endpoint`].

use std::marker::PhantomData;

use pipedrive_api_client::{ApiConfig, ClientConfig, PipedriveClient};

use crate::endpoint::{Activities, Deals, Notes, Organizations, Persons, Resource};
use crate::Result;

mod deals;
mod resource;
mod search;

/// Pipedrive REST API client.
///
/// # Example
///
/// ```rust,ignore
/// use pipedrive_api_rest::{Deal, PipedriveRestClient};
///
/// let client = PipedriveRestClient::from_env()?;
///
/// let created = client.deals().create(&Deal::new("New deal")).await?;
/// let fetched = client.deals().get(created.id.unwrap_or_default()).await?;
/// client.deals().delete(fetched.id.unwrap_or_default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PipedriveRestClient {
    client: PipedriveClient,
}

impl PipedriveRestClient {
    /// Create a new REST client with the given base URL and API token.
    pub fn new(base_url: &str, api_token: impl Into<String>) -> Result<Self> {
        let client = PipedriveClient::new(base_url, api_token)?;
        Ok(Self { client })
    }

    /// Create a new REST client with custom HTTP configuration.
    pub fn with_config(api: ApiConfig, config: ClientConfig) -> Result<Self> {
        let client = PipedriveClient::with_config(api, config)?;
        Ok(Self { client })
    }

    /// Create a REST client from `PIPEDRIVE_API_TOKEN` / `PIPEDRIVE_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client: PipedriveClient::from_env()?,
        })
    }

    /// Create a REST client from an existing PipedriveClient.
    pub fn from_client(client: PipedriveClient) -> Self {
        Self { client }
    }

    /// Get the underlying PipedriveClient.
    pub fn inner(&self) -> &PipedriveClient {
        &self.client
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Typed client for any resource.
    pub fn resource<R: Resource>(&self) -> ResourceClient<'_, R> {
        ResourceClient {
            client: &self.client,
            _resource: PhantomData,
        }
    }

    pub fn deals(&self) -> ResourceClient<'_, Deals> {
        self.resource()
    }

    pub fn persons(&self) -> ResourceClient<'_, Persons> {
        self.resource()
    }

    pub fn organizations(&self) -> ResourceClient<'_, Organizations> {
        self.resource()
    }

    pub fn notes(&self) -> ResourceClient<'_, Notes> {
        self.resource()
    }

    pub fn activities(&self) -> ResourceClient<'_, Activities> {
        self.resource()
    }
}

/// Operations on one resource collection.
///
/// Borrowed from a [`PipedriveRestClient`]; cheap to create per call.
pub struct ResourceClient<'a, R: Resource> {
    client: &'a PipedriveClient,
    _resource: PhantomData<R>,
}

impl<R: Resource> Clone for ResourceClient<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ResourceClient<'_, R> {}

impl<R: Resource> std::fmt::Debug for ResourceClient<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceClient")
            .field("path", &R::PATH)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::PipedriveRestClient;
    use wiremock::MockServer;

    pub const TOKEN: &str = "1";

    pub fn client(server: &MockServer) -> PipedriveRestClient {
        PipedriveRestClient::new(&server.uri(), TOKEN).unwrap()
    }
}
