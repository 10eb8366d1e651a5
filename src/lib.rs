//! # pipedrive-api
//!
//! A typed Pipedrive CRM API client library for Rust.
//!
//! Every call is a single HTTP exchange: the API token is attached as the
//! `api_token` query parameter (or the `x-api-token` header), the response
//! envelope is checked, and `data` is decoded into the caller's type. There
//! are no retries; failures are reported as typed errors.
//!
//! ## Security
//!
//! - The API token is redacted in Debug output
//! - URLs in errors and logs carry `[REDACTED]` in place of the token
//! - Error messages taken from response bodies are scrubbed; `Display` output is truncated
//!
//! ## Crates
//!
//! - **pipedrive-api-client** - HTTP transport, configuration, envelope decoding, errors
//! - **pipedrive-api-rest** - Deals, persons, organizations, notes, activities, search
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pipedrive_api::{Deal, PipedriveRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads PIPEDRIVE_API_TOKEN and optionally PIPEDRIVE_BASE_URL
//!     let client = PipedriveRestClient::from_env()?;
//!
//!     let deal = client.deals().create(&Deal::new("New deal")).await?;
//!     println!("created deal {:?}", deal.id);
//!
//!     Ok(())
//! }
//! ```

#[cfg(feature = "client")]
pub use pipedrive_api_client as client;
#[cfg(feature = "rest")]
pub use pipedrive_api_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use pipedrive_api_client::{
    ApiConfig, ApiResponse, AuthMode, ClientConfig, Error, ErrorKind, PipedriveClient, Result,
};
#[cfg(feature = "rest")]
pub use pipedrive_api_rest::{
    Activity, BulkDeletePolicy, BulkDeleteResult, Deal, ListOptions, Note, Organization, Page,
    Person, PipedriveRestClient, SearchOptions,
};
