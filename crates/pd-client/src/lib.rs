//! # pd-client
//!
//! Core HTTP pipeline for the Pipedrive CRM API.
//!
//! Every call goes through the same four steps:
//!
//! ```text
//! Endpoint + body ──► RequestBuilder ──► HttpClient ──► envelope::decode ──► ApiResponse<T>
//!                     (query pairs,      (one send,     (success/status      or Error
//!                      api_token,         no retry)      rule, error shape)
//!                      JSON body)
//! ```
//!
//! Resource-specific endpoints live in `pd-rest`; this crate only knows about
//! paths, query pairs, JSON bodies and the `{success, data, error, ...}`
//! envelope.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pipedrive_api_client::{Endpoint, PipedriveClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pipedrive_api_client::Error> {
//!     let client = PipedriveClient::from_env()?;
//!
//!     let response = client
//!         .fetch::<Vec<serde_json::Value>>(&Endpoint::get("/deals").query("limit", 10))
//!         .await?;
//!
//!     println!("{} deals, more: {}", response.data.len(), response.has_more());
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod endpoint;
pub mod envelope;
mod error;
mod pipedrive_client;
mod request;
mod response;
pub mod security;

pub use client::HttpClient;
pub use config::{
    ApiConfig, AuthMode, ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, ENV_API_KEY,
    ENV_API_TOKEN, ENV_BASE_URL,
};
pub use endpoint::Endpoint;
pub use envelope::{
    AdditionalData, ApiErrorPayload, ApiResponse, ErrorObject, Pagination, UserContext,
};
pub use error::{Error, ErrorKind, Result};
pub use pipedrive_client::PipedriveClient;
pub use request::{encode_query, RequestBuilder, RequestMethod, AUTH_HEADER, AUTH_QUERY_PARAM};
pub use response::{RateLimit, Response};

/// Default User-Agent string.
pub const USER_AGENT: &str = concat!("pipedrive-api/", env!("CARGO_PKG_VERSION"));
