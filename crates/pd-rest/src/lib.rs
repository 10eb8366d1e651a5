//! # pipedrive-api-rest
//!
//! Typed Pipedrive REST resources on top of `pipedrive-api-client`.
//!
//! ## Features
//!
//! - **CRUD** - Create, get, update and delete deals, persons, organizations,
//!   notes and activities through one generic resource client
//! - **Bulk delete** - Comma-separated id lists with per-id confirmation
//! - **Pagination** - Single pages or every page with `list_all`
//! - **Search** - Per-resource search, `/itemSearch` and the legacy
//!   `/searchResults` endpoints
//! - **Deal extras** - Update history, duplicate, merge, followers,
//!   participants, attached products and find
//!
//! ## Example
//!
//! ```rust,ignore
//! use pipedrive_api_rest::{Deal, PipedriveRestClient, SearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pipedrive_api_rest::Error> {
//!     let client = PipedriveRestClient::new("https://api.pipedrive.com/v1", "token")?;
//!
//!     // Create
//!     let deal = client.deals().create(&Deal::new("New deal")).await?;
//!     let id = deal.id.unwrap_or_default();
//!
//!     // Search
//!     let hits = client.deals().search(&SearchOptions::new("New deal")).await?;
//!     println!("{} hits", hits.items.len());
//!
//!     // Delete
//!     client.deals().delete(id).await?;
//!
//!     Ok(())
//! }
//! ```

mod bulk;
mod client;
pub mod endpoint;
pub mod types;

// Main client
pub use client::{PipedriveRestClient, ResourceClient};

// Resource table
pub use endpoint::{
    Activities, Deals, Notes, Operation, Organizations, Persons, Resource, Searchable,
};

// Bulk delete
pub use bulk::{BulkDeletePolicy, BulkDeleteResult};

// Entity and search types
pub use types::{
    Activity, ContactField, Deal, DealFlowEntry, DealMatch, DealSearchItem, DealStatus,
    ExpandedReference, FieldSearchHit, FieldSearchOptions, ItemRef, ItemSearchHit,
    ItemSearchOptions, ListOptions, MatchedContent, MatchedFields, MergeOptions, Note,
    Organization, OrganizationSearchItem, Page, Person, PersonSearchItem, Reference, Scalar,
    SearchFieldType, SearchItem, SearchOptions, SearchResult, SearchResults,
    SearchResultsOptions, VisibleTo,
};

// Re-export from pipedrive-api-client
pub use pipedrive_api_client::{
    AdditionalData, ApiConfig, ApiResponse, AuthMode, ClientConfig, Error, ErrorKind, Pagination,
    RateLimit, Result,
};
