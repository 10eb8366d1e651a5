//! Resource DTOs.
//!
//! Entities are flat bags of optional fields: `None` means "absent" and is
//! left out of outgoing JSON, so one type covers create, partial update and
//! read. Fields the API returns in more than one shape use [`Reference`] or
//! [`Scalar`].

mod activity;
pub mod common;
mod deal;
mod note;
mod organization;
mod person;
mod search;

pub use activity::Activity;
pub use common::{ContactField, DealStatus, ExpandedReference, Reference, Scalar, VisibleTo};
pub use deal::{Deal, DealFlowEntry, DealMatch, MergeOptions};
pub use note::Note;
pub use organization::Organization;
pub use person::Person;
pub use search::{
    DealSearchItem, FieldSearchHit, FieldSearchOptions, ItemRef, ItemSearchHit,
    ItemSearchOptions, MatchedContent, MatchedFields, OrganizationSearchItem, PersonSearchItem,
    SearchFieldType, SearchItem, SearchOptions, SearchResult, SearchResults,
    SearchResultsOptions,
};

use pipedrive_api_client::Pagination;
use serde::{Deserialize, Serialize};

/// Paging options for list endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Field names and directions, e.g. `title ASC, value DESC`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, start: u64) -> Self {
        self.start = Some(start);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

/// One page of a list or search.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    /// True when the server reported more items after this page.
    pub fn has_more(&self) -> bool {
        self.pagination
            .as_ref()
            .is_some_and(|p| p.more_items_in_collection)
    }

    /// Start offset of the next page, if any.
    pub fn next_start(&self) -> Option<u64> {
        let pagination = self.pagination.as_ref()?;
        if !pagination.more_items_in_collection {
            return None;
        }
        Some(
            pagination
                .next_start
                .unwrap_or(pagination.start + self.items.len() as u64),
        )
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: None,
        }
    }
}
