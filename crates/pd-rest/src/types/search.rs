//! Search request options and result shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{DealStatus, VisibleTo};

/// Options for `/{resource}/search`.
///
/// `term` must be at least 2 characters, or 1 with `exact_match`. The server
/// enforces this and answers with a structured error otherwise.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchOptions {
    pub term: String,
    /// Comma-separated field names to search in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DealStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl SearchOptions {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Default::default()
        }
    }

    pub fn fields(mut self, fields: &[&str]) -> Self {
        self.fields = Some(fields.join(","));
        self
    }

    pub fn exact_match(mut self, exact: bool) -> Self {
        self.exact_match = Some(exact);
        self
    }

    pub fn person_id(mut self, id: u64) -> Self {
        self.person_id = Some(id);
        self
    }

    pub fn organization_id(mut self, id: u64) -> Self {
        self.organization_id = Some(id);
        self
    }

    pub fn status(mut self, status: DealStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn include_fields(mut self, fields: &[&str]) -> Self {
        self.include_fields = Some(fields.join(","));
        self
    }

    pub fn start(mut self, start: u64) -> Self {
        self.start = Some(start);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// `data` of a search response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResults<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<SearchItem<T>>,
    /// Only filled by `/itemSearch` when related items are requested.
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub related_items: Vec<SearchItem<T>>,
}

impl<T> Default for SearchResults<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            related_items: Vec::new(),
        }
    }
}

/// One hit with its relevance score.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchItem<T> {
    #[serde(default)]
    pub result_score: f64,
    pub item: T,
}

/// Minimal nested object in search hits (`owner`, `stage`, `person`, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ItemRef {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Deal as returned by deal search.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DealSearchItem {
    pub id: u64,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub title: String,
    pub value: Option<f64>,
    pub currency: Option<String>,
    pub status: Option<DealStatus>,
    pub visible_to: Option<VisibleTo>,
    pub owner: Option<ItemRef>,
    pub stage: Option<ItemRef>,
    pub person: Option<ItemRef>,
    pub organization: Option<ItemRef>,
    pub custom_fields: Vec<Value>,
    pub notes: Vec<Value>,
}

/// Person as returned by person search.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PersonSearchItem {
    pub id: u64,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub name: String,
    #[serde(alias = "phone")]
    pub phones: Vec<String>,
    #[serde(alias = "email")]
    pub emails: Vec<String>,
    pub visible_to: Option<VisibleTo>,
    pub owner: Option<ItemRef>,
    pub organization: Option<ItemRef>,
    pub custom_fields: Vec<Value>,
    pub notes: Vec<Value>,
}

/// Organization as returned by organization search.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OrganizationSearchItem {
    pub id: u64,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub name: String,
    pub address: Option<String>,
    pub visible_to: Option<VisibleTo>,
    pub owner: Option<ItemRef>,
    pub custom_fields: Vec<Value>,
    pub notes: Vec<Value>,
}

/// A hit from `/itemSearch`, keyed by its `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemSearchHit {
    Deal(DealSearchItem),
    Person(PersonSearchItem),
    Organization(OrganizationSearchItem),
    /// Products, files, leads and other types this crate does not model.
    #[serde(other)]
    Other,
}

/// Options for `/itemSearch`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemSearchOptions {
    pub term: String,
    /// Comma-separated item types: `deal,person,organization,...`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_types: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_for_related_items: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl ItemSearchOptions {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Default::default()
        }
    }

    pub fn item_types(mut self, types: &[SearchFieldType]) -> Self {
        let names: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
        self.item_types = Some(names.join(","));
        self
    }

    pub fn exact_match(mut self, exact: bool) -> Self {
        self.exact_match = Some(exact);
        self
    }

    pub fn related_items(mut self, related: bool) -> Self {
        self.search_for_related_items = Some(related);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Which entity's field a field search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchFieldType {
    #[serde(rename = "dealField")]
    Deal,
    #[serde(rename = "personField")]
    Person,
    #[serde(rename = "organizationField")]
    Organization,
    #[serde(rename = "productField")]
    Product,
}

impl SearchFieldType {
    /// Item type name as used by `item_types`.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchFieldType::Deal => "deal",
            SearchFieldType::Person => "person",
            SearchFieldType::Organization => "organization",
            SearchFieldType::Product => "product",
        }
    }
}

/// Options for `/itemSearch/field` and `/searchResults/field`.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSearchOptions {
    pub term: String,
    pub field_type: SearchFieldType,
    /// Field key from the `*Fields` endpoints, e.g. `title` or a custom field hash.
    pub field_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_match: Option<bool>,
    /// Return matching item ids instead of distinct values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_item_ids: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl FieldSearchOptions {
    pub fn new(
        term: impl Into<String>,
        field_type: SearchFieldType,
        field_key: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            field_type,
            field_key: field_key.into(),
            exact_match: None,
            return_item_ids: None,
            start: None,
            limit: None,
        }
    }

    pub fn exact_match(mut self, exact: bool) -> Self {
        self.exact_match = Some(exact);
        self
    }

    pub fn return_item_ids(mut self, ids: bool) -> Self {
        self.return_item_ids = Some(ids);
        self
    }
}

/// A field search match: the field value and, when requested, the item id.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FieldSearchHit {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(flatten)]
    pub values: Map<String, Value>,
}

/// Options for `/searchResults`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResultsOptions {
    pub term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl SearchResultsOptions {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Default::default()
        }
    }

    pub fn item_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }
}

/// Entry of the legacy `/searchResults` endpoints.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub item_type: String,
    pub id: u64,
    pub source: Option<String>,
    pub result_score: f64,
    pub title: Option<String>,
    pub notes: Option<MatchedContent>,
    pub fields: Option<MatchedFields>,
    pub details: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchedContent {
    pub count: u64,
    pub content: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchedFields {
    pub count: u64,
    pub names: Vec<Value>,
}
