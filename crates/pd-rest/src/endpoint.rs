//! The resource endpoint table.
//!
//! Each resource is a marker type implementing [`Resource`]. Every CRUD
//! operation maps to the same (method, path template) pair for all of them:
//!
//! | Operation    | Method | Path                  |
//! |--------------|--------|-----------------------|
//! | `Create`     | POST   | `/{resource}`         |
//! | `Get`        | GET    | `/{resource}/{id}`    |
//! | `Update`     | PUT    | `/{resource}/{id}`    |
//! | `Delete`     | DELETE | `/{resource}/{id}`    |
//! | `DeleteMany` | DELETE | `/{resource}?ids=1,2` |
//! | `List`       | GET    | `/{resource}`         |
//! | `Search`     | GET    | `/{resource}/search`  |

use pipedrive_api_client::{Endpoint, RequestMethod};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::bulk::BulkDeletePolicy;
use crate::types::{
    Activity, Deal, DealSearchItem, Note, Organization, OrganizationSearchItem, Person,
    PersonSearchItem,
};

/// A Pipedrive resource collection.
pub trait Resource: Send + Sync + 'static {
    /// Collection path, e.g. `/deals`.
    const PATH: &'static str;

    /// How `delete_many` reports remote failures unless told otherwise.
    const BULK_DELETE_POLICY: BulkDeletePolicy = BulkDeletePolicy::Strict;

    /// The entity type read and written at this path.
    type Entity: Serialize + DeserializeOwned + Default + Send + Sync;
}

/// A resource with a `/{resource}/search` endpoint.
pub trait Searchable: Resource {
    /// Shape of one search hit.
    type Item: DeserializeOwned + Send + Sync;
}

/// Deals collection.
#[derive(Debug, Clone, Copy)]
pub struct Deals;

/// Persons collection.
#[derive(Debug, Clone, Copy)]
pub struct Persons;

/// Organizations collection.
#[derive(Debug, Clone, Copy)]
pub struct Organizations;

/// Notes collection.
#[derive(Debug, Clone, Copy)]
pub struct Notes;

/// Activities collection.
#[derive(Debug, Clone, Copy)]
pub struct Activities;

impl Resource for Deals {
    const PATH: &'static str = "/deals";
    type Entity = Deal;
}

impl Resource for Persons {
    const PATH: &'static str = "/persons";
    type Entity = Person;
}

impl Resource for Organizations {
    const PATH: &'static str = "/organizations";
    type Entity = Organization;
}

impl Resource for Notes {
    const PATH: &'static str = "/notes";
    type Entity = Note;
}

impl Resource for Activities {
    const PATH: &'static str = "/activities";
    type Entity = Activity;
}

impl Searchable for Deals {
    type Item = DealSearchItem;
}

impl Searchable for Persons {
    type Item = PersonSearchItem;
}

impl Searchable for Organizations {
    type Item = OrganizationSearchItem;
}

/// A CRUD operation on some resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Get(u64),
    Update(u64),
    Delete(u64),
    DeleteMany,
    List,
    Search,
}

impl Operation {
    /// Method and path suffix, with `{id}` standing for the entity id.
    pub fn route(self) -> (RequestMethod, &'static str) {
        match self {
            Operation::Create => (RequestMethod::Post, ""),
            Operation::Get(_) => (RequestMethod::Get, "/{id}"),
            Operation::Update(_) => (RequestMethod::Put, "/{id}"),
            Operation::Delete(_) => (RequestMethod::Delete, "/{id}"),
            Operation::DeleteMany => (RequestMethod::Delete, ""),
            Operation::List => (RequestMethod::Get, ""),
            Operation::Search => (RequestMethod::Get, "/search"),
        }
    }

    fn id(self) -> Option<u64> {
        match self {
            Operation::Get(id) | Operation::Update(id) | Operation::Delete(id) => Some(id),
            _ => None,
        }
    }

    /// The request descriptor of this operation on resource `R`.
    pub fn endpoint<R: Resource>(self) -> Endpoint {
        let (method, suffix) = self.route();
        let suffix = match self.id() {
            Some(id) => suffix.replace("{id}", &id.to_string()),
            None => suffix.to_string(),
        };
        Endpoint::new(method, format!("{}{}", R::PATH, suffix))
    }
}

/// Join ids as the single comma-separated value bulk endpoints expect.
pub fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
