//! Note entity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::timestamp;

/// A note attached to a deal, person or organization.
///
/// On create, `content` and at least one of `deal_id`, `person_id` or
/// `org_id` are required by the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_to_deal_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_to_person_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_to_organization_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp")]
    pub add_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp")]
    pub update_time: Option<NaiveDateTime>,

    /// Expanded `deal`, `person`, `organization` and `user` objects.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Note {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn for_deal(content: impl Into<String>, deal_id: u64) -> Self {
        Self {
            deal_id: Some(deal_id),
            ..Self::new(content)
        }
    }
}
