//! Deal entity.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{date, timestamp, DealStatus, Reference, Scalar, VisibleTo};

/// A Pipedrive deal.
///
/// Every field is optional so the same type serves as a create payload, a
/// partial update and a read result. Custom fields (40-character hash keys)
/// are kept in `custom_fields`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Deal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_user_id: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DealStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lost_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_to: Option<VisibleTo>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "date")]
    pub expected_close_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp")]
    pub add_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp")]
    pub update_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp")]
    pub stage_change_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp")]
    pub close_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp")]
    pub won_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp")]
    pub lost_time: Option<NaiveDateTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_activity_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weighted_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc_email: Option<String>,

    #[serde(flatten)]
    pub custom_fields: Map<String, Value>,
}

impl Deal {
    /// A create payload with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

/// One entry of a deal's update history (`/deals/{id}/flow`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DealFlowEntry {
    pub object: String,
    #[serde(with = "timestamp")]
    pub timestamp: Option<NaiveDateTime>,
    pub data: Value,
}

/// Options for [`merge`](crate::ResourceClient::merge).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MergeOptions {
    pub merge_with_id: u64,
}

/// Match returned by `/deals/find`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DealMatch {
    pub id: u64,
    pub title: String,
    pub user_id: Option<u64>,
    pub person_id: Option<u64>,
    pub person_name: Option<String>,
    pub org_id: Option<u64>,
    pub organization_name: Option<String>,
    pub value: Option<f64>,
    pub currency: Option<String>,
    pub formatted_value: Option<String>,
    pub status: Option<DealStatus>,
    pub visible_to: Option<VisibleTo>,
}
