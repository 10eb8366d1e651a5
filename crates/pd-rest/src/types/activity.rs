//! Activity entity.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{date, timestamp};

/// A calendar activity (call, meeting, task, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Activity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Activity type key, e.g. `call` or `meeting`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "date")]
    pub due_date: Option<NaiveDate>,
    /// `HH:MM`, UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_time: Option<String>,
    /// `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<u64>,
    /// HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub busy_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp")]
    pub add_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp")]
    pub update_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp")]
    pub marked_as_done_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_title: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Activity {
    pub fn new(subject: impl Into<String>, activity_type: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            activity_type: Some(activity_type.into()),
            ..Default::default()
        }
    }
}
