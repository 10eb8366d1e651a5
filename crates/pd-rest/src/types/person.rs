//! Person entity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{timestamp, ContactField, Reference, VisibleTo};

/// A Pipedrive person (contact).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Vec<ContactField>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Vec<ContactField>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_to: Option<VisibleTo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp")]
    pub add_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp")]
    pub update_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_deals_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_deals_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc_email: Option<String>,

    #[serde(flatten)]
    pub custom_fields: Map<String, Value>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// The primary email, or the first one.
    pub fn primary_email(&self) -> Option<&str> {
        primary(self.email.as_deref())
    }

    /// The primary phone number, or the first one.
    pub fn primary_phone(&self) -> Option<&str> {
        primary(self.phone.as_deref())
    }
}

fn primary(fields: Option<&[ContactField]>) -> Option<&str> {
    let fields = fields?;
    fields
        .iter()
        .find(|f| f.primary)
        .or_else(|| fields.first())
        .map(|f| f.value.as_str())
        .filter(|v| !v.is_empty())
}
