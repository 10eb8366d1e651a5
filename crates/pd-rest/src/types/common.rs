//! Field types shared by several resources.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// A foreign key to another Pipedrive object.
///
/// Writes take a bare id. Reads return either the id or an expanded object
/// such as `{"value": 12, "name": "Acme"}`, depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Id(u64),
    Expanded(ExpandedReference),
    Text(String),
}

/// Expanded form of a [`Reference`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ExpandedReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Reference {
    /// The referenced id, whichever form it arrived in.
    pub fn id(&self) -> Option<u64> {
        match self {
            Reference::Id(id) => Some(*id),
            Reference::Expanded(expanded) => expanded.value.or(expanded.id),
            Reference::Text(text) => text.trim().parse().ok(),
        }
    }

    /// Display name, only present on expanded references.
    pub fn name(&self) -> Option<&str> {
        match self {
            Reference::Expanded(expanded) => expanded.name.as_deref(),
            _ => None,
        }
    }
}

impl From<u64> for Reference {
    fn from(id: u64) -> Self {
        Reference::Id(id)
    }
}

// The API only accepts ids on write.
impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.id() {
            Some(id) => serializer.serialize_u64(id),
            None => match self {
                Reference::Text(text) => serializer.serialize_str(text),
                _ => serializer.serialize_none(),
            },
        }
    }
}

/// A value the API sends as number, string or boolean depending on context.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Scalar {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Integer(n) => Some(*n as f64),
            Scalar::Float(n) => Some(*n),
            Scalar::Text(text) => text.trim().parse().ok(),
            Scalar::Bool(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(n) => write!(f, "{n}"),
            Scalar::Float(n) => write!(f, "{n}"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Text(text) => f.write_str(text),
        }
    }
}

/// Visibility of a deal, person or organization.
///
/// Sent as a string; read from either a string or a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibleTo {
    /// Owner and followers only.
    OwnersAndFollowers,
    /// Entire company.
    EntireCompany,
    /// Visibility group codes used by larger plans.
    Other(u8),
}

impl VisibleTo {
    pub fn code(self) -> u8 {
        match self {
            VisibleTo::OwnersAndFollowers => 1,
            VisibleTo::EntireCompany => 3,
            VisibleTo::Other(code) => code,
        }
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            1 => VisibleTo::OwnersAndFollowers,
            3 => VisibleTo::EntireCompany,
            other => VisibleTo::Other(other),
        }
    }
}

impl Serialize for VisibleTo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code().to_string())
    }
}

impl<'de> Deserialize<'de> for VisibleTo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .map(VisibleTo::from_code)
                .ok_or_else(|| de::Error::custom(format!("invalid visible_to: {n}"))),
            Value::String(s) => s
                .trim()
                .parse::<u8>()
                .map(VisibleTo::from_code)
                .map_err(|_| de::Error::custom(format!("invalid visible_to: {s:?}"))),
            other => Err(de::Error::custom(format!("invalid visible_to: {other}"))),
        }
    }
}

/// Deal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStatus {
    Open,
    Won,
    Lost,
    Deleted,
    /// List filter only: everything except deleted deals.
    AllNotDeleted,
}

/// A phone number or email address of a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactField {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: String,
    pub primary: bool,
}

impl ContactField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: value.into(),
            primary: false,
        }
    }

    /// A contact marked as the primary one.
    pub fn primary(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            primary: true,
            ..Self::new(label, value)
        }
    }
}

/// Pipedrive `YYYY-MM-DD HH:MM:SS` timestamps (UTC).
///
/// `null` and `""` read as `None`. RFC 3339 is accepted on read.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&value.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => NaiveDateTime::parse_from_str(text, FORMAT)
                .or_else(|_| DateTime::parse_from_rfc3339(text).map(|dt| dt.naive_utc()))
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Pipedrive `YYYY-MM-DD` dates. `null` and `""` read as `None`.
pub mod date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&value.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use serde_json::json;

    #[test]
    fn test_reference_forms() {
        let id: Reference = serde_json::from_value(json!(12)).unwrap();
        assert_eq!(id.id(), Some(12));

        let expanded: Reference = serde_json::from_value(json!({
            "name": "Acme",
            "people_count": 3,
            "owner_id": 1,
            "address": null,
            "cc_email": "acme@pipedrivemail.com",
            "value": 12
        }))
        .unwrap();
        assert_eq!(expanded.id(), Some(12));
        assert_eq!(expanded.name(), Some("Acme"));

        let person: Reference = serde_json::from_value(json!({
            "name": "Jane",
            "email": [{"label": "work", "value": "jane@example.com", "primary": true}],
            "value": 7
        }))
        .unwrap();
        assert_eq!(person.id(), Some(7));

        let text: Reference = serde_json::from_value(json!("42")).unwrap();
        assert_eq!(text.id(), Some(42));
    }

    #[test]
    fn test_reference_serializes_as_id() {
        let expanded = Reference::Expanded(ExpandedReference {
            value: Some(12),
            name: Some("Acme".into()),
            ..Default::default()
        });
        assert_eq!(serde_json::to_value(&expanded).unwrap(), json!(12));
        assert_eq!(serde_json::to_value(Reference::from(5)).unwrap(), json!(5));
    }

    #[test]
    fn test_scalar() {
        let values: Vec<Scalar> =
            serde_json::from_value(json!([50, 12.5, "75", true])).unwrap();
        assert_eq!(values[0], Scalar::Integer(50));
        assert_eq!(values[1].as_f64(), Some(12.5));
        assert_eq!(values[2].as_f64(), Some(75.0));
        assert_eq!(values[3].as_f64(), None);
        assert_eq!(values[2].to_string(), "75");
    }

    #[test]
    fn test_visible_to() {
        let from_string: VisibleTo = serde_json::from_value(json!("3")).unwrap();
        let from_number: VisibleTo = serde_json::from_value(json!(1)).unwrap();
        let group: VisibleTo = serde_json::from_value(json!(7)).unwrap();

        assert_eq!(from_string, VisibleTo::EntireCompany);
        assert_eq!(from_number, VisibleTo::OwnersAndFollowers);
        assert_eq!(group, VisibleTo::Other(7));
        assert_eq!(serde_json::to_value(VisibleTo::EntireCompany).unwrap(), json!("3"));

        assert!(serde_json::from_value::<VisibleTo>(json!("everyone")).is_err());
    }

    #[test]
    fn test_deal_status() {
        assert_eq!(serde_json::to_value(DealStatus::Won).unwrap(), json!("won"));
        assert_eq!(
            serde_json::to_value(DealStatus::AllNotDeleted).unwrap(),
            json!("all_not_deleted")
        );
    }

    #[test]
    fn test_contact_field() {
        let phone = ContactField::primary("work", "+1 555 0100");
        assert_eq!(
            serde_json::to_value(&phone).unwrap(),
            json!({"label": "work", "value": "+1 555 0100", "primary": true})
        );

        let parsed: ContactField = serde_json::from_value(json!({"value": "a@b.c"})).unwrap();
        assert!(!parsed.primary);
        assert_eq!(parsed.label, None);
    }

    #[derive(Debug, Deserialize, Serialize)]
    struct Stamped {
        #[serde(default, with = "timestamp")]
        at: Option<NaiveDateTime>,
        #[serde(default, with = "date")]
        on: Option<NaiveDate>,
    }

    #[test]
    fn test_timestamps() {
        let parsed: Stamped =
            serde_json::from_value(json!({"at": "2020-03-18 11:02:06", "on": "2020-04-01"}))
                .unwrap();
        assert_eq!(
            parsed.at.unwrap().format("%H:%M").to_string(),
            "11:02"
        );
        assert_eq!(parsed.on, NaiveDate::from_ymd_opt(2020, 4, 1));

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["at"], "2020-03-18 11:02:06");

        let empty: Stamped = serde_json::from_value(json!({"at": "", "on": null})).unwrap();
        assert!(empty.at.is_none());
        assert!(empty.on.is_none());

        let missing: Stamped = serde_json::from_value(json!({})).unwrap();
        assert!(missing.at.is_none());

        assert!(serde_json::from_value::<Stamped>(json!({"at": "yesterday"})).is_err());
    }
}
