//! The Pipedrive response envelope and the decoder that judges it.
//!
//! Every Pipedrive response, success or failure, is wrapped as
//!
//! ```json
//! {"success": true, "data": ..., "additional_data": {...}, "related_objects": {...}}
//! {"success": false, "error": "..." | {...}, "error_info": "...", "data": null}
//! ```
//!
//! [`decode`] is the only place that decides whether a call succeeded.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestMethod;
use crate::response::{RateLimit, Response};
use crate::security::scrub_tokens;

/// The `error` member of a failure envelope.
///
/// Most endpoints send a plain string. Search endpoints send an object.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ApiErrorPayload {
    Message(String),
    Object(ErrorObject),
    Other(Value),
}

/// Structured error object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ErrorObject {
    pub message: String,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub failed_fields: Vec<String>,
}

impl ApiErrorPayload {
    /// Human-readable message, whichever shape the error arrived in.
    pub fn message(&self) -> String {
        match self {
            ApiErrorPayload::Message(message) => message.clone(),
            ApiErrorPayload::Object(object) if !object.message.is_empty() => {
                object.message.clone()
            }
            ApiErrorPayload::Object(object) => {
                serde_json::to_string(object).unwrap_or_else(|_| "unknown error".to_string())
            }
            ApiErrorPayload::Other(value) => value.to_string(),
        }
    }

    /// Numeric code, only present on structured errors.
    pub fn code(&self) -> Option<i64> {
        match self {
            ApiErrorPayload::Object(object) => object.code,
            _ => None,
        }
    }

    /// Names of rejected fields, only present on structured errors.
    pub fn failed_fields(&self) -> &[String] {
        match self {
            ApiErrorPayload::Object(object) => &object.failed_fields,
            _ => &[],
        }
    }
}

/// Pagination block of `additional_data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Pagination {
    pub start: u64,
    pub limit: u64,
    pub more_items_in_collection: bool,
    pub next_start: Option<u64>,
}

/// Authenticated user metadata some endpoints attach.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UserContext {
    pub profile: Option<UserProfile>,
    pub locale: Option<UserLocale>,
    pub timezone: Option<UserTimezone>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UserProfile {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
    pub default_currency: String,
    pub icon_url: Option<String>,
    pub activated: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UserLocale {
    pub language: String,
    pub country: String,
    pub uses_12_hour_clock: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UserTimezone {
    pub name: String,
    pub offset: i64,
}

/// The `additional_data` member.
///
/// Known keys are typed; everything else (`dropbox_email`, ...) lands in
/// `extra`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AdditionalData {
    pub pagination: Option<Pagination>,
    pub user: Option<UserContext>,
    pub multiple_companies: Option<bool>,
    pub default_company_id: Option<u64>,
    pub company_id: Option<u64>,
    pub since_timestamp: Option<String>,
    pub last_timestamp_on_page: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A decoded successful call.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// The unwrapped `data` member.
    pub data: T,
    pub additional_data: Option<AdditionalData>,
    pub related_objects: Option<Value>,
    /// HTTP status of the response.
    pub status: u16,
    pub rate_limit: RateLimit,
}

impl<T> ApiResponse<T> {
    /// Pagination info, if the endpoint is paginated.
    pub fn pagination(&self) -> Option<&Pagination> {
        self.additional_data
            .as_ref()
            .and_then(|a| a.pagination.as_ref())
    }

    /// True when another page follows this one.
    pub fn has_more(&self) -> bool {
        self.pagination()
            .is_some_and(|p| p.more_items_in_collection)
    }

    /// Discard the metadata.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Transform the payload, keeping the metadata.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            data: f(self.data),
            additional_data: self.additional_data,
            related_objects: self.related_objects,
            status: self.status,
            rate_limit: self.rate_limit,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<ApiErrorPayload>,
    #[serde(default, deserialize_with = "text")]
    error_info: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    additional_data: Option<AdditionalData>,
    #[serde(default)]
    related_objects: Option<Value>,
}

/// Metadata must never turn a good response into a failure.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Free-form text that occasionally arrives as another JSON value.
fn text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// Decode a response into `T`, or classify it as a failure.
///
/// 1. status outside 200..=299 or `success == false` is an error carrying the
///    envelope's message;
/// 2. otherwise `data` is decoded into `T`, with `null`/absent data giving
///    `T::default()`.
///
/// `url` must already be redacted.
pub fn decode<T>(method: RequestMethod, url: &str, response: &Response) -> Result<ApiResponse<T>>
where
    T: DeserializeOwned + Default,
{
    let status = response.status();
    let rate_limit = response.rate_limit();
    let envelope = serde_json::from_slice::<Envelope>(response.bytes()).ok();

    match envelope {
        Some(envelope) if response.is_success() && envelope.success => {
            let data = match envelope.data {
                None | Some(Value::Null) => T::default(),
                Some(value) => serde_json::from_value(value).map_err(|e| {
                    Error::with_source(
                        ErrorKind::Json(format!("{method} {url}: cannot decode data: {e}")),
                        e,
                    )
                })?,
            };

            Ok(ApiResponse {
                data,
                additional_data: envelope.additional_data,
                related_objects: envelope.related_objects,
                status,
                rate_limit,
            })
        }
        Some(envelope) => {
            let message = envelope
                .error
                .as_ref()
                .map(ApiErrorPayload::message)
                .filter(|m| !m.is_empty())
                .or_else(|| envelope.error_info.clone())
                .unwrap_or_else(|| fallback_message(status));

            Err(failure(
                method,
                url,
                status,
                rate_limit,
                message,
                envelope.error_info,
                envelope.error.as_ref(),
            ))
        }
        None if response.is_success() => Err(Error::new(ErrorKind::Json(format!(
            "{method} {url}: response body is not a Pipedrive envelope"
        )))),
        None => {
            let text = response.text();
            let message = if text.trim().is_empty() {
                fallback_message(status)
            } else {
                text.into_owned()
            };
            Err(failure(method, url, status, rate_limit, message, None, None))
        }
    }
}

fn fallback_message(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {status}"))
}

fn failure(
    method: RequestMethod,
    url: &str,
    status: u16,
    rate: RateLimit,
    message: String,
    error_info: Option<String>,
    payload: Option<&ApiErrorPayload>,
) -> Error {
    let message = scrub_tokens(&message);

    if status == 429 || (status == 403 && rate.is_exhausted()) {
        return Error::new(ErrorKind::RateLimited {
            method,
            url: url.to_string(),
            status,
            message,
            rate,
        });
    }

    Error::new(ErrorKind::Api {
        method,
        url: url.to_string(),
        status,
        message,
        error_info: error_info.map(|info| scrub_tokens(&info)),
        code: payload.and_then(ApiErrorPayload::code),
        failed_fields: payload
            .map(|p| p.failed_fields().to_vec())
            .unwrap_or_default(),
    })
}
