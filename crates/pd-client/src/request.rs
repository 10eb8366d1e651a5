//! HTTP request building with Pipedrive token injection.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::Serialize;
use tracing::warn;
use url::Url;

use crate::config::AuthMode;
use crate::error::{Error, ErrorKind, Result};

/// Query parameter that carries the API token. Reserved: callers cannot set it.
pub const AUTH_QUERY_PARAM: &str = "api_token";

/// Header that carries the API token when [`AuthMode::Header`] is selected.
pub const AUTH_HEADER: &str = "x-api-token";

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// Upper-case method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reflect a serializable options value into query pairs.
///
/// The value must serialize as a flat map (a struct of scalars or options).
/// `None` fields produce no pair; empty strings are dropped later by
/// [`RequestBuilder::query`].
pub fn encode_query<Q: Serialize + ?Sized>(options: &Q) -> Result<Vec<(String, String)>> {
    let encoded = serde_urlencoded::to_string(options)?;
    Ok(url::form_urlencoded::parse(encoded.as_bytes())
        .into_owned()
        .collect())
}

/// Builder for a single outbound request.
///
/// Holds everything the transport needs: method, URL without query, query
/// pairs, JSON body, extra headers and the API token. Building is pure; the
/// absolute URL is only assembled by [`RequestBuilder::full_url`].
#[derive(Clone)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) query_params: Vec<(String, String)>,
    pub(crate) body: Option<serde_json::Value>,
    pub(crate) api_token: Option<String>,
    pub(crate) auth_mode: AuthMode,
    pub(crate) timeout: Option<Duration>,
}

impl fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("query_params", &self.query_params)
            .field("has_body", &self.body.is_some())
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("auth_mode", &self.auth_mode)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl RequestBuilder {
    /// Create a new request builder for an absolute URL without query string.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            query_params: Vec::new(),
            body: None,
            api_token: None,
            auth_mode: AuthMode::default(),
            timeout: None,
        }
    }

    /// Attach the API token.
    pub fn api_token(mut self, token: impl Into<String>, mode: AuthMode) -> Self {
        self.api_token = Some(token.into());
        self.auth_mode = mode;
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter.
    ///
    /// Empty values are skipped. The reserved token key is ignored so the
    /// configured token always appears exactly once.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();

        if name == AUTH_QUERY_PARAM {
            warn!("Ignoring caller-supplied '{AUTH_QUERY_PARAM}' query parameter");
            return self;
        }
        if value.is_empty() {
            return self;
        }

        self.query_params.push((name, value));
        self
    }

    /// Add every present field of an options value as query parameters.
    pub fn query_struct<Q: Serialize + ?Sized>(mut self, options: &Q) -> Result<Self> {
        for (name, value) in encode_query(options)? {
            self = self.query(name, value);
        }
        Ok(self)
    }

    /// Set JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| Error::with_source(ErrorKind::Serialization(e.to_string()), e))?;
        self.body = Some(value);
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        Ok(self)
    }

    /// Set a per-request deadline, overriding the client-wide timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The request method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// Caller-supplied query pairs, without the token.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query_params
    }

    /// The JSON body, if any.
    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Look up a header set on this request.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The token to send in the `x-api-token` header, if header auth is selected.
    pub(crate) fn header_token(&self) -> Option<&str> {
        match self.auth_mode {
            AuthMode::Header => self.api_token.as_deref(),
            AuthMode::QueryParameter => None,
        }
    }

    /// Assemble the absolute URL: `url + "?" + encoded query`.
    ///
    /// With query-parameter auth the token is appended after the caller pairs.
    pub fn full_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.url)?;

        let token = match self.auth_mode {
            AuthMode::QueryParameter => self.api_token.as_deref(),
            AuthMode::Header => None,
        };

        if !self.query_params.is_empty() || token.is_some() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query_params {
                pairs.append_pair(name, value);
            }
            if let Some(token) = token {
                pairs.append_pair(AUTH_QUERY_PARAM, token);
            }
        }

        Ok(url)
    }
}
