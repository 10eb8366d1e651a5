//! Error types for pd-client.
//!
//! Errors fall into four families:
//! - local encoding failures ([`ErrorKind::Serialization`]), never sent
//! - transport failures ([`ErrorKind::Timeout`], [`ErrorKind::Connection`],
//!   [`ErrorKind::Transport`])
//! - remote failures decided by the envelope decoder ([`ErrorKind::Api`])
//! - rate limit exhaustion ([`ErrorKind::RateLimited`]), a remote failure that
//!   also carries the rate metadata so callers can schedule their own backoff
//!
//! Nothing here is retried by the library.

use crate::request::RequestMethod;
use crate::response::RateLimit;
use crate::security::truncate_message;

/// Result type alias for pd-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for pd-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Timeout | ErrorKind::Connection(_) | ErrorKind::Transport(_)
        )
    }

    /// Returns true if the remote API reported the call as failed.
    ///
    /// Rate limit errors count as API errors.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Api { .. } | ErrorKind::RateLimited { .. }
        )
    }

    /// Returns true if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.kind, ErrorKind::RateLimited { .. })
    }

    /// Returns true if the remote answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns true if the payload could not be encoded locally.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization(_))
    }

    /// HTTP status of a remote failure.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Api { status, .. } | ErrorKind::RateLimited { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable message of a remote failure.
    ///
    /// This is the envelope's `error` field, whichever shape it arrived in.
    pub fn message(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Api { message, .. } | ErrorKind::RateLimited { message, .. } => {
                Some(message.as_str())
            }
            _ => None,
        }
    }

    /// Rate metadata of a rate limit error.
    pub fn rate_limit(&self) -> Option<&RateLimit> {
        match &self.kind {
            ErrorKind::RateLimited { rate, .. } => Some(rate),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Caller-supplied body or query could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A successful response carried a body that did not match the target type.
    #[error("JSON error: {0}")]
    Json(String),

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error (refused, DNS, TLS).
    #[error("Connection error: {0}")]
    Connection(String),

    /// Any other transport-level fault.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The HTTP exchange completed but the API reported a failure.
    #[error("{method} {url}: {status} {}", truncate_message(.message))]
    Api {
        method: RequestMethod,
        /// Request URL with the API token redacted.
        url: String,
        status: u16,
        message: String,
        error_info: Option<String>,
        /// Numeric code from a structured error object.
        code: Option<i64>,
        /// Field names from a structured error object.
        failed_fields: Vec<String>,
    },

    /// Rate limit exhausted (HTTP 403 with no remaining calls, or HTTP 429).
    #[error("Rate limited: {method} {url}: {status} {}", truncate_message(.message))]
    RateLimited {
        method: RequestMethod,
        /// Request URL with the API token redacted.
        url: String,
        status: u16,
        message: String,
        rate: RateLimit,
    },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // reqwest includes the request URL in its messages, and the URL
        // carries the API token.
        let err = err.without_url();
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_builder() {
            ErrorKind::InvalidUrl(err.to_string())
        } else {
            ErrorKind::Transport(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}
