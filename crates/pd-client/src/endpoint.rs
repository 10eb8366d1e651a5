//! Outbound request descriptors.

use serde::Serialize;

use crate::error::Result;
use crate::request::{encode_query, RequestMethod};

/// Method, path and query of one API call, relative to the base URL.
///
/// Built per call and consumed once by
/// [`PipedriveClient::call`](crate::PipedriveClient::call).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    method: RequestMethod,
    path: String,
    query: Vec<(String, String)>,
}

impl Endpoint {
    /// Create a descriptor. `path` starts with `/`.
    pub fn new(method: RequestMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Delete, path)
    }

    /// Add one query pair.
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Add the present fields of an options value as query pairs.
    pub fn query_struct<Q: Serialize + ?Sized>(mut self, options: &Q) -> Result<Self> {
        self.query.extend(encode_query(options)?);
        Ok(self)
    }

    pub fn method(&self) -> RequestMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query pairs as given; filtering happens when the request is built.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }
}
