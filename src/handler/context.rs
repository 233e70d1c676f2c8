//! Per-request context handed to handlers.
//!
//! # Responsibilities
//! - Carry the request data supplied by the transport layer
//! - Carry the variables extracted by the router
//!
//! # Design Decisions
//! - Transport-agnostic: built from plain parts, not from an axum request
//! - Query parsed once, kept as an ordered multimap
//! - Created per request, dropped when the request completes

use axum::body::Bytes;
use axum::http::HeaderMap;
use serde::de::DeserializeOwned;

use crate::handler::HandlerError;
use crate::routing::{Value, Variables};

/// Request data from the transport layer. The path must already be
/// percent-decoded and stripped of its query string.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    method: String,
    path: String,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
}

impl RequestContext {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Parse a raw `application/x-www-form-urlencoded` query string.
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value of a query parameter.
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Decode the body as JSON. Malformed bodies are a 400.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HandlerError> {
        serde_json::from_slice(&self.body)
            .map_err(|e| HandlerError::bad_request(format!("Invalid JSON body: {}", e)))
    }
}

/// Everything a handler instance is built from.
#[derive(Debug, Clone)]
pub struct HandlerContext {
    route: String,
    variables: Variables,
    request: RequestContext,
}

impl HandlerContext {
    pub fn new(route: impl Into<String>, variables: Variables, request: RequestContext) -> Self {
        Self {
            route: route.into(),
            variables,
            request,
        }
    }

    /// Name of the matched route.
    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Shorthand for `variables().get(name)`.
    pub fn var(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Value of the first variable (legacy single-resource handlers).
    pub fn resource(&self) -> Option<&Value> {
        self.variables.resource()
    }

    pub fn request(&self) -> &RequestContext {
        &self.request
    }
}
