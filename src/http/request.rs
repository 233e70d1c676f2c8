//! Request translation.
//!
//! # Responsibilities
//! - Percent-decode the path when unquoting is enabled
//! - Parse the query string
//! - Hand headers and body to the transport-agnostic `RequestContext`
//!
//! # Design Decisions
//! - Query string never reaches the router, only the decoded path
//! - A path that does not decode to UTF-8 is rejected before routing

use axum::body::Bytes;
use axum::http::request::Parts;
use thiserror::Error;

use crate::handler::RequestContext;

#[derive(Debug, Error)]
#[error("Invalid path encoding: {0}")]
pub struct InvalidPath(String);

/// Build the request context for the dispatcher.
pub fn request_context(parts: &Parts, body: Bytes, unquote: bool) -> Result<RequestContext, InvalidPath> {
    let raw_path = parts.uri.path();
    let path = if unquote {
        urlencoding::decode(raw_path)
            .map_err(|_| InvalidPath(raw_path.to_string()))?
            .into_owned()
    } else {
        raw_path.to_string()
    };

    let ctx = RequestContext::new(parts.method.as_str(), path)
        .with_query(parts.uri.query().unwrap_or(""))
        .with_headers(parts.headers.clone())
        .with_body(body);

    Ok(ctx)
}
