//! Response handling and transformation.
//!
//! # Responsibilities
//! - Turn handler replies into HTTP responses
//! - Map boundary errors to status codes and plain-text bodies
//!
//! # Design Decisions
//! - Internal error details are only exposed in debug mode
//! - Every error body is plain text

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::dispatch::DispatchError;
use crate::handler::reply::TEXT_PLAIN;
use crate::handler::{HandlerError, Reply};

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let status = self.status();
        let content_type = self.content_type();
        let mut response = Response::new(Body::from(self.into_body()));
        *response.status_mut() = status;
        if let Some(content_type) = content_type {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, header::HeaderValue::from_static(content_type));
        }
        response
    }
}

/// Plain-text error response.
pub fn error_text(status: StatusCode, message: impl Into<String>) -> Response {
    let message: String = message.into();
    (status, [(header::CONTENT_TYPE, TEXT_PLAIN)], message).into_response()
}

/// Map a dispatch failure to a response.
pub fn error_response(err: &DispatchError, debug: bool) -> Response {
    let status = err.status();
    match err {
        DispatchError::Handler(HandlerError::Internal(_)) if !debug => {
            error_text(status, "Internal Server Error.")
        }
        other => error_text(status, other.to_string()),
    }
}
