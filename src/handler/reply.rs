//! Handler results.

use axum::body::Bytes;
use axum::http::StatusCode;
use serde::Serialize;

use crate::handler::HandlerError;

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const APPLICATION_JSON: &str = "application/json";

/// What a handler returns on success. Converted into an HTTP response by
/// the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    status: StatusCode,
    content_type: Option<&'static str>,
    body: Bytes,
}

impl Reply {
    /// Plain text with status 200.
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: Some(TEXT_PLAIN),
            body: Bytes::from(body.into()),
        }
    }

    /// JSON with status 200.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, HandlerError> {
        let body = serde_json::to_vec(value).map_err(HandlerError::internal)?;
        Ok(Self {
            status: StatusCode::OK,
            content_type: Some(APPLICATION_JSON),
            body: Bytes::from(body),
        })
    }

    /// Empty 200.
    pub fn ok() -> Self {
        Self {
            status: StatusCode::OK,
            content_type: None,
            body: Bytes::new(),
        }
    }

    pub fn no_content() -> Self {
        Self::ok().with_status(StatusCode::NO_CONTENT)
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> Option<&'static str> {
        self.content_type
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }
}
