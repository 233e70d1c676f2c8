//! Handler contract errors.

use axum::http::StatusCode;
use thiserror::Error;

use crate::handler::Method;

/// Errors raised by the request handler contract or by handler code.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The request method is not in the handler's verb table.
    #[error("Invalid HTTP method: \"{0}\"")]
    MethodNotRecognized(String),

    /// The verb exists but the handler does not implement it.
    #[error("HTTP method \"{0}\" is not implemented")]
    MethodNotImplemented(Method),

    /// A client-facing error chosen by the handler.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// An unexpected failure inside the handler.
    #[error("Internal handler error: {0}")]
    Internal(String),
}

impl HandlerError {
    pub fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        HandlerError::Status {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(error: impl std::fmt::Display) -> Self {
        HandlerError::Internal(error.to_string())
    }

    /// Status code the response layer should use.
    pub fn status(&self) -> StatusCode {
        match self {
            HandlerError::MethodNotRecognized(_) => StatusCode::BAD_REQUEST,
            HandlerError::MethodNotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            HandlerError::Status { status, .. } => *status,
            HandlerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
