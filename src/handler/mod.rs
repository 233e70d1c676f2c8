//! Request handler contract.
//!
//! # Data Flow
//! ```text
//! BoundHandler + RequestContext
//!     → registry.rs (Handler factory builds a per-request instance)
//!     → Method::from_str (verb table lookup)
//!     → Method::invoke (static dispatch to the verb operation)
//!     → Reply or HandlerError
//! ```
//!
//! # Design Decisions
//! - The verb table is a closed enum, resolved by `match`, never rebuilt per request
//! - Unknown verbs and unimplemented verbs are distinct errors (400 vs 501)
//! - Handler instances are request-scoped; shared state lives in the factory

pub mod context;
pub mod error;
pub mod registry;
pub mod reply;

use std::fmt;
use std::str::FromStr;

pub use context::{HandlerContext, RequestContext};
pub use error::HandlerError;
pub use registry::{Handler, HandlerRegistry, RegistryError};
pub use reply::Reply;

/// Result of a verb operation.
pub type HandlerResult = Result<Reply, HandlerError>;

/// HTTP verbs a handler can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Head,
    Trace,
    Propfind,
    Copy,
    Move,
    /// Liveness probe; only recognized in testable mode.
    Probe,
}

impl Method {
    /// Verbs every handler exposes.
    pub const STANDARD: [Method; 11] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
        Method::Options,
        Method::Head,
        Method::Trace,
        Method::Propfind,
        Method::Copy,
        Method::Move,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Head => "HEAD",
            Method::Trace => "TRACE",
            Method::Propfind => "PROPFIND",
            Method::Copy => "COPY",
            Method::Move => "MOVE",
            Method::Probe => "PROBE",
        }
    }

    /// Call the operation for this verb on a handler instance.
    ///
    /// `Probe` is not a handler operation; the dispatcher answers it.
    pub fn invoke(self, handler: &mut dyn RequestHandler) -> HandlerResult {
        match self {
            Method::Get => handler.get(),
            Method::Post => handler.post(),
            Method::Put => handler.put(),
            Method::Patch => handler.patch(),
            Method::Delete => handler.delete(),
            Method::Options => handler.options(),
            Method::Head => handler.head(),
            Method::Trace => handler.trace(),
            Method::Propfind => handler.propfind(),
            Method::Copy => handler.copy(),
            Method::Move => handler.move_(),
            Method::Probe => Err(HandlerError::MethodNotRecognized(self.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = HandlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::STANDARD
            .into_iter()
            .chain(std::iter::once(Method::Probe))
            .find(|m| m.as_str() == s)
            .ok_or_else(|| HandlerError::MethodNotRecognized(s.to_string()))
    }
}

/// A per-request handler. Every verb defaults to
/// [`HandlerError::MethodNotImplemented`]; implementors override the ones
/// they serve.
pub trait RequestHandler: Send {
    fn get(&mut self) -> HandlerResult {
        Err(HandlerError::MethodNotImplemented(Method::Get))
    }

    fn post(&mut self) -> HandlerResult {
        Err(HandlerError::MethodNotImplemented(Method::Post))
    }

    fn put(&mut self) -> HandlerResult {
        Err(HandlerError::MethodNotImplemented(Method::Put))
    }

    fn patch(&mut self) -> HandlerResult {
        Err(HandlerError::MethodNotImplemented(Method::Patch))
    }

    fn delete(&mut self) -> HandlerResult {
        Err(HandlerError::MethodNotImplemented(Method::Delete))
    }

    fn options(&mut self) -> HandlerResult {
        Err(HandlerError::MethodNotImplemented(Method::Options))
    }

    fn head(&mut self) -> HandlerResult {
        Err(HandlerError::MethodNotImplemented(Method::Head))
    }

    fn trace(&mut self) -> HandlerResult {
        Err(HandlerError::MethodNotImplemented(Method::Trace))
    }

    fn propfind(&mut self) -> HandlerResult {
        Err(HandlerError::MethodNotImplemented(Method::Propfind))
    }

    fn copy(&mut self) -> HandlerResult {
        Err(HandlerError::MethodNotImplemented(Method::Copy))
    }

    // `move` is a keyword.
    fn move_(&mut self) -> HandlerResult {
        Err(HandlerError::MethodNotImplemented(Method::Move))
    }
}

/// A handler type that is built from its context on every request.
pub trait Resource: RequestHandler + Sized + 'static {
    fn from_context(ctx: HandlerContext) -> Self;
}
