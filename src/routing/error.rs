//! Routing error types.
//!
//! Compile-time errors ([`PatternError`]) are raised while a route is
//! registered. Node-level errors ([`NodeError`]) never leave a single route
//! match: they are folded into [`PathMismatch`], which the router consumes
//! to try the next route. Only [`UnmatchedPath`] crosses the router boundary.

use thiserror::Error;

use crate::routing::coercion::TypeTag;

/// Errors raised while compiling a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The `:type` suffix names a tag with no coercion.
    #[error("Invalid placeholder type: {0}")]
    InvalidPlaceholderType(String),

    /// A placeholder segment such as `<>` or `[:integer]` has no name.
    #[error("Empty placeholder name in segment: {0}")]
    EmptyPlaceholderName(String),

    /// The same placeholder name occurs twice in one pattern.
    #[error("Duplicate placeholder name: {0}")]
    DuplicatePlaceholder(String),
}

/// Why a single node of a route did not accept the path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    /// A literal differed, or a mandatory node found the path exhausted.
    #[error("expected {expected}, got {}", .actual.as_deref().unwrap_or("end of path"))]
    NodeMismatch {
        expected: String,
        actual: Option<String>,
    },

    /// A typed placeholder could not coerce its segment.
    #[error("invalid value \"{raw}\" for {tag} placeholder \"{name}\"")]
    InvalidNodeType {
        name: String,
        tag: TypeTag,
        raw: String,
    },

    /// Segments remained after every node was satisfied.
    #[error("unconsumed path remainder: {}", .0.join("/"))]
    UnconsumedPath(Vec<String>),
}

/// A route declined to match a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Path mismatch: {cause}")]
pub struct PathMismatch {
    #[source]
    cause: NodeError,
}

impl PathMismatch {
    pub fn new(cause: NodeError) -> Self {
        Self { cause }
    }

    /// The node-level reason the route declined.
    pub fn cause(&self) -> &NodeError {
        &self.cause
    }
}

impl From<NodeError> for PathMismatch {
    fn from(cause: NodeError) -> Self {
        Self::new(cause)
    }
}

/// No route in the table matches the path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct UnmatchedPath(pub String);

impl UnmatchedPath {
    pub fn path(&self) -> &str {
        &self.0
    }
}
