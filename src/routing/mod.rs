//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     pattern string
//!     → pattern.rs (segments → literal / placeholder nodes)
//!     → coercion.rs (resolve `:type` tags)
//!     → router.rs (append to ordered table, freeze as immutable Router)
//!
//! Incoming path:
//!     → router.rs (try routes in registration order)
//!     → matcher.rs (pair segments with nodes, coerce placeholders)
//!     → Return: BoundHandler + Variables, or UnmatchedPath
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (positional segment matching only)
//! - Deterministic: same input always matches same route
//! - First match wins (ordered by registration)

pub mod coercion;
pub mod error;
pub mod matcher;
pub mod pattern;
pub mod router;
pub mod variables;

pub use coercion::{TypeTag, Value};
pub use error::{NodeError, PathMismatch, PatternError, UnmatchedPath};
pub use matcher::MatchOutcome;
pub use pattern::{Node, Placeholder, RoutePattern};
pub use router::{BoundHandler, RouteEntry, Router, RouterBuilder};
pub use variables::{Variable, Variables};
