//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (route registration, matches, dispatch outcome)
//!     → logging.rs (subscriber: filter + pretty/JSON formatter)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//! ```
//!
//! # Design Decisions
//! - Structured fields (route, path, method, status) for machine parsing
//! - Request ID attached per request by the HTTP middleware
//! - Declined routes are logged at trace level only

pub mod logging;
