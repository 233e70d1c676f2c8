//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, body limit)
//!     → request.rs (decode path, parse query → RequestContext)
//!     → dispatch (route table → handler verb)
//!     → response.rs (Reply or boundary error → HTTP response)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use server::HttpServer;
