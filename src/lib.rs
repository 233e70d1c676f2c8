//! Declarative path routing for REST services.
//!
//! Route patterns such as `/users/<id:integer>/[tab]` are compiled once at
//! startup into an ordered, immutable table. Each request path is matched
//! against the table in registration order; the first route that accepts
//! it yields typed variables and a per-request handler instance.

pub mod config;
pub mod demo;
pub mod dispatch;
pub mod handler;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::AppConfig;
pub use dispatch::{DispatchError, Dispatcher};
pub use handler::{Handler, HandlerContext, HandlerError, Method, Reply, RequestContext, RequestHandler, Resource};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{RoutePattern, Router, TypeTag, Value, Variables};
