//! Request dispatch.
//!
//! # Responsibilities
//! - Resolve the request path against the route table
//! - Build the per-request handler with variables and request context
//! - Invoke the verb operation and surface boundary errors
//!
//! # Design Decisions
//! - Routing runs before method lookup: an unrouted path is a 404 whatever the verb
//! - The only errors leaving this module are `NotFound` and handler-contract errors
//! - Synchronous and lock-free; the router is shared read-only

use axum::http::StatusCode;
use thiserror::Error;

use crate::handler::{Handler, HandlerContext, HandlerError, Method, Reply, RequestContext};
use crate::routing::{Router, UnmatchedPath};

/// Errors that cross into the response layer.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No route matched the path.
    #[error("Service not found: {0}.")]
    NotFound(#[from] UnmatchedPath),

    #[error(transparent)]
    Handler(#[from] HandlerError),
}

impl DispatchError {
    pub fn status(&self) -> StatusCode {
        match self {
            DispatchError::NotFound(_) => StatusCode::NOT_FOUND,
            DispatchError::Handler(e) => e.status(),
        }
    }
}

/// Routes requests to handler instances.
#[derive(Debug)]
pub struct Dispatcher {
    router: Router<Handler>,
    testable: bool,
}

impl Dispatcher {
    pub fn new(router: Router<Handler>) -> Self {
        Self {
            router,
            testable: false,
        }
    }

    /// Recognize the PROBE method as a liveness check.
    pub fn testable(mut self, testable: bool) -> Self {
        self.testable = testable;
        self
    }

    pub fn router(&self) -> &Router<Handler> {
        &self.router
    }

    /// Look up a method name in the verb table.
    pub fn recognize(&self, name: &str) -> Result<Method, HandlerError> {
        match name.parse::<Method>()? {
            Method::Probe if !self.testable => Err(HandlerError::MethodNotRecognized(name.to_string())),
            method => Ok(method),
        }
    }

    /// Dispatch one request.
    pub fn dispatch(&self, request: RequestContext) -> Result<Reply, DispatchError> {
        let bound = self.router.resolve(request.path())?;
        let method = self.recognize(request.method())?;

        let (entry, variables) = bound.into_parts();
        if method == Method::Probe {
            return Ok(Reply::text("running"));
        }

        let route = entry.name();
        let handler = entry.handler();
        let ctx = HandlerContext::new(route, variables, request);
        let mut instance = handler.instantiate(ctx);

        match method.invoke(instance.as_mut()) {
            Ok(reply) => {
                tracing::debug!(
                    route,
                    handler = handler.name(),
                    %method,
                    status = reply.status().as_u16(),
                    "Request handled"
                );
                Ok(reply)
            }
            Err(e) => {
                match &e {
                    HandlerError::Internal(detail) => {
                        tracing::error!(route, handler = handler.name(), %method, error = %detail, "Handler failed");
                    }
                    other => {
                        tracing::warn!(route, handler = handler.name(), %method, error = %other, "Handler returned error");
                    }
                }
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{HandlerResult, RequestHandler, Resource};
    use crate::routing::Value;

    struct Users {
        ctx: HandlerContext,
    }

    impl Resource for Users {
        fn from_context(ctx: HandlerContext) -> Self {
            Self { ctx }
        }
    }

    impl RequestHandler for Users {
        fn get(&mut self) -> HandlerResult {
            match self.ctx.resource() {
                Some(Value::Integer(0)) => Err(HandlerError::not_found("No such user")),
                Some(id) => Ok(Reply::text(format!("user {}", id))),
                None => Ok(Reply::text("all users")),
            }
        }

        fn delete(&mut self) -> HandlerResult {
            Err(HandlerError::internal("storage offline"))
        }
    }

    fn dispatcher() -> Dispatcher {
        let mut builder = Router::builder();
        builder
            .route("/users/[id:integer]", Handler::of::<Users>("users"))
            .unwrap();
        Dispatcher::new(builder.build())
    }

    #[test]
    fn test_dispatch_to_verb() {
        let d = dispatcher();
        let reply = d.dispatch(RequestContext::new("GET", "/users/7")).unwrap();
        assert_eq!(reply, Reply::text("user 7"));

        let reply = d.dispatch(RequestContext::new("GET", "/users")).unwrap();
        assert_eq!(reply, Reply::text("all users"));
    }

    #[test]
    fn test_unmatched_path_is_not_found() {
        let err = dispatcher()
            .dispatch(RequestContext::new("GET", "/groups"))
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Service not found: /groups.");
    }

    #[test]
    fn test_routing_precedes_method_lookup() {
        let err = dispatcher()
            .dispatch(RequestContext::new("BREW", "/nowhere"))
            .unwrap_err();
        assert!(matches!(err, DispatchError::NotFound(_)));
    }

    #[test]
    fn test_method_errors() {
        let d = dispatcher();

        let err = d.dispatch(RequestContext::new("BREW", "/users/1")).unwrap_err();
        assert!(matches!(err, DispatchError::Handler(HandlerError::MethodNotRecognized(_))));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = d.dispatch(RequestContext::new("PUT", "/users/1")).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Handler(HandlerError::MethodNotImplemented(Method::Put))
        ));
        assert_eq!(err.status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[test]
    fn test_handler_errors_pass_through() {
        let d = dispatcher();
        let err = d.dispatch(RequestContext::new("GET", "/users/0")).unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "No such user");

        let err = d.dispatch(RequestContext::new("DELETE", "/users/1")).unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_probe_requires_testable_mode() {
        let err = dispatcher()
            .dispatch(RequestContext::new("PROBE", "/users"))
            .unwrap_err();
        assert!(matches!(err, DispatchError::Handler(HandlerError::MethodNotRecognized(_))));

        let reply = dispatcher()
            .testable(true)
            .dispatch(RequestContext::new("PROBE", "/users"))
            .unwrap();
        assert_eq!(reply, Reply::text("running"));
    }
}
