//! Handler factories and name-based registration.
//!
//! # Responsibilities
//! - Wrap a handler type or closure as a cloneable per-request factory
//! - Map handler names to factories for declarative route configuration
//! - Build the route table from `[[routes]]` declarations
//!
//! # Design Decisions
//! - Factories are `Arc`ed so route entries stay cheap to clone and `Sync`
//! - Unknown handler names fail at startup, never at request time

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::config::RouteConfig;
use crate::handler::{HandlerContext, RequestHandler, Resource};
use crate::routing::{PatternError, RoutePattern, Router, RouterBuilder};

type Factory = dyn Fn(HandlerContext) -> Box<dyn RequestHandler> + Send + Sync;

/// A named factory producing one handler instance per request.
#[derive(Clone)]
pub struct Handler {
    name: String,
    factory: Arc<Factory>,
}

impl Handler {
    /// Wrap a closure building a handler instance from its context.
    pub fn new<F, R>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(HandlerContext) -> R + Send + Sync + 'static,
        R: RequestHandler + 'static,
    {
        Self {
            name: name.into(),
            factory: Arc::new(move |ctx| Box::new(factory(ctx)) as Box<dyn RequestHandler>),
        }
    }

    /// Handler for a [`Resource`] type.
    pub fn of<R: Resource>(name: impl Into<String>) -> Self {
        Self::new(name, R::from_context)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the request-scoped handler instance.
    pub fn instantiate(&self, ctx: HandlerContext) -> Box<dyn RequestHandler> {
        (self.factory)(ctx)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").field("name", &self.name).finish()
    }
}

/// Errors building a route table from configuration.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Route \"{route}\" references unknown handler \"{handler}\"")]
    UnknownHandler { route: String, handler: String },

    #[error("Route \"{route}\" has an invalid pattern: {source}")]
    InvalidPattern {
        route: String,
        #[source]
        source: PatternError,
    },

    #[error("Handler \"{0}\" is already registered")]
    DuplicateHandler(String),
}

/// Handlers addressable by name from configuration.
#[derive(Debug, Default, Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Handler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Handler) -> Result<&mut Self, RegistryError> {
        if self.handlers.contains_key(handler.name()) {
            return Err(RegistryError::DuplicateHandler(handler.name().to_string()));
        }
        self.handlers.insert(handler.name().to_string(), handler);
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Handler> {
        self.handlers.get(name)
    }

    /// Append every declared route, in declaration order, to `builder`.
    pub fn bind_routes(
        &self,
        builder: &mut RouterBuilder<Handler>,
        routes: &[RouteConfig],
    ) -> Result<(), RegistryError> {
        for route in routes {
            let label = route.label().to_string();
            let pattern = RoutePattern::compile(route.pattern.as_str()).map_err(|source| {
                RegistryError::InvalidPattern {
                    route: label.clone(),
                    source,
                }
            })?;
            let handler = self
                .get(&route.handler)
                .ok_or_else(|| RegistryError::UnknownHandler {
                    route: label.clone(),
                    handler: route.handler.clone(),
                })?;
            builder.bind_named(label, pattern, handler.clone());
        }
        Ok(())
    }

    /// Build a router from route declarations.
    pub fn build_router(&self, routes: &[RouteConfig]) -> Result<Router<Handler>, RegistryError> {
        Ok(RouterBuilder::from_config(self, routes)?.build())
    }
}

impl RouterBuilder<Handler> {
    /// Start a builder holding the declared routes, handlers looked up by
    /// name. Further routes may be appended before `build`.
    pub fn from_config(
        registry: &HandlerRegistry,
        routes: &[RouteConfig],
    ) -> Result<Self, RegistryError> {
        let mut builder = Router::builder();
        registry.bind_routes(&mut builder, routes)?;
        Ok(builder)
    }
}
