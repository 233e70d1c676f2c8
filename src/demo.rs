//! Built-in handlers served by the `rest-router` binary.
//!
//! - `greet`: `GET` answers `Hello, <first variable>!`
//! - `echo`: `GET` returns the match as JSON, `POST` echoes the body

use serde::Serialize;

use crate::config::RouteConfig;
use crate::handler::{
    Handler, HandlerContext, HandlerError, HandlerRegistry, HandlerResult, RegistryError, Reply,
    RequestHandler, Resource,
};
use crate::routing::Variables;

pub struct Greet {
    ctx: HandlerContext,
}

impl Resource for Greet {
    fn from_context(ctx: HandlerContext) -> Self {
        Self { ctx }
    }
}

impl RequestHandler for Greet {
    fn get(&mut self) -> HandlerResult {
        let name = self
            .ctx
            .resource()
            .map(ToString::to_string)
            .unwrap_or_else(|| "world".to_string());
        Ok(Reply::text(format!("Hello, {}!", name)))
    }
}

pub struct Echo {
    ctx: HandlerContext,
}

#[derive(Serialize)]
struct EchoBody<'a> {
    route: &'a str,
    method: &'a str,
    path: &'a str,
    variables: &'a Variables,
    resource: Option<&'a crate::routing::Value>,
    query: &'a [(String, String)],
}

impl Resource for Echo {
    fn from_context(ctx: HandlerContext) -> Self {
        Self { ctx }
    }
}

impl RequestHandler for Echo {
    fn get(&mut self) -> HandlerResult {
        let request = self.ctx.request();
        Reply::json(&EchoBody {
            route: self.ctx.route(),
            method: request.method(),
            path: request.path(),
            variables: self.ctx.variables(),
            resource: self.ctx.resource(),
            query: request.query_pairs(),
        })
    }

    fn post(&mut self) -> HandlerResult {
        let body = self.ctx.request().body();
        if body.is_empty() {
            return Err(HandlerError::bad_request("Empty request body"));
        }
        let text = std::str::from_utf8(body)
            .map_err(|_| HandlerError::bad_request("Request body is not UTF-8"))?;
        Ok(Reply::text(text))
    }

    fn head(&mut self) -> HandlerResult {
        Ok(Reply::ok())
    }
}

/// Registry with the built-in handlers.
pub fn registry() -> Result<HandlerRegistry, RegistryError> {
    let mut registry = HandlerRegistry::new();
    registry
        .register(Handler::of::<Greet>("greet"))?
        .register(Handler::of::<Echo>("echo"))?;
    Ok(registry)
}

/// Routes used when the configuration declares none.
pub fn default_routes() -> Vec<RouteConfig> {
    [
        ("hello", "/hello/[name]", "greet"),
        ("echo", "/echo/<id:integer>/[flag:boolean]", "echo"),
    ]
    .into_iter()
    .map(|(name, pattern, handler)| RouteConfig {
        name: Some(name.to_string()),
        pattern: pattern.to_string(),
        handler: handler.to_string(),
    })
    .collect()
}
