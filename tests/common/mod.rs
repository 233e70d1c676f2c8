//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use rest_router::config::{AppConfig, RouteConfig};
use rest_router::handler::{
    Handler, HandlerContext, HandlerError, HandlerRegistry, HandlerResult, Reply, RequestHandler,
    Resource,
};
use rest_router::lifecycle::startup::build_dispatcher;
use rest_router::{HttpServer, Shutdown};
use tokio::net::TcpListener;

/// Single-resource handler: GET returns the resource, DELETE is 204,
/// PATCH fails internally, everything else is unimplemented.
pub struct Items {
    ctx: HandlerContext,
}

impl Resource for Items {
    fn from_context(ctx: HandlerContext) -> Self {
        Self { ctx }
    }
}

impl RequestHandler for Items {
    fn get(&mut self) -> HandlerResult {
        match self.ctx.resource() {
            Some(id) => Ok(Reply::text(format!("item {}", id))),
            None => Ok(Reply::text("all items")),
        }
    }

    fn delete(&mut self) -> HandlerResult {
        Ok(Reply::no_content())
    }

    fn patch(&mut self) -> HandlerResult {
        Err(HandlerError::internal("item store unavailable"))
    }
}

pub fn route(pattern: &str, handler: &str) -> RouteConfig {
    RouteConfig {
        name: None,
        pattern: pattern.to_string(),
        handler: handler.to_string(),
    }
}

pub fn registry() -> HandlerRegistry {
    let mut registry = rest_router::demo::registry().unwrap();
    registry.register(Handler::of::<Items>("items")).unwrap();
    registry
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.server.max_body_bytes = 64;
    config.routes = vec![
        route("/items/[id:integer]", "items"),
        route("/files/<name>", "echo"),
        route("/hello/[name]", "greet"),
    ];
    config
}

pub fn build_server(config: AppConfig) -> HttpServer {
    let dispatcher = build_dispatcher(&config, &registry()).unwrap();
    HttpServer::new(config, dispatcher)
}

/// Start a server on an ephemeral port.
pub async fn start_server(config: AppConfig) -> (SocketAddr, Shutdown) {
    let server = build_server(config);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}
