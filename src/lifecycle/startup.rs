//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the route table from validated configuration
//! - Log the table in precedence order
//! - Produce the dispatcher the HTTP server serves
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The route table is complete before the listener accepts traffic

use crate::config::AppConfig;
use crate::dispatch::Dispatcher;
use crate::handler::{HandlerRegistry, RegistryError};

/// Build the dispatcher for `config` using handlers from `registry`.
pub fn build_dispatcher(
    config: &AppConfig,
    registry: &HandlerRegistry,
) -> Result<Dispatcher, RegistryError> {
    let router = registry.build_router(&config.routes)?;

    for (position, entry) in router.entries().iter().enumerate() {
        tracing::info!(
            position,
            route = entry.name(),
            pattern = %entry.pattern(),
            handler = entry.handler().name(),
            "Route loaded"
        );
    }

    if router.is_empty() {
        tracing::warn!("No routes configured; every request will be answered with 404");
    }

    Ok(Dispatcher::new(router).testable(config.server.testable))
}
