//! Route lookup.
//!
//! # Responsibilities
//! - Store compiled routes in registration order
//! - Resolve a path to the first route that accepts it
//! - Return the bound handler or an explicit unmatched-path error
//!
//! # Design Decisions
//! - Built through [`RouterBuilder`], immutable once built (shared without locks)
//! - O(n) scan over routes; registration order is precedence
//! - Patterns are compiled on registration, so a built router never holds
//!   an invalid pattern

use crate::routing::error::{PatternError, UnmatchedPath};
use crate::routing::matcher::MatchOutcome;
use crate::routing::pattern::RoutePattern;
use crate::routing::variables::Variables;

/// A registered (pattern, handler) pair.
#[derive(Debug, Clone)]
pub struct RouteEntry<H> {
    name: Option<String>,
    pattern: RoutePattern,
    handler: H,
}

impl<H> RouteEntry<H> {
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Route name for logging; falls back to the pattern string.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.pattern.as_str())
    }
}

/// A matched route together with the variables extracted from the path.
#[derive(Debug)]
pub struct BoundHandler<'r, H> {
    entry: &'r RouteEntry<H>,
    variables: Variables,
}

impl<'r, H> BoundHandler<'r, H> {
    pub fn entry(&self) -> &'r RouteEntry<H> {
        self.entry
    }

    pub fn handler(&self) -> &'r H {
        &self.entry.handler
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn into_parts(self) -> (&'r RouteEntry<H>, Variables) {
        (self.entry, self.variables)
    }
}

/// Ordered, immutable route table.
#[derive(Debug, Clone)]
pub struct Router<H> {
    entries: Vec<RouteEntry<H>>,
}

impl<H> Router<H> {
    pub fn builder() -> RouterBuilder<H> {
        RouterBuilder::new()
    }

    /// Resolve a path to the first route that accepts it.
    pub fn resolve(&self, path: &str) -> Result<BoundHandler<'_, H>, UnmatchedPath> {
        for entry in &self.entries {
            match entry.pattern.match_path(path) {
                MatchOutcome::Matched(variables) => {
                    tracing::debug!(route = entry.name(), path, "Route matched");
                    return Ok(BoundHandler { entry, variables });
                }
                MatchOutcome::Declined(reason) => {
                    tracing::trace!(route = entry.name(), path, %reason, "Route declined");
                }
            }
        }

        tracing::debug!(path, routes = self.entries.len(), "No route matched");
        Err(UnmatchedPath(path.to_string()))
    }

    /// Routes in precedence order.
    pub fn entries(&self) -> &[RouteEntry<H>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

/// Collects routes during startup. Every form of registration appends, so
/// call order is precedence.
#[derive(Debug)]
pub struct RouterBuilder<H> {
    entries: Vec<RouteEntry<H>>,
}

impl<H> RouterBuilder<H> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Compile `pattern` and append it with `handler`.
    pub fn route(&mut self, pattern: &str, handler: H) -> Result<&mut Self, PatternError> {
        let pattern = RoutePattern::compile(pattern)?;
        Ok(self.bind(pattern, handler))
    }

    /// Append a pre-compiled pattern with `handler`.
    pub fn bind(&mut self, pattern: RoutePattern, handler: H) -> &mut Self {
        self.push(None, pattern, handler)
    }

    /// Append a pre-compiled pattern under a route name.
    pub fn bind_named(
        &mut self,
        name: impl Into<String>,
        pattern: RoutePattern,
        handler: H,
    ) -> &mut Self {
        self.push(Some(name.into()), pattern, handler)
    }

    fn push(&mut self, name: Option<String>, pattern: RoutePattern, handler: H) -> &mut Self {
        tracing::debug!(
            position = self.entries.len(),
            pattern = %pattern,
            name = name.as_deref().unwrap_or(""),
            "Route registered"
        );
        self.entries.push(RouteEntry {
            name,
            pattern,
            handler,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the table.
    pub fn build(self) -> Router<H> {
        Router {
            entries: self.entries,
        }
    }
}

impl<H> Default for RouterBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}
