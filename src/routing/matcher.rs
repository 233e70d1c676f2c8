//! Path matching against a compiled pattern.
//!
//! # Responsibilities
//! - Pair path segments with pattern nodes, left to right
//! - Coerce placeholder segments into typed values
//! - Report why a route declined, wrapped as a single route-level reason
//!
//! # Design Decisions
//! - Strictly positional: no named lookup, no globbing
//! - Optional placeholders may only go unfilled once the path is exhausted
//! - Declining is an ordinary outcome, not an error channel
//! - O(pattern length); no allocation beyond the extracted variables

use crate::routing::error::{NodeError, PathMismatch};
use crate::routing::pattern::{segments, Node, RoutePattern};
use crate::routing::variables::Variables;

/// Result of matching one route against one path.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// Every node was satisfied and the path was fully consumed.
    Matched(Variables),
    /// The route does not accept this path.
    Declined(PathMismatch),
}

impl MatchOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }

    pub fn into_result(self) -> Result<Variables, PathMismatch> {
        match self {
            MatchOutcome::Matched(vars) => Ok(vars),
            MatchOutcome::Declined(reason) => Err(reason),
        }
    }
}

impl RoutePattern {
    /// Match a decoded path against this pattern.
    pub fn match_path(&self, path: &str) -> MatchOutcome {
        match match_nodes(self.nodes(), path) {
            Ok(vars) => MatchOutcome::Matched(vars),
            Err(cause) => MatchOutcome::Declined(PathMismatch::new(cause)),
        }
    }
}

fn match_nodes(nodes: &[Node], path: &str) -> Result<Variables, NodeError> {
    let mut path_segments = segments(path);
    let mut vars = Variables::with_capacity(nodes.len());

    for node in nodes {
        match (node, path_segments.next()) {
            (Node::Literal(expected), Some(actual)) if actual == expected.as_str() => {}
            (Node::Literal(expected), actual) => {
                return Err(NodeError::NodeMismatch {
                    expected: expected.clone(),
                    actual: actual.map(str::to_string),
                });
            }
            (Node::Placeholder(p), Some(raw)) => {
                let value = p.coerce(raw)?;
                vars.push(p.name.as_str(), Some(value));
            }
            (Node::Placeholder(p), None) if p.optional => {
                vars.push(p.name.as_str(), None);
            }
            (Node::Placeholder(p), None) => {
                return Err(NodeError::NodeMismatch {
                    expected: p.to_string(),
                    actual: None,
                });
            }
        }
    }

    let remainder: Vec<String> = path_segments.map(str::to_string).collect();
    if !remainder.is_empty() {
        return Err(NodeError::UnconsumedPath(remainder));
    }

    Ok(vars)
}
