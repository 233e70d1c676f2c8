//! Route pattern compilation.
//!
//! # Responsibilities
//! - Split a pattern into segments, ignoring empty ones
//! - Classify each segment as literal, mandatory or optional placeholder
//! - Resolve placeholder type tags at compile time
//!
//! # Grammar
//! ```text
//! /literal/<name>/<name:type>/[optional]/[optional:type]
//! ```
//!
//! # Design Decisions
//! - Patterns are compiled once and immutable afterwards
//! - Compilation is pure: the same string always yields equal nodes
//! - Unknown type tags fail here, never at request time

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::routing::coercion::{TypeTag, Value};
use crate::routing::error::{NodeError, PatternError};

/// Path segment separator.
pub const SEPARATOR: char = '/';

/// Iterate over the non-empty segments of a path.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty())
}

/// A named, optionally typed slot in a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placeholder {
    pub name: String,
    pub tag: Option<TypeTag>,
    pub optional: bool,
}

impl Placeholder {
    /// Coerce a segment captured by this placeholder. Untyped placeholders
    /// keep the segment as a string.
    pub fn coerce(&self, raw: &str) -> Result<Value, NodeError> {
        let tag = self.tag.unwrap_or(TypeTag::String);
        tag.coerce(raw).ok_or_else(|| NodeError::InvalidNodeType {
            name: self.name.clone(),
            tag,
            raw: raw.to_string(),
        })
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = if self.optional { ('[', ']') } else { ('<', '>') };
        match self.tag {
            Some(tag) => write!(f, "{}{}:{}{}", open, self.name, tag, close),
            None => write!(f, "{}{}{}", open, self.name, close),
        }
    }
}

/// One compiled segment of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Literal(String),
    Placeholder(Placeholder),
}

impl Node {
    fn parse(segment: &str) -> Result<Self, PatternError> {
        let placeholder = |body: &str, optional: bool| -> Result<Node, PatternError> {
            let (name, tag) = match body.split_once(':') {
                Some((name, tag)) => (name, Some(tag.parse::<TypeTag>()?)),
                None => (body, None),
            };

            if name.is_empty() {
                return Err(PatternError::EmptyPlaceholderName(segment.to_string()));
            }

            Ok(Node::Placeholder(Placeholder {
                name: name.to_string(),
                tag,
                optional,
            }))
        };

        if let Some(body) = segment.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
            placeholder(body, false)
        } else if let Some(body) = segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            placeholder(body, true)
        } else {
            Ok(Node::Literal(segment.to_string()))
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(value) => f.write_str(value),
            Node::Placeholder(p) => p.fmt(f),
        }
    }
}

/// A compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePattern {
    pattern: String,
    nodes: Vec<Node>,
}

impl RoutePattern {
    /// Compile a pattern string.
    pub fn compile(pattern: impl Into<String>) -> Result<Self, PatternError> {
        let pattern = pattern.into();
        let nodes = segments(&pattern)
            .map(Node::parse)
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = HashSet::new();
        for node in &nodes {
            if let Node::Placeholder(p) = node {
                if !seen.insert(p.name.as_str()) {
                    return Err(PatternError::DuplicatePlaceholder(p.name.clone()));
                }
            }
        }

        Ok(Self { pattern, nodes })
    }

    /// The source string the pattern was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Placeholders in declaration order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Placeholder(p) => Some(p),
            Node::Literal(_) => None,
        })
    }
}

impl FromStr for RoutePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoutePattern::compile(s)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(s: &str) -> Node {
        Node::Literal(s.to_string())
    }

    fn placeholder(name: &str, tag: Option<TypeTag>, optional: bool) -> Node {
        Node::Placeholder(Placeholder {
            name: name.to_string(),
            tag,
            optional,
        })
    }

    #[test]
    fn test_segments_ignore_empty() {
        let segs: Vec<_> = segments("//a///b/").collect();
        assert_eq!(segs, vec!["a", "b"]);
        assert_eq!(segments("").count(), 0);
        assert_eq!(segments("/").count(), 0);
    }

    #[test]
    fn test_compile_nodes() {
        let pattern = RoutePattern::compile("/user/<id:integer>/[tab]/[flag:bool]").unwrap();
        assert_eq!(
            pattern.nodes(),
            &[
                literal("user"),
                placeholder("id", Some(TypeTag::Integer), false),
                placeholder("tab", None, true),
                placeholder("flag", Some(TypeTag::Boolean), true),
            ]
        );
        assert_eq!(pattern.placeholders().count(), 3);
        assert_eq!(pattern.to_string(), "/user/<id:integer>/[tab]/[flag:bool]");
    }

    #[test]
    fn test_compile_is_idempotent() {
        let a = RoutePattern::compile("/a/<b>/[c:float]").unwrap();
        let b: RoutePattern = "/a/<b>/[c:float]".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.nodes(), b.nodes());
    }

    #[test]
    fn test_invalid_placeholder_type() {
        assert_eq!(
            RoutePattern::compile("/user/<id:uuid>").unwrap_err(),
            PatternError::InvalidPlaceholderType("uuid".into())
        );
        assert_eq!(
            RoutePattern::compile("/user/[id:x:y]").unwrap_err(),
            PatternError::InvalidPlaceholderType("x:y".into())
        );
    }

    #[test]
    fn test_empty_and_duplicate_names() {
        assert_eq!(
            RoutePattern::compile("/a/<>").unwrap_err(),
            PatternError::EmptyPlaceholderName("<>".into())
        );
        assert_eq!(
            RoutePattern::compile("/a/[:integer]").unwrap_err(),
            PatternError::EmptyPlaceholderName("[:integer]".into())
        );
        assert_eq!(
            RoutePattern::compile("/<id>/x/[id]").unwrap_err(),
            PatternError::DuplicatePlaceholder("id".into())
        );
    }

    #[test]
    fn test_unbalanced_brackets_are_literals() {
        let pattern = RoutePattern::compile("/<id/[x>/<").unwrap();
        assert_eq!(pattern.nodes(), &[literal("<id"), literal("[x>"), literal("<")]);
    }

    #[test]
    fn test_placeholder_coercion_error() {
        let p = Placeholder {
            name: "id".into(),
            tag: Some(TypeTag::Integer),
            optional: false,
        };
        assert_eq!(p.coerce("7").unwrap(), Value::Integer(7));
        assert_eq!(
            p.coerce("seven").unwrap_err(),
            NodeError::InvalidNodeType {
                name: "id".into(),
                tag: TypeTag::Integer,
                raw: "seven".into(),
            }
        );
    }
}
