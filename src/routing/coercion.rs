//! Placeholder type tags and their coercion functions.
//!
//! # Responsibilities
//! - Resolve a `:type` suffix to a [`TypeTag`]
//! - Convert a raw path segment into a typed [`Value`]
//!
//! # Design Decisions
//! - Closed set of tags; an unknown tag is a compile-time pattern error
//! - Coercion is a plain function pointer per tag, no allocation on failure

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::routing::error::PatternError;

/// Type tag of a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    #[serde(alias = "str")]
    String,
    #[serde(alias = "int")]
    Integer,
    #[serde(alias = "bool")]
    Boolean,
    Float,
}

/// A coercion function: `Some(value)` on success, `None` if the segment
/// is not a valid representation of the type.
pub type Coercion = fn(&str) -> Option<Value>;

impl TypeTag {
    /// All supported tags.
    pub const ALL: [TypeTag; 4] = [
        TypeTag::String,
        TypeTag::Integer,
        TypeTag::Boolean,
        TypeTag::Float,
    ];

    /// Look up a tag by its name in a pattern. Accepts the canonical names
    /// and the short aliases `str`, `int` and `bool`.
    pub fn lookup(tag: &str) -> Option<Self> {
        match tag {
            "string" | "str" => Some(TypeTag::String),
            "integer" | "int" => Some(TypeTag::Integer),
            "boolean" | "bool" => Some(TypeTag::Boolean),
            "float" => Some(TypeTag::Float),
            _ => None,
        }
    }

    /// Canonical name of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Integer => "integer",
            TypeTag::Boolean => "boolean",
            TypeTag::Float => "float",
        }
    }

    /// The coercion function registered for this tag.
    pub fn coercion(&self) -> Coercion {
        match self {
            TypeTag::String => coerce_string,
            TypeTag::Integer => coerce_integer,
            TypeTag::Boolean => coerce_boolean,
            TypeTag::Float => coerce_float,
        }
    }

    /// Coerce a raw segment into a value of this type.
    pub fn coerce(&self, raw: &str) -> Option<Value> {
        (self.coercion())(raw)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::lookup(s).ok_or_else(|| PatternError::InvalidPlaceholderType(s.to_string()))
    }
}

fn coerce_string(raw: &str) -> Option<Value> {
    Some(Value::String(raw.to_string()))
}

fn coerce_integer(raw: &str) -> Option<Value> {
    raw.parse::<i64>().ok().map(Value::Integer)
}

fn coerce_boolean(raw: &str) -> Option<Value> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(Value::Boolean(true)),
        "false" | "0" | "no" | "off" => Some(Value::Boolean(false)),
        _ => None,
    }
}

/// Finite values only; `inf` and `nan` have no JSON scalar form.
fn coerce_float(raw: &str) -> Option<Value> {
    raw.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(Value::Float)
}

/// A typed value extracted from a path segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Integer(i64),
    Boolean(bool),
    Float(f64),
}

impl Value {
    /// The tag this value was coerced with.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::String(_) => TypeTag::String,
            Value::Integer(_) => TypeTag::Integer,
            Value::Boolean(_) => TypeTag::Boolean,
            Value::Float(_) => TypeTag::Float,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}
