//! Variables extracted by a successful route match.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::routing::coercion::Value;

/// A named placeholder value. `value` is `None` for an optional placeholder
/// the path did not fill.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub value: Option<Value>,
}

/// Variables in pattern order.
///
/// Exposed both as an ordered name to value mapping and, for single
/// resource handlers, as the value of the first variable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Variables {
    entries: Vec<Variable>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: impl Into<String>, value: Option<Value>) {
        self.entries.push(Variable {
            name: name.into(),
            value,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the pattern declared a placeholder with this name,
    /// whether or not it was filled.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|v| v.name == name)
    }

    /// Value of the named variable, `None` if undeclared or unfilled.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|v| v.name == name)
            .and_then(|v| v.value.as_ref())
    }

    /// The first variable, if any.
    pub fn first(&self) -> Option<&Variable> {
        self.entries.first()
    }

    /// Value of the first variable (legacy single-resource access).
    /// `None` when there are no variables or the first one is unfilled.
    pub fn resource(&self) -> Option<&Value> {
        self.first().and_then(|v| v.value.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.entries.iter()
    }

    /// Name to value lookup table. Unordered; use `iter` for pattern order.
    pub fn to_map(&self) -> HashMap<&str, Option<&Value>> {
        self.entries
            .iter()
            .map(|v| (v.name.as_str(), v.value.as_ref()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Variables {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Variables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for var in &self.entries {
            map.serialize_entry(&var.name, &var.value)?;
        }
        map.end()
    }
}
