//! Singular/plural normalization

use crate::error::{kind_name, Error, Result};
use serde_json::Value;

/// A node that held nothing, one element, or several
#[derive(Debug, Clone, PartialEq)]
pub enum OneOrMany<T> {
    /// Absent or null
    Empty,
    /// A bare element
    One(T),
    /// An array, order preserved
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Number of elements
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::Empty => 0,
            OneOrMany::One(_) => 1,
            OneOrMany::Many(items) => items.len(),
        }
    }

    /// Whether there are no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into a sequence
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Empty => Vec::new(),
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }

    /// Apply a function to every element
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> OneOrMany<U> {
        match self {
            OneOrMany::Empty => OneOrMany::Empty,
            OneOrMany::One(item) => OneOrMany::One(f(item)),
            OneOrMany::Many(items) => OneOrMany::Many(items.into_iter().map(f).collect()),
        }
    }
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        value.into_vec()
    }
}

impl<T> IntoIterator for OneOrMany<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a> OneOrMany<&'a Value> {
    /// Classify a node that must be an object, an array, or absent
    pub fn of_objects(node: Option<&'a Value>, path: &str) -> Result<Self> {
        match node {
            None | Some(Value::Null) => Ok(OneOrMany::Empty),
            Some(obj @ Value::Object(_)) => Ok(OneOrMany::One(obj)),
            Some(Value::Array(items)) => Ok(OneOrMany::Many(items.iter().collect())),
            Some(other) => Err(Error::shape(path, kind_name(other))),
        }
    }

    /// Classify a node of scalar elements, where a bare scalar is one element
    pub fn of_values(node: Option<&'a Value>) -> Self {
        match node {
            None | Some(Value::Null) => OneOrMany::Empty,
            Some(Value::Array(items)) => OneOrMany::Many(items.iter().collect()),
            Some(other) => OneOrMany::One(other),
        }
    }
}

/// Normalize an object-or-array node into a sequence
///
/// Null elements inside an array are passed through untouched; deciding
/// what they mean is up to the caller. `path` only labels the error.
pub fn normalize<'a>(node: Option<&'a Value>, path: &str) -> Result<Vec<&'a Value>> {
    OneOrMany::of_objects(node, path).map(OneOrMany::into_vec)
}

/// Normalize a scalar-or-array node into a sequence (never fails)
pub fn normalize_values(node: Option<&Value>) -> Vec<&Value> {
    OneOrMany::of_values(node).into_vec()
}
