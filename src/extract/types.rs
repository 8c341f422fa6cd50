//! Field specification and extraction result types

use crate::types::JsonObject;
use std::collections::HashMap;

// ============================================================================
// Field Specs
// ============================================================================

/// How a declared wire key is coerced
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// String (numbers are accepted and rendered as text)
    Text,
    /// Non-negative integer, optionally encoded as a string
    Unsigned { from_string: bool },
    /// Signed integer, optionally encoded as a string
    Signed { from_string: bool },
    /// Floating point number, optionally encoded as a string
    Float { from_string: bool },
    /// Boolean in one of the yes/no, 1/0 or true/false vocabularies
    Flag,
    /// A single nested free-form map
    Nested(&'static [FieldSpec]),
    /// An object-or-array of free-form maps
    Records(&'static [FieldSpec]),
}

/// A declared wire key and its target type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Key on the wire
    pub key: &'static str,
    /// Target type
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Declare a string field
    pub const fn text(key: &'static str) -> Self {
        Self {
            key,
            kind: FieldKind::Text,
        }
    }

    /// Declare an unsigned integer field
    pub const fn unsigned(key: &'static str) -> Self {
        Self {
            key,
            kind: FieldKind::Unsigned { from_string: false },
        }
    }

    /// Declare a signed integer field
    pub const fn signed(key: &'static str) -> Self {
        Self {
            key,
            kind: FieldKind::Signed { from_string: false },
        }
    }

    /// Declare a floating point field
    pub const fn float(key: &'static str) -> Self {
        Self {
            key,
            kind: FieldKind::Float { from_string: false },
        }
    }

    /// Declare a boolean vocabulary field
    pub const fn flag(key: &'static str) -> Self {
        Self {
            key,
            kind: FieldKind::Flag,
        }
    }

    /// Declare a nested map field
    pub const fn nested(key: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self {
            key,
            kind: FieldKind::Nested(fields),
        }
    }

    /// Declare an object-or-array of maps
    pub const fn records(key: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self {
            key,
            kind: FieldKind::Records(fields),
        }
    }

    /// Also accept the numeric value encoded as a string
    #[must_use]
    pub const fn from_string(self) -> Self {
        let kind = match self.kind {
            FieldKind::Unsigned { .. } => FieldKind::Unsigned { from_string: true },
            FieldKind::Signed { .. } => FieldKind::Signed { from_string: true },
            FieldKind::Float { .. } => FieldKind::Float { from_string: true },
            other => other,
        };
        Self {
            key: self.key,
            kind,
        }
    }
}

// ============================================================================
// Extraction Result
// ============================================================================

/// A coerced value of a declared field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Flag(bool),
    Nested(Extracted),
    Records(Vec<Extracted>),
}

/// Typed values of declared fields plus the untouched residual map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extracted {
    pub(crate) values: HashMap<&'static str, FieldValue>,
    pub(crate) residual: JsonObject,
}

impl Extracted {
    /// Coerced value of a declared field
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Keys with no matching [`FieldSpec`], with their original values
    pub fn residual(&self) -> &JsonObject {
        &self.residual
    }

    /// Consume into the residual map
    pub fn into_residual(self) -> JsonObject {
        self.residual
    }

    /// Whether a wire key is recoverable from a typed value or the residual
    pub fn recovers(&self, key: &str) -> bool {
        self.values.contains_key(key) || self.residual.contains_key(key)
    }

    /// Take a string field, empty if absent
    pub fn take_text(&mut self, key: &str) -> String {
        match self.values.remove(key) {
            Some(FieldValue::Text(s)) => s,
            _ => String::new(),
        }
    }

    /// Take an unsigned field, zero if absent
    pub fn take_unsigned(&mut self, key: &str) -> u64 {
        match self.values.remove(key) {
            Some(FieldValue::Unsigned(n)) => n,
            _ => 0,
        }
    }

    /// Take a signed field, zero if absent
    pub fn take_signed(&mut self, key: &str) -> i64 {
        match self.values.remove(key) {
            Some(FieldValue::Signed(n)) => n,
            _ => 0,
        }
    }

    /// Take a float field, zero if absent
    pub fn take_float(&mut self, key: &str) -> f64 {
        match self.values.remove(key) {
            Some(FieldValue::Float(n)) => n,
            _ => 0.0,
        }
    }

    /// Take a flag field, false if absent
    pub fn take_flag(&mut self, key: &str) -> bool {
        matches!(self.values.remove(key), Some(FieldValue::Flag(true)))
    }

    /// Take a nested map field
    pub fn take_nested(&mut self, key: &str) -> Option<Extracted> {
        match self.values.remove(key) {
            Some(FieldValue::Nested(inner)) => Some(inner),
            _ => None,
        }
    }

    /// Take a record list field, empty if absent
    pub fn take_records(&mut self, key: &str) -> Vec<Extracted> {
        match self.values.remove(key) {
            Some(FieldValue::Records(items)) => items,
            _ => Vec::new(),
        }
    }
}
