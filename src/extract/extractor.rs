//! Typed extraction over free-form maps

use super::types::{Extracted, FieldKind, FieldSpec, FieldValue};
use crate::error::{kind_name, Error, Result};
use crate::shape::normalize;
use crate::types::JsonObject;
use serde_json::Value;
use tracing::trace;

/// Split a raw map into typed values of declared fields and a residual map
///
/// Undeclared keys land in the residual unchanged. A declared key with a
/// null value is treated as absent but also kept in the residual, so every
/// wire key stays recoverable. A nested key whose value is not a map is
/// kept verbatim in the residual.
pub fn extract(raw: &JsonObject, specs: &[FieldSpec]) -> Result<Extracted> {
    let mut out = Extracted::default();

    for (key, value) in raw {
        let Some(spec) = specs.iter().find(|s| s.key == key.as_str()) else {
            out.residual.insert(key.clone(), value.clone());
            continue;
        };

        if value.is_null() {
            out.residual.insert(key.clone(), Value::Null);
            continue;
        }

        let coerced = match spec.kind {
            FieldKind::Text => FieldValue::Text(coerce_text(spec.key, value)?),
            FieldKind::Unsigned { from_string } => {
                FieldValue::Unsigned(coerce_unsigned(spec.key, value, from_string)?)
            }
            FieldKind::Signed { from_string } => {
                FieldValue::Signed(coerce_signed(spec.key, value, from_string)?)
            }
            FieldKind::Float { from_string } => {
                FieldValue::Float(coerce_float(spec.key, value, from_string)?)
            }
            FieldKind::Flag => FieldValue::Flag(coerce_flag(spec.key, value)?),
            FieldKind::Nested(fields) => match value {
                Value::Object(map) => FieldValue::Nested(extract(map, fields)?),
                _ => {
                    out.residual.insert(key.clone(), value.clone());
                    continue;
                }
            },
            FieldKind::Records(fields) => {
                FieldValue::Records(extract_records(spec.key, value, fields)?)
            }
        };
        out.values.insert(spec.key, coerced);
    }

    if !out.residual.is_empty() {
        trace!(
            residual = out.residual.len(),
            typed = out.values.len(),
            "Preserved undeclared fields"
        );
    }

    Ok(out)
}

fn extract_records(key: &str, value: &Value, fields: &[FieldSpec]) -> Result<Vec<Extracted>> {
    let mut records = Vec::new();
    for (i, item) in normalize(Some(value), key)?.into_iter().enumerate() {
        match item {
            Value::Null => {}
            Value::Object(map) => records.push(extract(map, fields)?),
            other => return Err(Error::shape(format!("{key}[{i}]"), kind_name(other))),
        }
    }
    Ok(records)
}

// ============================================================================
// Coercions
// ============================================================================

fn mismatch(key: &str, value: &Value, expected: &str) -> Error {
    let text = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Error::format(text, format!("{expected} for field '{key}'"))
}

/// Coerce a string field; numbers are rendered as text
pub(crate) fn coerce_text(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(mismatch(key, other, "string")),
    }
}

pub(crate) fn coerce_unsigned(key: &str, value: &Value, from_string: bool) -> Result<u64> {
    match value {
        Value::Number(n) => n.as_u64().ok_or_else(|| mismatch(key, value, "unsigned integer")),
        Value::String(s) if from_string => s
            .trim()
            .parse()
            .map_err(|_| mismatch(key, value, "unsigned integer")),
        other => Err(mismatch(key, other, "unsigned integer")),
    }
}

/// Coerce a signed integer field
pub(crate) fn coerce_signed(key: &str, value: &Value, from_string: bool) -> Result<i64> {
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| mismatch(key, value, "integer")),
        Value::String(s) if from_string => {
            s.trim().parse().map_err(|_| mismatch(key, value, "integer"))
        }
        other => Err(mismatch(key, other, "integer")),
    }
}

/// Coerce a floating point field
pub(crate) fn coerce_float(key: &str, value: &Value, from_string: bool) -> Result<f64> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| mismatch(key, value, "number")),
        Value::String(s) if from_string => {
            s.trim().parse().map_err(|_| mismatch(key, value, "number"))
        }
        other => Err(mismatch(key, other, "number")),
    }
}

fn coerce_flag(key: &str, value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => match n.as_u64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(mismatch(key, value, "yes/no flag")),
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "1" | "true" => Ok(true),
            "no" | "0" | "false" => Ok(false),
            _ => Err(mismatch(key, value, "yes/no flag")),
        },
        other => Err(mismatch(key, other, "yes/no flag")),
    }
}
