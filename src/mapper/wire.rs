//! Envelope unwrapping and upstream error detection

use super::{cell, objects, Fields};
use crate::error::{kind_name, Error, Result};
use crate::shape::normalize_values;
use crate::types::JsonObject;
use serde_json::Value;
use tracing::debug;

/// Locate the `response` object of a JSON envelope
///
/// An `errors` member under `response` is the service's own error envelope
/// and is reported before any structural decoding takes place.
pub(super) fn response(envelope: &Value) -> Result<&JsonObject> {
    let response = envelope
        .get("response")
        .ok_or_else(|| Error::wire_format("missing 'response' key"))?;

    let Value::Object(obj) = response else {
        return Err(Error::shape("response", kind_name(response)));
    };

    if let Some(errors) = obj.get("errors").filter(|e| !e.is_null()) {
        return Err(remote_error(obj.get("message"), errors));
    }

    Ok(obj)
}

/// Locate the items of a conductor list document
///
/// Accepts a `<list>` root holding one or many `<item>` elements, or a bare
/// `<item>` root. An `errors` root is the node's error envelope.
pub(super) fn document_items<'a>(
    document: &'a Value,
    list: &str,
    item: &str,
) -> Result<Vec<Fields<'a>>> {
    if let Some(errors) = document.get("errors") {
        return Err(remote_error(None, errors));
    }

    if let Some(node) = document.get(list) {
        match node {
            Value::Null => Ok(Vec::new()),
            Value::Object(obj) => objects(obj.get(item), &format!("{list}.{item}")),
            other => Err(Error::shape(list, kind_name(other))),
        }
    } else if let Some(node) = document.get(item) {
        objects(Some(node), item)
    } else {
        Err(Error::wire_format(format!(
            "expected a '{list}' or '{item}' root element"
        )))
    }
}

/// Build a remote error from a message and an `errors` node
///
/// `errors` is either `{"error": <string or list>}` or the list itself.
pub(super) fn remote_error(message: Option<&Value>, errors: &Value) -> Error {
    let message = message.and_then(cell).unwrap_or_default();
    let list = match errors {
        Value::Object(obj) => obj.get("error"),
        other => Some(other),
    };
    let errors: Vec<String> = normalize_values(list).into_iter().filter_map(cell).collect();

    debug!(%message, count = errors.len(), "Upstream returned an error envelope");
    Error::remote_api(message, errors)
}
