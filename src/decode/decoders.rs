//! Decoder implementations
//!
//! Each decoder handles a specific response format.

use super::types::{DecoderFormat, PayloadDecoder};
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use tracing::debug;

// ============================================================================
// JSON Decoder
// ============================================================================

/// JSON decoder
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self
    }
}

impl PayloadDecoder for JsonDecoder {
    fn decode(&self, body: &str) -> Result<Value> {
        Ok(serde_json::from_str(body)?)
    }
}

// ============================================================================
// XML Decoder
// ============================================================================

/// XML decoder producing `{ root_name: content }`
///
/// Attributes are stored as `@name` keys and mixed text as `#text`. Element
/// text is kept as a string; typing is left to the record mapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlDecoder;

impl XmlDecoder {
    /// Create a new XML decoder
    pub fn new() -> Self {
        Self
    }
}

impl PayloadDecoder for XmlDecoder {
    fn decode(&self, body: &str) -> Result<Value> {
        xml_to_json(body)
    }
}

/// Decode a body with the decoder matching its detected format
pub fn decode_payload(body: &str) -> Result<Value> {
    let format = DecoderFormat::detect(body);
    debug!(?format, bytes = body.len(), "Decoding payload");
    match format {
        DecoderFormat::Json => JsonDecoder.decode(body),
        DecoderFormat::Xml => XmlDecoder.decode(body),
    }
}

/// Deepest element nesting accepted, matching serde_json's recursion limit
pub const MAX_XML_DEPTH: usize = 128;

fn xml_to_json(xml: &str) -> Result<Value> {
    let body = skip_misc(xml)?;
    if !body.starts_with('<') {
        return Err(Error::xml("Input does not appear to be XML"));
    }

    let (name, value, rest) = parse_element(body, 1)?;
    if !skip_misc(rest)?.is_empty() {
        return Err(Error::xml("Unexpected content after root element"));
    }

    let mut root = Map::new();
    root.insert(name, value);
    Ok(Value::Object(root))
}

/// Skip whitespace, declarations, comments and doctype
fn skip_misc(mut input: &str) -> Result<&str> {
    loop {
        input = input.trim_start();
        let terminator = if input.starts_with("<?") {
            "?>"
        } else if input.starts_with("<!--") {
            "-->"
        } else if input.starts_with("<!") {
            ">"
        } else {
            return Ok(input);
        };
        let end = input
            .find(terminator)
            .ok_or_else(|| Error::xml(format!("Unterminated markup, expected '{terminator}'")))?;
        input = &input[end + terminator.len()..];
    }
}

/// Parse an element and return its name, value and the remaining input
fn parse_element(input: &str, depth: usize) -> Result<(String, Value, &str)> {
    if depth > MAX_XML_DEPTH {
        return Err(Error::xml(format!(
            "Elements nested deeper than {MAX_XML_DEPTH} levels"
        )));
    }

    let after_open = input
        .strip_prefix('<')
        .ok_or_else(|| Error::xml("Expected opening tag"))?;

    let name_len = after_open
        .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
        .ok_or_else(|| Error::xml("Malformed tag"))?;
    let name = &after_open[..name_len];
    if name.is_empty() {
        return Err(Error::xml("Empty tag name"));
    }

    let mut rest = &after_open[name_len..];
    let mut attrs = Map::new();

    loop {
        rest = rest.trim_start();
        if let Some(r) = rest.strip_prefix("/>") {
            return Ok((name.to_string(), element_value(attrs, Map::new(), ""), r));
        }
        if let Some(r) = rest.strip_prefix('>') {
            rest = r;
            break;
        }
        let (attr, value, r) = parse_attribute(rest, name)?;
        attrs.insert(format!("@{attr}"), Value::String(value));
        rest = r;
    }

    let mut children = Map::new();
    let mut text = String::new();

    loop {
        if let Some(r) = rest.strip_prefix("</") {
            let end = r
                .find('>')
                .ok_or_else(|| Error::xml(format!("Malformed closing tag for {name}")))?;
            let closing = r[..end].trim();
            if closing != name {
                return Err(Error::xml(format!(
                    "Mismatched closing tag: expected </{name}>, found </{closing}>"
                )));
            }
            return Ok((
                name.to_string(),
                element_value(attrs, children, &text),
                &r[end + 1..],
            ));
        }

        if rest.starts_with("<!--") {
            let end = rest
                .find("-->")
                .ok_or_else(|| Error::xml("Unterminated comment"))?;
            rest = &rest[end + 3..];
        } else if let Some(r) = rest.strip_prefix("<![CDATA[") {
            let end = r
                .find("]]>")
                .ok_or_else(|| Error::xml("Unterminated CDATA section"))?;
            text.push_str(&r[..end]);
            rest = &r[end + 3..];
        } else if rest.starts_with('<') {
            let (child, value, r) = parse_element(rest, depth + 1)?;
            push_child(&mut children, child, value);
            rest = r;
        } else {
            let end = rest
                .find('<')
                .ok_or_else(|| Error::xml(format!("Missing closing tag for {name}")))?;
            text.push_str(&unescape(&rest[..end]));
            rest = &rest[end..];
        }
    }
}

/// Parse `key="value"` and return key, unescaped value and remaining input
fn parse_attribute<'a>(input: &'a str, element: &str) -> Result<(&'a str, String, &'a str)> {
    let malformed = || Error::xml(format!("Malformed attribute in <{element}>"));

    let eq = input.find('=').ok_or_else(malformed)?;
    let key = input[..eq].trim();
    if key.is_empty() || key.contains(|c: char| c.is_whitespace() || c == '>') {
        return Err(malformed());
    }

    let value_part = input[eq + 1..].trim_start();
    let quote = value_part
        .chars()
        .next()
        .filter(|c| *c == '"' || *c == '\'')
        .ok_or_else(malformed)?;
    let inner = &value_part[1..];
    let close = inner.find(quote).ok_or_else(malformed)?;

    Ok((key, unescape(&inner[..close]), &inner[close + 1..]))
}

/// Merge a child into its parent, turning repeated names into arrays
fn push_child(children: &mut Map<String, Value>, name: String, value: Value) {
    if let Some(existing) = children.get_mut(&name) {
        if let Value::Array(arr) = existing {
            arr.push(value);
        } else {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    } else {
        children.insert(name, value);
    }
}

/// Build the value of a closed element
fn element_value(attrs: Map<String, Value>, children: Map<String, Value>, text: &str) -> Value {
    let text = text.trim();
    if children.is_empty() && text.is_empty() && is_nil(&attrs) {
        return Value::Null;
    }
    if attrs.is_empty() && children.is_empty() {
        if text.is_empty() {
            return Value::Null;
        }
        return Value::String(text.to_string());
    }

    let mut obj = attrs;
    obj.extend(children);
    if !text.is_empty() {
        obj.insert("#text".to_string(), Value::String(text.to_string()));
    }
    Value::Object(obj)
}

/// Whether an element is marked `nil="true"`
fn is_nil(attrs: &Map<String, Value>) -> bool {
    attrs.get("@nil").and_then(Value::as_str) == Some("true")
}

/// Replace the predefined and numeric character entities
fn unescape(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let Some(semi) = tail.find(';') else {
            out.push_str(tail);
            return out;
        };
        let entity = &tail[1..semi];
        let decoded = match entity {
            "lt" => Some('<'),
            "gt" => Some('>'),
            "amp" => Some('&'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => entity
                .strip_prefix("#x")
                .map(|hex| u32::from_str_radix(hex, 16))
                .or_else(|| entity.strip_prefix('#').map(str::parse::<u32>))
                .and_then(std::result::Result::ok)
                .and_then(char::from_u32),
        };
        match decoded {
            Some(c) => out.push(c),
            None => out.push_str(&tail[..=semi]),
        }
        rest = &tail[semi + 1..];
    }
    out.push_str(rest);
    out
}
