//! Payload decoder module
//!
//! Supports: JSON, XML
//!
//! # Overview
//!
//! The decode module turns a raw response body into a `serde_json::Value`
//! tree. JSON bodies are parsed as-is. XML bodies are converted element by
//! element: repeated child elements become arrays and single ones stay
//! objects, so both wire formats carry the same singular/plural ambiguity
//! and are normalized by the same code downstream.

mod decoders;
mod types;

pub use decoders::{decode_payload, JsonDecoder, XmlDecoder, MAX_XML_DEPTH};
pub use types::{DecoderFormat, PayloadDecoder};
