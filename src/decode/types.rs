//! Decoder types and traits
//!
//! Defines the core decoder abstractions.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Format of the response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecoderFormat {
    /// JSON format (default)
    #[default]
    Json,
    /// XML format
    Xml,
}

impl DecoderFormat {
    /// Guess the format from the first non-blank character of a body
    pub fn detect(body: &str) -> Self {
        if body.trim_start().starts_with('<') {
            DecoderFormat::Xml
        } else {
            DecoderFormat::Json
        }
    }
}

/// Trait for decoding response bodies into a value tree
pub trait PayloadDecoder: Send + Sync {
    /// Decode the response body into a single JSON value
    fn decode(&self, body: &str) -> Result<Value>;
}
