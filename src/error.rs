//! Error types for transcode-wire
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for transcode-wire
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Decoding Errors
    // ============================================================================
    /// A value matched neither a sentinel nor the expected textual layout
    #[error("Value {text:?} does not match layout {layout:?}")]
    Format { text: String, layout: String },

    /// A node required to be object/array/absent had another shape
    #[error("Expected object, array or null at '{path}', found {found}")]
    Shape { path: String, found: &'static str },

    /// The upstream service answered with its own error envelope
    #[error("Remote API error: {message} {errors:?}")]
    RemoteApi { message: String, errors: Vec<String> },

    /// The top-level envelope lacks its expected root key
    #[error("Malformed envelope: {message}")]
    WireFormat { message: String },

    // ============================================================================
    // Payload Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("XML parsing error: {message}")]
    XmlParse { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a format error
    pub fn format(text: impl Into<String>, layout: impl Into<String>) -> Self {
        Self::Format {
            text: text.into(),
            layout: layout.into(),
        }
    }

    /// Create a shape error
    pub fn shape(path: impl Into<String>, found: &'static str) -> Self {
        Self::Shape {
            path: path.into(),
            found,
        }
    }

    /// Create a remote API error
    pub fn remote_api(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self::RemoteApi {
            message: message.into(),
            errors,
        }
    }

    /// Create a wire format error
    pub fn wire_format(message: impl Into<String>) -> Self {
        Self::WireFormat {
            message: message.into(),
        }
    }

    /// Create an XML parse error
    pub fn xml(message: impl Into<String>) -> Self {
        Self::XmlParse {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if the call failed on the server side rather than in decoding
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::RemoteApi { .. })
    }
}

/// Name of a JSON value's kind, used in shape diagnostics
pub(crate) fn kind_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Result type alias for transcode-wire
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
