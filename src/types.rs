//! Common types used throughout transcode-wire
//!
//! This module contains shared type aliases and small utility types
//! used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the command-line front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

// ============================================================================
// Preset Type
// ============================================================================

/// Category of a preset as reported by the service
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetType {
    /// User-created preset
    #[default]
    User,
    /// Standard preset shipped by the service
    Ui,
    /// Any category this version does not know about, kept verbatim
    #[serde(untagged)]
    Other(String),
}

impl PresetType {
    /// Parse the wire text of a preset type
    pub fn from_wire(text: &str) -> Self {
        match text {
            "user" => PresetType::User,
            "ui" => PresetType::Ui,
            other => PresetType::Other(other.to_string()),
        }
    }

    /// Wire text of this preset type
    pub fn as_str(&self) -> &str {
        match self {
            PresetType::User => "user",
            PresetType::Ui => "ui",
            PresetType::Other(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_into_tracing() {
        assert_eq!(tracing::Level::from(LogLevel::Debug), tracing::Level::DEBUG);
        assert_eq!(tracing::Level::from(LogLevel::default()), tracing::Level::INFO);
    }

    #[test]
    fn test_preset_type_from_wire() {
        assert_eq!(PresetType::from_wire("user"), PresetType::User);
        assert_eq!(PresetType::from_wire("ui"), PresetType::Ui);
        assert_eq!(
            PresetType::from_wire("shared"),
            PresetType::Other("shared".to_string())
        );
        assert_eq!(PresetType::from_wire("shared").as_str(), "shared");
    }

    #[test]
    fn test_preset_type_serialize() {
        assert_eq!(serde_json::to_string(&PresetType::Ui).unwrap(), "\"ui\"");
        assert_eq!(
            serde_json::to_string(&PresetType::Other("x".into())).unwrap(),
            "\"x\""
        );
    }
}
