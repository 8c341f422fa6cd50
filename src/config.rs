//! Configuration for the record mapper
//!
//! Every timestamp family has a built-in layout and sentinel list. A YAML
//! file may override any of them, for instance when a deployment emits an
//! extra zero-date literal:
//!
//! ```yaml
//! status:
//!   name: status
//!   layout: "%Y-%m-%d %H:%M:%S"
//!   sentinels: ["", "0000-00-00 00:00:00", "N/A"]
//! ```

use crate::error::{Error, Result};
use crate::temporal::TimeFamily;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

// ============================================================================
// Mapper Config
// ============================================================================

/// Timestamp families used by [`crate::mapper::DomainMapper`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Media status and format timestamps
    #[serde(default = "TimeFamily::status")]
    pub status: TimeFamily,

    /// Conductor job and node timestamps
    #[serde(default = "TimeFamily::conductor")]
    pub conductor: TimeFamily,

    /// Conductor job error timestamps
    #[serde(default = "TimeFamily::job_error")]
    pub job_error: TimeFamily,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            status: TimeFamily::status(),
            conductor: TimeFamily::conductor(),
            job_error: TimeFamily::job_error(),
        }
    }
}

impl MapperConfig {
    /// Parse and validate a YAML configuration
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        debug!("Loading mapper config from {}", path.display());
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Check every family layout
    pub fn validate(&self) -> Result<()> {
        self.status.validate()?;
        self.conductor.validate()?;
        self.job_error.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_matches_builtin_families() {
        let config = MapperConfig::default();
        assert_eq!(config.status, TimeFamily::status());
        assert_eq!(config.conductor, TimeFamily::conductor());
        assert_eq!(config.job_error, TimeFamily::job_error());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            MapperConfig::from_yaml_str("").unwrap(),
            MapperConfig::default()
        );
    }

    #[test]
    fn test_partial_override() {
        let yaml = r#"
status:
  name: status
  layout: "%Y-%m-%d %H:%M:%S"
  sentinels: ["", "0000-00-00 00:00:00", "N/A"]
"#;
        let config = MapperConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.status.sentinels.len(), 3);
        assert!(config.status.normalize_utc);
        assert_eq!(config.conductor, TimeFamily::conductor());
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let yaml = r#"
job_error:
  name: job_error
  layout: "%Y-%Q"
"#;
        assert!(matches!(
            MapperConfig::from_yaml_str(yaml),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        assert!(matches!(
            MapperConfig::from_yaml_str("status: [unclosed"),
            Err(Error::YamlParse(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "conductor:\n  name: conductor\n  layout: \"%Y-%m-%d %H:%M:%S %z\"\n  normalize_utc: false").unwrap();
        let config = MapperConfig::from_file(file.path()).unwrap();
        assert!(!config.conductor.normalize_utc);
        assert!(config.conductor.sentinels.is_empty());
    }

    #[test]
    fn test_from_missing_file() {
        assert!(matches!(
            MapperConfig::from_file("/definitely/not/here.yaml"),
            Err(Error::FileNotFound { .. })
        ));
    }
}
