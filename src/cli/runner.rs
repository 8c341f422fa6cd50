//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::MapperConfig;
use crate::decode::decode_payload;
use crate::error::{Error, Result, ResultExt};
use crate::mapper::DomainMapper;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Mapper with the built-in timestamp families
static DEFAULT_MAPPER: Lazy<DomainMapper> = Lazy::new(DomainMapper::default);

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        for line in self.execute()? {
            println!("{line}");
        }
        Ok(())
    }

    /// Run the command and return the rendered output lines
    pub fn execute(&self) -> Result<Vec<String>> {
        let custom;
        let mapper = match &self.cli.config {
            Some(path) => {
                custom = DomainMapper::new(&MapperConfig::from_file(path)?);
                &custom
            }
            None => &*DEFAULT_MAPPER,
        };

        match &self.cli.command {
            Commands::Status { file, ids } => {
                let ids = split_ids(ids.as_deref());
                let envelope = read_body(file)?;
                let records = mapper.decode_status_list(&envelope, &ids)?;
                info!(count = records.len(), "Decoded media status");
                self.render(&records)
            }
            Commands::Presets { file } => {
                let records = mapper.decode_preset_list(&read_body(file)?)?;
                info!(count = records.len(), "Decoded presets");
                self.render(&records)
            }
            Commands::Preset { file } => {
                let record = mapper.decode_preset(&read_body(file)?)?;
                self.render(std::slice::from_ref(&record))
            }
            Commands::Jobs { file } => {
                let records = mapper.decode_job_list(&read_body(file)?)?;
                info!(count = records.len(), "Decoded conductor jobs");
                self.render(&records)
            }
            Commands::ConductorPresets { file } => {
                let records = mapper.decode_conductor_preset_list(&read_body(file)?)?;
                info!(count = records.len(), "Decoded conductor presets");
                self.render(&records)
            }
            Commands::ApiStatus { file } => {
                let record = mapper.decode_api_status(&read_body(file)?)?;
                info!(status_code = %record.status_code, "Decoded service status");
                self.render(std::slice::from_ref(&record))
            }
        }
    }

    /// Render records in the selected output format
    fn render<T: Serialize>(&self, records: &[T]) -> Result<Vec<String>> {
        match self.cli.format {
            OutputFormat::Json => records
                .iter()
                .map(|r| serde_json::to_string(r).map_err(Error::from))
                .collect(),
            OutputFormat::Pretty => Ok(vec![serde_json::to_string_pretty(records)?]),
        }
    }
}

/// Read and decode a captured response body
fn read_body(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let body = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = body.len(), "Read response body");
    decode_payload(&body)
}

/// Split a comma-separated id list, dropping blanks
fn split_ids(ids: Option<&str>) -> Vec<String> {
    ids.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}
