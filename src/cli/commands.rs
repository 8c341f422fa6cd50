//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Decode transcoding service responses into typed records
#[derive(Parser, Debug)]
#[command(name = "transcode-wire")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Mapper configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a media status response
    Status {
        /// Response body (JSON or XML)
        file: PathBuf,

        /// Media ids the request asked for (comma-separated)
        #[arg(long)]
        ids: Option<String>,
    },

    /// Decode a preset list response
    Presets {
        /// Response body (JSON or XML)
        file: PathBuf,
    },

    /// Decode a single preset response
    Preset {
        /// Response body (JSON or XML)
        file: PathBuf,
    },

    /// Decode a conductor job list
    Jobs {
        /// Response body (XML)
        file: PathBuf,
    },

    /// Decode a conductor preset list
    ConductorPresets {
        /// Response body (XML)
        file: PathBuf,
    },

    /// Decode a service status document
    ApiStatus {
        /// Response body (JSON)
        file: PathBuf,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON (one record per line)
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_with_ids() {
        let cli = Cli::parse_from(["transcode-wire", "status", "body.json", "--ids", "a,b"]);
        match cli.command {
            Commands::Status { file, ids } => {
                assert_eq!(file, PathBuf::from("body.json"));
                assert_eq!(ids.as_deref(), Some("a,b"));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "transcode-wire",
            "jobs",
            "jobs.xml",
            "--format",
            "pretty",
            "-C",
            "mapper.yaml",
            "-v",
        ]);
        assert!(matches!(cli.command, Commands::Jobs { .. }));
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert_eq!(cli.config, Some(PathBuf::from("mapper.yaml")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_kebab_case_subcommands() {
        let cli = Cli::parse_from(["transcode-wire", "conductor-presets", "presets.xml"]);
        assert!(matches!(cli.command, Commands::ConductorPresets { .. }));

        let cli = Cli::parse_from(["transcode-wire", "api-status", "status.json"]);
        match cli.command {
            Commands::ApiStatus { file } => assert_eq!(file, PathBuf::from("status.json")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_rejected() {
        assert!(Cli::try_parse_from(["transcode-wire", "presets"]).is_err());
    }
}
