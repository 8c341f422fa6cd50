//! CLI module
//!
//! Command-line interface for decoding captured response bodies.
//!
//! # Commands
//!
//! - `status` - Decode a media status response
//! - `presets` - Decode a preset list response
//! - `preset` - Decode a single preset response
//! - `jobs` - Decode a conductor job list (XML)
//! - `conductor-presets` - Decode a conductor preset list (XML)
//! - `api-status` - Decode a service status document

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
