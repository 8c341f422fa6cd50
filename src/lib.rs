// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]

//! # transcode-wire
//!
//! Response decoding for media transcoding service bindings.
//!
//! Transcoding APIs are loose about the shape of what they send: a list with
//! one element arrives as a bare object, parallel arrays drift out of step,
//! "no timestamp" is written as a zero date, and preset maps grow keys that
//! no client knows about. This crate turns those payloads into typed records
//! without losing anything the service sent.
//!
//! ## Features
//!
//! - **Shape normalization**: absent, single and list nodes all become lists
//! - **Parallel array alignment**: pairs destinations with their statuses
//! - **Timestamp families**: per-family layouts and zero-date sentinels
//! - **Free-form extraction**: typed fields plus a residual map of the rest
//! - **JSON and XML payloads**: one tree model for both wire formats
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use transcode_wire::{decode_payload, DomainMapper, Result};
//!
//! fn main() -> Result<()> {
//!     let body = std::fs::read_to_string("status.json")?;
//!     let envelope = decode_payload(&body)?;
//!
//!     let mapper = DomainMapper::default();
//!     for status in mapper.decode_status_list(&envelope, &["abc123"])? {
//!         println!("{} {}", status.media_id, status.status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         DomainMapper                            │
//! │  decode_status_list  decode_preset_list  decode_job_list        │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │  Decode  │   Shape   │   Temporal    │  Extract  │   Config    │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ JSON     │ OneOrMany │ Status        │ FieldSpec │ YAML        │
//! │ XML      │ Align     │ Conductor     │ Residual  │ overrides   │
//! │          │           │ Job error     │           │             │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Sentinel-aware timestamp decoding
pub mod temporal;

/// Singular/plural normalization and parallel array alignment
pub mod shape;

/// Typed extraction from free-form maps
pub mod extract;

/// Payload decoders (JSON, XML)
pub mod decode;

/// Mapper configuration
pub mod config;

/// Envelope to record mapping
pub mod mapper;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::MapperConfig;
pub use decode::decode_payload;
pub use mapper::{DomainMapper, JobRecord, PresetRecord, StatusRecord};
pub use temporal::{TemporalDecoder, TimeFamily, Timestamp};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
