//! Record mapper module
//!
//! Supports: media status lists, preset lists, API status, conductor job
//! and preset lists
//!
//! # Overview
//!
//! The mapper is the only part of the crate that knows wire field names. It
//! locates the payload inside its envelope, surfaces upstream error
//! envelopes, and composes the shape normalizer, the parallel array aligner,
//! the timestamp decoders and the free-form extractor into records.
//!
//! ```rust,ignore
//! use transcode_wire::mapper::DomainMapper;
//!
//! let mapper = DomainMapper::default();
//! let envelope = transcode_wire::decode::decode_payload(&body)?;
//! let statuses = mapper.decode_status_list(&envelope, &["abc123"])?;
//! ```

mod conductor_preset;
mod fields;
mod job;
mod preset;
mod records;
mod service;
mod status;
mod wire;

pub use fields::{
    CODEC_PARAMETER_FIELDS, LOGO_FIELDS, METADATA_FIELDS, PRESET_FORMAT_FIELDS, STREAM_FIELDS,
};
pub use records::{
    ApiStatusRecord, AppleLiveGroupSettings, CodecParameters, ConductorPresetRecord,
    ContentDuration, DestinationRecord, FormatRecord, JobErrorRecord, JobInput, JobOutput,
    JobRecord, Location, Logo, MediaMetadata, OutputGroup, PresetFormat, PresetRecord,
    StatusRecord, StreamAssembly, StreamRecord, VideoDescription, VideoInputInfo,
};

use crate::config::MapperConfig;
use crate::error::{kind_name, Error, Result};
use crate::extract::{coerce_float, coerce_signed, coerce_text, coerce_unsigned};
use crate::shape::normalize;
use crate::temporal::{TemporalDecoder, Timestamp};
use crate::types::JsonObject;
use serde_json::Value;

/// Builds typed records from decoded wire envelopes
///
/// Holds one timestamp decoder per record family. All state is read-only
/// after construction, so a mapper can be shared between threads.
#[derive(Debug, Clone)]
pub struct DomainMapper {
    status_time: TemporalDecoder,
    conductor_time: TemporalDecoder,
    job_error_time: TemporalDecoder,
}

impl Default for DomainMapper {
    fn default() -> Self {
        Self::new(&MapperConfig::default())
    }
}

impl DomainMapper {
    /// Create a mapper from configuration
    pub fn new(config: &MapperConfig) -> Self {
        Self {
            status_time: TemporalDecoder::new(config.status.clone()),
            conductor_time: TemporalDecoder::new(config.conductor.clone()),
            job_error_time: TemporalDecoder::new(config.job_error.clone()),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Read-only view of one wire object
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    obj: &'a JsonObject,
}

impl<'a> Fields<'a> {
    fn new(obj: &'a JsonObject) -> Self {
        Self { obj }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.obj.get(key)
    }

    /// String field, empty when absent or null
    fn text(&self, key: &str) -> Result<String> {
        self.get(key)
            .map_or_else(|| Ok(String::new()), |v| coerce_text(key, v))
    }

    /// Number that may arrive as a string, zero when absent or null
    fn float(&self, key: &str) -> Result<f64> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(0.0),
            Some(v) => coerce_float(key, v, true),
        }
    }

    /// Integer that may arrive as a string, zero when absent or null
    fn signed(&self, key: &str) -> Result<i64> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(0),
            Some(v) => coerce_signed(key, v, true),
        }
    }

    /// Unsigned integer that may arrive as a string, zero when absent or null
    fn unsigned(&self, key: &str) -> Result<u64> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(0),
            Some(v) => coerce_unsigned(key, v, true),
        }
    }

    /// Nested object, `None` when absent or null
    fn object(&self, key: &str, path: &str) -> Result<Option<Fields<'a>>> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(obj)) => Ok(Some(Fields::new(obj))),
            Some(other) => Err(Error::shape(path, kind_name(other))),
        }
    }

    /// Timestamp field decoded with the given family, absent when missing
    fn time(&self, key: &str, decoder: &TemporalDecoder) -> Result<Timestamp> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(Timestamp::Absent),
            Some(Value::String(text)) => decoder.decode(text),
            Some(other) => Err(Error::format(other.to_string(), &decoder.family().layout)),
        }
    }
}

/// Normalize an object-or-array node into object views, skipping nulls
fn objects<'a>(node: Option<&'a Value>, path: &str) -> Result<Vec<Fields<'a>>> {
    let mut out = Vec::new();
    for (i, item) in normalize(node, path)?.into_iter().enumerate() {
        match item {
            Value::Null => {}
            Value::Object(obj) => out.push(Fields::new(obj)),
            other => return Err(Error::shape(format!("{path}[{i}]"), kind_name(other))),
        }
    }
    Ok(out)
}

/// Text of a scalar cell; null and structured values have none
fn cell(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
