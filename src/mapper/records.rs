//! Decoded record types
//!
//! Every record is built once per decode call and never mutated afterwards.

use crate::temporal::Timestamp;
use crate::types::{JsonObject, PresetType};
use serde::Serialize;

// ============================================================================
// Media Status
// ============================================================================

/// Status of one media item
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StatusRecord {
    pub media_id: String,
    pub user_id: String,
    pub source_file: String,
    pub status: String,
    pub previous_status: String,
    pub notify_url: String,
    #[serde(skip_serializing_if = "Timestamp::is_absent")]
    pub created: Timestamp,
    #[serde(skip_serializing_if = "Timestamp::is_absent")]
    pub started: Timestamp,
    #[serde(skip_serializing_if = "Timestamp::is_absent")]
    pub finished: Timestamp,
    #[serde(skip_serializing_if = "Timestamp::is_absent")]
    pub downloaded: Timestamp,
    #[serde(skip_serializing_if = "Timestamp::is_absent")]
    pub uploaded: Timestamp,
    /// Overall progress, 0 to 100
    pub progress: f64,
    /// Free-text estimate of the remaining time
    pub time_left: String,
    /// Progress of the task currently running
    pub progress_current: f64,
    pub time_left_current: String,
    pub formats: Vec<FormatRecord>,
}

/// Status of one output format of a media item
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormatRecord {
    pub id: String,
    pub status: String,
    pub description: String,
    #[serde(skip_serializing_if = "Timestamp::is_absent")]
    pub created: Timestamp,
    #[serde(skip_serializing_if = "Timestamp::is_absent")]
    pub started: Timestamp,
    #[serde(skip_serializing_if = "Timestamp::is_absent")]
    pub finished: Timestamp,
    pub s3_destination: String,
    pub cf_destination: String,
    /// Converted file size as reported
    pub file_size: String,
    pub destinations: Vec<DestinationRecord>,
}

/// One destination of a format and its upload status
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DestinationRecord {
    pub name: String,
    pub status: String,
}

impl DestinationRecord {
    /// Create a destination record
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
        }
    }
}

// ============================================================================
// Presets
// ============================================================================

/// A stored encoding preset
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PresetRecord {
    pub name: String,
    pub preset_type: PresetType,
    /// Output container
    pub output: String,
    pub format: PresetFormat,
}

/// Output settings of a preset
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PresetFormat {
    pub output: String,
    pub noise_reduction: String,
    pub video_codec: String,
    pub audio_codec: String,
    pub bitrate: String,
    pub audio_bitrate: String,
    pub audio_sample_rate: u64,
    pub audio_channels_number: String,
    pub audio_volume: u64,
    pub framerate: String,
    pub framerate_upper_threshold: String,
    pub size: String,
    pub fade_in: String,
    pub fade_out: String,
    pub crop_left: i64,
    pub crop_top: i64,
    pub crop_right: i64,
    pub crop_bottom: i64,
    pub keep_aspect_ratio: bool,
    pub set_aspect_ratio: String,
    pub add_meta: bool,
    pub hint: bool,
    pub rc_init_occupancy: String,
    pub min_rate: String,
    pub max_rate: String,
    pub buf_size: String,
    pub keyframe: String,
    pub start: String,
    pub duration: String,
    pub force_keyframes: String,
    pub bframes: i64,
    pub gop: String,
    pub segment_duration: u64,
    pub profile: String,
    pub two_pass: bool,
    pub turbo: bool,
    pub twin_turbo: bool,
    pub rotate: String,
    pub set_rotate: String,
    pub audio_sync: String,
    pub video_sync: String,
    pub force_interlaced: String,
    pub strip_chapters: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_parameters: Option<CodecParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MediaMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub streams: Vec<StreamRecord>,
    /// Keys this version does not map, with their wire values
    #[serde(skip_serializing_if = "JsonObject::is_empty")]
    pub residual: JsonObject,
}

/// One rendition stream of a multi-stream preset
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StreamRecord {
    pub video_codec: String,
    pub audio_codec: String,
    pub bitrate: String,
    pub audio_bitrate: String,
    pub audio_sample_rate: u64,
    pub audio_channels_number: u64,
    pub audio_volume: u64,
    pub size: String,
    pub framerate: String,
    pub keyframe: String,
    pub profile: String,
    pub level: String,
    pub rotate: String,
    pub set_aspect_ratio: String,
    pub keep_aspect_ratio: bool,
    pub two_pass: bool,
    pub sub_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_parameters: Option<CodecParameters>,
    #[serde(skip_serializing_if = "JsonObject::is_empty")]
    pub residual: JsonObject,
}

/// Encoder tuning knobs of a format or stream
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CodecParameters {
    pub coder: String,
    pub flags: String,
    pub flags2: String,
    pub cmp: String,
    pub partitions: String,
    pub me_method: String,
    pub subq: u64,
    pub me_range: u64,
    pub keyint_min: u64,
    pub sc_threshold: u64,
    pub i_qfactor: f64,
    pub bf: u64,
    pub refs: u64,
    pub directpred: String,
    pub trellis: u64,
    pub level: String,
    #[serde(skip_serializing_if = "JsonObject::is_empty")]
    pub residual: JsonObject,
}

/// Tags written into the output container
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MediaMetadata {
    pub title: String,
    pub copyright: String,
    pub author: String,
    pub description: String,
    pub album: String,
    #[serde(skip_serializing_if = "JsonObject::is_empty")]
    pub residual: JsonObject,
}

/// Watermark image settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Logo {
    /// URL of the watermark image
    pub logo_source: String,
    pub logo_x: i64,
    pub logo_y: i64,
    pub logo_mode: i64,
    pub logo_threshold: String,
    #[serde(skip_serializing_if = "JsonObject::is_empty")]
    pub residual: JsonObject,
}

// ============================================================================
// Service Status
// ============================================================================

/// Health of the encoding service itself
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ApiStatusRecord {
    /// Human readable status line
    pub status: String,
    /// Machine readable status, e.g. `ok` or `queue_slow`
    pub status_code: String,
    pub incident: String,
}

// ============================================================================
// Conductor Jobs and Presets
// ============================================================================

/// A job reported by a conductor node
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct JobRecord {
    /// Last path segment of `href`
    pub id: String,
    pub href: String,
    pub status: String,
    pub priority: i64,
    pub percent_complete: i64,
    #[serde(skip_serializing_if = "Timestamp::is_absent")]
    pub submitted: Timestamp,
    #[serde(skip_serializing_if = "Timestamp::is_absent")]
    pub started: Timestamp,
    #[serde(skip_serializing_if = "Timestamp::is_absent")]
    pub completed: Timestamp,
    #[serde(skip_serializing_if = "Timestamp::is_absent")]
    pub errored: Timestamp,
    pub errors: Vec<JobErrorRecord>,
    pub input: JobInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_duration: Option<ContentDuration>,
    pub output_groups: Vec<OutputGroup>,
    pub stream_assemblies: Vec<StreamAssembly>,
}

/// A file location, with credentials for protocols that need them
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Location {
    pub uri: String,
    pub username: String,
    pub password: String,
}

/// Source media of a job
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct JobInput {
    pub file_input: Location,
    /// Source video track details, once the node has inspected it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_info: Option<VideoInputInfo>,
}

/// Video track details reported for a job input
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct VideoInputInfo {
    pub format: String,
    pub format_info: String,
    pub format_profile: String,
    pub codec_id: String,
    pub codec_id_info: String,
    pub bitrate: String,
    pub width: String,
    pub height: String,
}

/// Durations measured on the job input, in seconds
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ContentDuration {
    pub input_duration: i64,
}

/// One group of outputs sharing a destination
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OutputGroup {
    pub order: i64,
    /// `file_group_settings` or `apple_live_group_settings`
    pub group_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_destination: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apple_live: Option<AppleLiveGroupSettings>,
    pub outputs: Vec<JobOutput>,
}

/// HLS packaging settings of an output group
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AppleLiveGroupSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Location>,
    pub segment_length: u64,
}

/// One rendition written by an output group
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct JobOutput {
    pub full_uri: String,
    pub stream_assembly_name: String,
    pub name_modifier: String,
    pub order: i64,
    pub extension: String,
    pub container: String,
}

/// A named processing chain referenced by outputs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StreamAssembly {
    pub id: String,
    pub name: String,
    pub preset: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_description: Option<VideoDescription>,
}

/// Video encoding settings of a stream assembly
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct VideoDescription {
    pub codec: String,
    pub encoder_type: String,
    pub width: String,
    pub height: String,
}

/// A preset stored on a conductor node
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ConductorPresetRecord {
    pub name: String,
    pub href: String,
    pub permalink: String,
    pub description: String,
}

/// An error entry attached to a conductor job
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct JobErrorRecord {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Timestamp::is_absent")]
    pub created_at: Timestamp,
}
