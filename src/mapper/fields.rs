//! Declared fields of the free-form preset maps

use super::records::{CodecParameters, Logo, MediaMetadata, PresetFormat, StreamRecord};
use crate::error::Result;
use crate::extract::{extract, Extracted, FieldSpec};
use crate::types::JsonObject;

/// Encoder tuning block (`video_codec_parameters`)
pub const CODEC_PARAMETER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("coder"),
    FieldSpec::text("flags"),
    FieldSpec::text("flags2"),
    FieldSpec::text("cmp"),
    FieldSpec::text("partitions"),
    FieldSpec::text("me_method"),
    FieldSpec::unsigned("subq").from_string(),
    FieldSpec::unsigned("me_range").from_string(),
    FieldSpec::unsigned("keyint_min").from_string(),
    FieldSpec::unsigned("sc_threshold").from_string(),
    FieldSpec::float("i_qfactor").from_string(),
    FieldSpec::unsigned("bf").from_string(),
    FieldSpec::unsigned("refs").from_string(),
    FieldSpec::text("directpred"),
    FieldSpec::unsigned("trellis").from_string(),
    FieldSpec::text("level"),
];

/// Container tags (`metadata`)
pub const METADATA_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("title"),
    FieldSpec::text("copyright"),
    FieldSpec::text("author"),
    FieldSpec::text("description"),
    FieldSpec::text("album"),
];

/// Watermark settings (`logo`); positions arrive as numeric strings
pub const LOGO_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("logo_source"),
    FieldSpec::signed("logo_x").from_string(),
    FieldSpec::signed("logo_y").from_string(),
    FieldSpec::signed("logo_mode").from_string(),
    FieldSpec::text("logo_threshold"),
];

/// One entry of a preset's `stream` list
pub const STREAM_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("video_codec"),
    FieldSpec::text("audio_codec"),
    FieldSpec::text("bitrate"),
    FieldSpec::text("audio_bitrate"),
    FieldSpec::unsigned("audio_sample_rate").from_string(),
    FieldSpec::unsigned("audio_channels_number").from_string(),
    FieldSpec::unsigned("audio_volume").from_string(),
    FieldSpec::text("size"),
    FieldSpec::text("framerate"),
    FieldSpec::text("keyframe"),
    FieldSpec::text("profile"),
    FieldSpec::text("level"),
    FieldSpec::text("rotate"),
    FieldSpec::text("set_aspect_ratio"),
    FieldSpec::flag("keep_aspect_ratio"),
    FieldSpec::flag("two_pass"),
    FieldSpec::text("sub_path"),
    FieldSpec::nested("video_codec_parameters", CODEC_PARAMETER_FIELDS),
];

/// A preset's `format` map
pub const PRESET_FORMAT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("output"),
    FieldSpec::text("noise_reduction"),
    FieldSpec::text("video_codec"),
    FieldSpec::text("audio_codec"),
    FieldSpec::text("bitrate"),
    FieldSpec::text("audio_bitrate"),
    FieldSpec::unsigned("audio_sample_rate").from_string(),
    FieldSpec::text("audio_channels_number"),
    FieldSpec::unsigned("audio_volume").from_string(),
    FieldSpec::text("framerate"),
    FieldSpec::text("framerate_upper_threshold"),
    FieldSpec::text("size"),
    FieldSpec::text("fade_in"),
    FieldSpec::text("fade_out"),
    FieldSpec::signed("crop_left").from_string(),
    FieldSpec::signed("crop_top").from_string(),
    FieldSpec::signed("crop_right").from_string(),
    FieldSpec::signed("crop_bottom").from_string(),
    FieldSpec::flag("keep_aspect_ratio"),
    FieldSpec::text("set_aspect_ratio"),
    FieldSpec::flag("add_meta"),
    FieldSpec::flag("hint"),
    FieldSpec::text("rc_init_occupancy"),
    FieldSpec::text("minrate"),
    FieldSpec::text("maxrate"),
    FieldSpec::text("bufsize"),
    FieldSpec::text("keyframe"),
    FieldSpec::text("start"),
    FieldSpec::text("duration"),
    FieldSpec::text("force_keyframes"),
    FieldSpec::signed("bframes").from_string(),
    FieldSpec::text("gop"),
    FieldSpec::unsigned("segment_duration").from_string(),
    FieldSpec::text("profile"),
    FieldSpec::flag("two_pass"),
    FieldSpec::flag("turbo"),
    FieldSpec::flag("twin_turbo"),
    FieldSpec::text("rotate"),
    FieldSpec::text("set_rotate"),
    FieldSpec::text("audio_sync"),
    FieldSpec::text("video_sync"),
    FieldSpec::text("force_interlaced"),
    FieldSpec::flag("strip_chapters"),
    FieldSpec::nested("video_codec_parameters", CODEC_PARAMETER_FIELDS),
    FieldSpec::nested("metadata", METADATA_FIELDS),
    FieldSpec::nested("logo", LOGO_FIELDS),
    FieldSpec::records("stream", STREAM_FIELDS),
];

impl CodecParameters {
    /// Build from a raw `video_codec_parameters` map
    pub fn from_raw(raw: &JsonObject) -> Result<Self> {
        extract(raw, CODEC_PARAMETER_FIELDS).map(Self::from_extracted)
    }

    fn from_extracted(mut f: Extracted) -> Self {
        Self {
            coder: f.take_text("coder"),
            flags: f.take_text("flags"),
            flags2: f.take_text("flags2"),
            cmp: f.take_text("cmp"),
            partitions: f.take_text("partitions"),
            me_method: f.take_text("me_method"),
            subq: f.take_unsigned("subq"),
            me_range: f.take_unsigned("me_range"),
            keyint_min: f.take_unsigned("keyint_min"),
            sc_threshold: f.take_unsigned("sc_threshold"),
            i_qfactor: f.take_float("i_qfactor"),
            bf: f.take_unsigned("bf"),
            refs: f.take_unsigned("refs"),
            directpred: f.take_text("directpred"),
            trellis: f.take_unsigned("trellis"),
            level: f.take_text("level"),
            residual: f.into_residual(),
        }
    }
}

impl MediaMetadata {
    fn from_extracted(mut f: Extracted) -> Self {
        Self {
            title: f.take_text("title"),
            copyright: f.take_text("copyright"),
            author: f.take_text("author"),
            description: f.take_text("description"),
            album: f.take_text("album"),
            residual: f.into_residual(),
        }
    }
}

impl Logo {
    fn from_extracted(mut f: Extracted) -> Self {
        Self {
            logo_source: f.take_text("logo_source"),
            logo_x: f.take_signed("logo_x"),
            logo_y: f.take_signed("logo_y"),
            logo_mode: f.take_signed("logo_mode"),
            logo_threshold: f.take_text("logo_threshold"),
            residual: f.into_residual(),
        }
    }
}

impl StreamRecord {
    /// Build from one raw stream map
    pub fn from_raw(raw: &JsonObject) -> Result<Self> {
        extract(raw, STREAM_FIELDS).map(Self::from_extracted)
    }

    fn from_extracted(mut f: Extracted) -> Self {
        Self {
            video_codec: f.take_text("video_codec"),
            audio_codec: f.take_text("audio_codec"),
            bitrate: f.take_text("bitrate"),
            audio_bitrate: f.take_text("audio_bitrate"),
            audio_sample_rate: f.take_unsigned("audio_sample_rate"),
            audio_channels_number: f.take_unsigned("audio_channels_number"),
            audio_volume: f.take_unsigned("audio_volume"),
            size: f.take_text("size"),
            framerate: f.take_text("framerate"),
            keyframe: f.take_text("keyframe"),
            profile: f.take_text("profile"),
            level: f.take_text("level"),
            rotate: f.take_text("rotate"),
            set_aspect_ratio: f.take_text("set_aspect_ratio"),
            keep_aspect_ratio: f.take_flag("keep_aspect_ratio"),
            two_pass: f.take_flag("two_pass"),
            sub_path: f.take_text("sub_path"),
            codec_parameters: f
                .take_nested("video_codec_parameters")
                .map(CodecParameters::from_extracted),
            residual: f.into_residual(),
        }
    }
}

impl PresetFormat {
    /// Build from a raw preset `format` map
    pub fn from_raw(raw: &JsonObject) -> Result<Self> {
        extract(raw, PRESET_FORMAT_FIELDS).map(Self::from_extracted)
    }

    fn from_extracted(mut f: Extracted) -> Self {
        Self {
            output: f.take_text("output"),
            noise_reduction: f.take_text("noise_reduction"),
            video_codec: f.take_text("video_codec"),
            audio_codec: f.take_text("audio_codec"),
            bitrate: f.take_text("bitrate"),
            audio_bitrate: f.take_text("audio_bitrate"),
            audio_sample_rate: f.take_unsigned("audio_sample_rate"),
            audio_channels_number: f.take_text("audio_channels_number"),
            audio_volume: f.take_unsigned("audio_volume"),
            framerate: f.take_text("framerate"),
            framerate_upper_threshold: f.take_text("framerate_upper_threshold"),
            size: f.take_text("size"),
            fade_in: f.take_text("fade_in"),
            fade_out: f.take_text("fade_out"),
            crop_left: f.take_signed("crop_left"),
            crop_top: f.take_signed("crop_top"),
            crop_right: f.take_signed("crop_right"),
            crop_bottom: f.take_signed("crop_bottom"),
            keep_aspect_ratio: f.take_flag("keep_aspect_ratio"),
            set_aspect_ratio: f.take_text("set_aspect_ratio"),
            add_meta: f.take_flag("add_meta"),
            hint: f.take_flag("hint"),
            rc_init_occupancy: f.take_text("rc_init_occupancy"),
            min_rate: f.take_text("minrate"),
            max_rate: f.take_text("maxrate"),
            buf_size: f.take_text("bufsize"),
            keyframe: f.take_text("keyframe"),
            start: f.take_text("start"),
            duration: f.take_text("duration"),
            force_keyframes: f.take_text("force_keyframes"),
            bframes: f.take_signed("bframes"),
            gop: f.take_text("gop"),
            segment_duration: f.take_unsigned("segment_duration"),
            profile: f.take_text("profile"),
            two_pass: f.take_flag("two_pass"),
            turbo: f.take_flag("turbo"),
            twin_turbo: f.take_flag("twin_turbo"),
            rotate: f.take_text("rotate"),
            set_rotate: f.take_text("set_rotate"),
            audio_sync: f.take_text("audio_sync"),
            video_sync: f.take_text("video_sync"),
            force_interlaced: f.take_text("force_interlaced"),
            strip_chapters: f.take_flag("strip_chapters"),
            codec_parameters: f
                .take_nested("video_codec_parameters")
                .map(CodecParameters::from_extracted),
            metadata: f.take_nested("metadata").map(MediaMetadata::from_extracted),
            logo: f.take_nested("logo").map(Logo::from_extracted),
            streams: f
                .take_records("stream")
                .into_iter()
                .map(StreamRecord::from_extracted)
                .collect(),
            residual: f.into_residual(),
        }
    }
}
