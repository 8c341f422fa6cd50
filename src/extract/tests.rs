//! Tests for extract module

use super::*;
use crate::error::Error;
use crate::types::JsonObject;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

const KNOBS: &[FieldSpec] = &[
    FieldSpec::text("coder"),
    FieldSpec::unsigned("refs").from_string(),
];

const STREAM: &[FieldSpec] = &[
    FieldSpec::text("bitrate"),
    FieldSpec::unsigned("audio_sample_rate").from_string(),
    FieldSpec::signed("crop_left").from_string(),
    FieldSpec::float("framerate").from_string(),
    FieldSpec::unsigned("strict_count"),
    FieldSpec::flag("two_pass"),
    FieldSpec::nested("video_codec_parameters", KNOBS),
];

const FORMAT: &[FieldSpec] = &[FieldSpec::text("output"), FieldSpec::records("stream", STREAM)];

fn obj(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

// ============================================================================
// FieldSpec Tests
// ============================================================================

#[test]
fn test_field_spec_from_string() {
    assert_eq!(
        FieldSpec::unsigned("n").from_string().kind,
        FieldKind::Unsigned { from_string: true }
    );
    assert_eq!(
        FieldSpec::float("f").from_string().kind,
        FieldKind::Float { from_string: true }
    );
    // Non-numeric kinds are unaffected
    assert_eq!(FieldSpec::text("t").from_string().kind, FieldKind::Text);
}

// ============================================================================
// Extraction Tests
// ============================================================================

#[test]
fn test_extract_splits_declared_and_undeclared() {
    let raw = obj(json!({
        "bitrate": "1500k",
        "audio_sample_rate": "48000",
        "mystery_knob": {"depth": 3},
        "future_flag": "yes"
    }));
    let mut extracted = extract(&raw, STREAM).unwrap();

    assert_eq!(
        extracted.residual(),
        &obj(json!({"mystery_knob": {"depth": 3}, "future_flag": "yes"}))
    );
    assert_eq!(extracted.take_text("bitrate"), "1500k");
    assert_eq!(extracted.take_unsigned("audio_sample_rate"), 48000);
}

#[test]
fn test_extract_absent_fields_take_zero_values() {
    let mut extracted = extract(&JsonObject::new(), STREAM).unwrap();
    assert_eq!(extracted.take_text("bitrate"), "");
    assert_eq!(extracted.take_unsigned("audio_sample_rate"), 0);
    assert_eq!(extracted.take_signed("crop_left"), 0);
    assert_eq!(extracted.take_float("framerate"), 0.0);
    assert!(!extracted.take_flag("two_pass"));
    assert!(extracted.take_nested("video_codec_parameters").is_none());
    assert!(extracted.residual().is_empty());
}

#[test]
fn test_extract_every_key_recoverable() {
    let raw = obj(json!({
        "bitrate": 800,
        "audio_sample_rate": null,
        "crop_left": "-4",
        "framerate": 29.97,
        "two_pass": "no",
        "video_codec_parameters": "no",
        "unknown": [1, 2, 3]
    }));
    let extracted = extract(&raw, STREAM).unwrap();
    for key in raw.keys() {
        assert!(extracted.recovers(key), "lost key {key}");
    }
    // Nested key carrying a scalar stays verbatim in the residual
    assert_eq!(extracted.residual()["video_codec_parameters"], json!("no"));
    assert_eq!(extracted.residual()["audio_sample_rate"], Value::Null);
}

#[test]
fn test_extract_numeric_coercions() {
    let raw = obj(json!({
        "bitrate": 800,
        "audio_sample_rate": 44100,
        "crop_left": "-4",
        "framerate": "29.97",
        "strict_count": 7
    }));
    let mut extracted = extract(&raw, STREAM).unwrap();
    assert_eq!(extracted.take_text("bitrate"), "800");
    assert_eq!(extracted.take_unsigned("audio_sample_rate"), 44100);
    assert_eq!(extracted.take_signed("crop_left"), -4);
    assert!((extracted.take_float("framerate") - 29.97).abs() < f64::EPSILON);
    assert_eq!(extracted.take_unsigned("strict_count"), 7);
}

#[test]
fn test_extract_strict_number_rejects_string() {
    let raw = obj(json!({"strict_count": "7"}));
    match extract(&raw, STREAM) {
        Err(Error::Format { text, layout }) => {
            assert_eq!(text, "7");
            assert!(layout.contains("strict_count"));
        }
        other => panic!("expected format error, got {other:?}"),
    }
}

#[test]
fn test_extract_bad_numeric_string_is_format_error() {
    let raw = obj(json!({"audio_sample_rate": "48kHz"}));
    assert!(matches!(
        extract(&raw, STREAM),
        Err(Error::Format { .. })
    ));

    let raw = obj(json!({"audio_sample_rate": -1}));
    assert!(matches!(
        extract(&raw, STREAM),
        Err(Error::Format { .. })
    ));
}

#[test]
fn test_extract_flag_vocabularies() {
    for (wire, expected) in [
        (json!("yes"), true),
        (json!("no"), false),
        (json!("1"), true),
        (json!("0"), false),
        (json!("TRUE"), true),
        (json!(false), false),
        (json!(1), true),
    ] {
        let raw = obj(json!({ "two_pass": wire.clone() }));
        let mut extracted = extract(&raw, STREAM).unwrap();
        assert_eq!(extracted.take_flag("two_pass"), expected, "wire {wire}");
    }

    let raw = obj(json!({"two_pass": "maybe"}));
    assert!(matches!(
        extract(&raw, STREAM),
        Err(Error::Format { .. })
    ));
}

#[test]
fn test_extract_text_rejects_object() {
    let raw = obj(json!({"bitrate": {"value": 1}}));
    assert!(matches!(
        extract(&raw, STREAM),
        Err(Error::Format { .. })
    ));
}

#[test]
fn test_extract_nested_is_recursive() {
    let raw = obj(json!({
        "video_codec_parameters": {
            "coder": "1",
            "refs": "3",
            "me_method": "umh"
        }
    }));
    let mut extracted = extract(&raw, STREAM).unwrap();
    let mut knobs = extracted.take_nested("video_codec_parameters").unwrap();
    assert_eq!(knobs.take_text("coder"), "1");
    assert_eq!(knobs.take_unsigned("refs"), 3);
    assert_eq!(knobs.residual(), &obj(json!({"me_method": "umh"})));
}

#[test]
fn test_extract_nested_coercion_failure_propagates() {
    let raw = obj(json!({"video_codec_parameters": {"refs": "many"}}));
    assert!(matches!(
        extract(&raw, STREAM),
        Err(Error::Format { .. })
    ));
}

// ============================================================================
// Record List Tests
// ============================================================================

#[test]
fn test_extract_records_single_map() {
    let raw = obj(json!({
        "output": "advanced_hls",
        "stream": {"bitrate": "600k", "extra": 1}
    }));
    let mut extracted = extract(&raw, FORMAT).unwrap();
    let mut streams = extracted.take_records("stream");
    assert_eq!(streams.len(), 1);
    assert_eq!(streams[0].take_text("bitrate"), "600k");
    assert_eq!(streams[0].residual(), &obj(json!({"extra": 1})));
}

#[test]
fn test_extract_records_array_each_with_own_residual() {
    let raw = obj(json!({
        "stream": [
            {"bitrate": "600k", "a": 1},
            null,
            {"bitrate": "1200k", "b": 2}
        ]
    }));
    let mut extracted = extract(&raw, FORMAT).unwrap();
    let mut streams = extracted.take_records("stream");
    assert_eq!(streams.len(), 2);
    assert_eq!(streams[0].take_text("bitrate"), "600k");
    assert_eq!(streams[0].residual(), &obj(json!({"a": 1})));
    assert_eq!(streams[1].take_text("bitrate"), "1200k");
    assert_eq!(streams[1].residual(), &obj(json!({"b": 2})));
}

#[test]
fn test_extract_records_scalar_is_shape_error() {
    let raw = obj(json!({"stream": "600k"}));
    assert!(matches!(
        extract(&raw, FORMAT),
        Err(Error::Shape { .. })
    ));

    let raw = obj(json!({"stream": [{"bitrate": "1"}, 5]}));
    match extract(&raw, FORMAT) {
        Err(Error::Shape { path, found }) => {
            assert_eq!(path, "stream[1]");
            assert_eq!(found, "number");
        }
        other => panic!("expected shape error, got {other:?}"),
    }
}
