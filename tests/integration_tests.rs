//! Integration tests over raw response bodies
//!
//! Tests the full end-to-end flow: body text → payload tree → typed records

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use transcode_wire::mapper::{DestinationRecord, PresetFormat};
use transcode_wire::{decode_payload, DomainMapper, Error, MapperConfig, PresetType, Timestamp};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
    Timestamp::from(Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
}

// ============================================================================
// Media Status
// ============================================================================

#[test]
fn test_status_destination_pairs_with_status() {
    let body = r#"{
        "response": {
            "job": {
                "id": "abc123",
                "created": "2015-12-31 20:45:30",
                "format": {
                    "id": "f1",
                    "created": "2015-12-31 20:45:30",
                    "destination": ["s3://mynicebucket"],
                    "destination_status": ["Saved"]
                }
            }
        }
    }"#;

    let envelope = decode_payload(body).unwrap();
    let records = DomainMapper::default()
        .decode_status_list(&envelope, &["abc123"])
        .unwrap();

    let format = &records[0].formats[0];
    assert_eq!(
        format.destinations,
        vec![DestinationRecord::new("s3://mynicebucket", "Saved")]
    );
    assert_eq!(format.created, utc(2015, 12, 31, 20, 45, 30));
}

#[test]
fn test_status_missing_destination_status() {
    let body = r#"{
        "response": {
            "job": {
                "id": "abc123",
                "format": {
                    "id": "f1",
                    "destination": ["s3://a/first.mp4", "s3://b/second.mp4"]
                }
            }
        }
    }"#;

    let envelope = decode_payload(body).unwrap();
    let records = DomainMapper::default()
        .decode_status_list(&envelope, &["abc123"])
        .unwrap();

    let destinations = &records[0].formats[0].destinations;
    assert_eq!(destinations.len(), 2);
    assert!(destinations.iter().all(|d| d.status.is_empty()));
    assert_eq!(destinations[1].name, "s3://b/second.mp4");
}

#[test]
fn test_status_zero_finish_date() {
    let body = r#"{
        "response": {
            "job": {
                "id": "abc123",
                "format": {
                    "id": "f1",
                    "started": "2016-01-29 19:32:32",
                    "finished": "0000-00-00 00:00:00"
                }
            }
        }
    }"#;

    let envelope = decode_payload(body).unwrap();
    let records = DomainMapper::default()
        .decode_status_list(&envelope, &["abc123"])
        .unwrap();

    let format = &records[0].formats[0];
    assert!(format.finished.is_absent());
    assert!(!format.started.is_absent());
    assert_eq!(format.started, utc(2016, 1, 29, 19, 32, 32));
}

#[test]
fn test_status_error_envelope() {
    let body = r#"{"response": {"message": "", "errors": {"error": "wait what?"}}}"#;
    let envelope = decode_payload(body).unwrap();
    let err = DomainMapper::default()
        .decode_status_list(&envelope, &["abc123"])
        .unwrap_err();

    match err {
        Error::RemoteApi { errors, .. } => assert_eq!(errors, vec!["wait what?".to_string()]),
        other => panic!("expected RemoteApi, got {other:?}"),
    }
}

#[test]
fn test_status_from_xml_body() {
    let body = r#"<?xml version="1.0"?>
<response>
  <job>
    <id>abc123</id>
    <status>Finished</status>
    <created>2015-12-31 20:45:30</created>
    <finished>0000-00-00 00:00:00</finished>
    <format>
      <id>f1</id>
      <destination>s3://mynicebucket</destination>
      <destination_status>Saved</destination_status>
    </format>
  </job>
</response>"#;

    let envelope = decode_payload(body).unwrap();
    let records = DomainMapper::default()
        .decode_status_list(&envelope, &["abc123"])
        .unwrap();

    assert_eq!(records[0].status, "Finished");
    assert_eq!(records[0].created, utc(2015, 12, 31, 20, 45, 30));
    assert!(records[0].finished.is_absent());
    assert_eq!(
        records[0].formats[0].destinations,
        vec![DestinationRecord::new("s3://mynicebucket", "Saved")]
    );
}

// ============================================================================
// Presets
// ============================================================================

#[test]
fn test_preset_stream_single_and_list() {
    let single = r#"{
        "response": {
            "name": "hls",
            "type": "user",
            "format": {
                "output": "advanced_hls",
                "stream": {"size": "640x360", "bitrate": "600k", "custom": "x"}
            }
        }
    }"#;
    let list = r#"{
        "response": {
            "name": "hls",
            "type": "user",
            "format": {
                "output": "advanced_hls",
                "stream": [
                    {"size": "640x360", "audio_sample_rate": "44100", "a_knob": 1},
                    {"size": "1280x720", "two_pass": "yes", "b_knob": 2}
                ]
            }
        }
    }"#;

    let mapper = DomainMapper::default();

    let one = mapper.decode_preset(&decode_payload(single).unwrap()).unwrap();
    assert_eq!(one.format.streams.len(), 1);
    assert_eq!(one.format.streams[0].size, "640x360");
    assert_eq!(one.format.streams[0].residual.len(), 1);

    let two = mapper.decode_preset(&decode_payload(list).unwrap()).unwrap();
    let streams = &two.format.streams;
    assert_eq!(streams.len(), 2);
    assert_eq!(streams[0].audio_sample_rate, 44100);
    assert!(streams[1].two_pass);
    assert!(streams[0].residual.contains_key("a_knob"));
    assert!(!streams[0].residual.contains_key("b_knob"));
    assert!(streams[1].residual.contains_key("b_knob"));
}

#[test]
fn test_preset_list_body() {
    let body = r#"{
        "response": {
            "user": {
                "name": "mine",
                "type": "user",
                "output": "mp4",
                "format": {"audio_sample_rate": "48000", "keep_aspect_ratio": "no"}
            },
            "ui": [
                {"name": "iphone", "type": "ui", "output": "mp4"},
                {"name": "webm", "type": "ui", "output": "webm"}
            ]
        }
    }"#;

    let presets = DomainMapper::default()
        .decode_preset_list(&decode_payload(body).unwrap())
        .unwrap();

    let names: Vec<_> = presets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["mine", "iphone", "webm"]);
    assert_eq!(presets[0].format.audio_sample_rate, 48000);
    assert!(!presets[0].format.keep_aspect_ratio);
    assert_eq!(presets[2].preset_type, PresetType::Ui);
    assert_eq!(presets[2].format, PresetFormat::default());
}

// ============================================================================
// Conductor Jobs
// ============================================================================

#[test]
fn test_conductor_job_list_body() {
    let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<job_list>
  <job href="/jobs/12">
    <status>error</status>
    <priority>50</priority>
    <submitted>2016-03-01 10:15:00 -0300</submitted>
    <errored_time>2016-03-01 10:16:00 -0300</errored_time>
    <error_messages>
      <error><code>1040</code><message>Bad &amp; broken</message><created_at>2016-03-01T10:16:00-03:00</created_at></error>
      <error><code>1041</code><message><![CDATA[<missing>]]></message><created_at>0001-01-01T00:00:00Z</created_at></error>
    </error_messages>
  </job>
</job_list>"#;

    let jobs = DomainMapper::default()
        .decode_job_list(&decode_payload(body).unwrap())
        .unwrap();

    assert_eq!(jobs.len(), 1);
    let job = &jobs[0];
    assert_eq!(job.id, "12");
    assert_eq!(job.submitted, utc(2016, 3, 1, 13, 15, 0));
    assert_eq!(job.errored, utc(2016, 3, 1, 13, 16, 0));
    assert_eq!(job.errors.len(), 2);
    assert_eq!(job.errors[0].message, "Bad & broken");
    assert_eq!(job.errors[1].message, "<missing>");
    assert!(job.errors[1].created_at.is_absent());
    assert_eq!(
        job.errors[0].created_at.to_utc(),
        Some(Utc.with_ymd_and_hms(2016, 3, 1, 13, 16, 0).unwrap())
    );
}

#[test]
fn test_conductor_job_with_nil_fields_and_sub_records() {
    let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<job href="/jobs/1" product="Elemental Conductor File" version="2.7.2vd.32545">
  <input>
    <file_input><uri>http://another.non.existent/video.mp4</uri></file_input>
  </input>
  <errored_time nil="true"/>
  <priority>50</priority>
  <output_group>
    <order>1</order>
    <type>file_group_settings</type>
    <output><extension>.mp4</extension></output>
  </output_group>
  <stream_assembly>
    <name>stream_1</name>
    <video_description><width nil="true"/><height>1080</height></video_description>
  </stream_assembly>
</job>"#;

    let jobs = DomainMapper::default()
        .decode_job_list(&decode_payload(body).unwrap())
        .unwrap();

    assert_eq!(jobs.len(), 1);
    let job = &jobs[0];
    assert!(job.errored.is_absent());
    assert_eq!(job.input.file_input.uri, "http://another.non.existent/video.mp4");
    assert_eq!(job.output_groups[0].outputs[0].extension, ".mp4");
    let video = job.stream_assemblies[0].video_description.as_ref().unwrap();
    assert_eq!((video.width.as_str(), video.height.as_str()), ("", "1080"));
}

#[test]
fn test_conductor_preset_list_body() {
    let body = r#"<preset_list>
  <preset href="/presets/1"><name>iPhone</name><permalink>iphone</permalink></preset>
  <preset href="/presets/2"><name>iPhone_ADAPT_HIGH</name></preset>
</preset_list>"#;

    let presets = DomainMapper::default()
        .decode_conductor_preset_list(&decode_payload(body).unwrap())
        .unwrap();
    let names: Vec<_> = presets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["iPhone", "iPhone_ADAPT_HIGH"]);
    assert_eq!(presets[0].permalink, "iphone");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_extra_sentinel_from_yaml() {
    let yaml = r#"
status:
  name: status
  layout: "%Y-%m-%d %H:%M:%S"
  sentinels: ["", "0000-00-00 00:00:00", "N/A"]
"#;
    let config = MapperConfig::from_yaml_str(yaml).unwrap();
    let mapper = DomainMapper::new(&config);

    let body = r#"{"response": {"job": {"id": "a", "uploaded": "N/A"}}}"#;
    let records = mapper
        .decode_status_list(&decode_payload(body).unwrap(), &["a"])
        .unwrap();
    assert!(records[0].uploaded.is_absent());

    let err = DomainMapper::default()
        .decode_status_list(&decode_payload(body).unwrap(), &["a"])
        .unwrap_err();
    assert!(matches!(err, Error::Format { .. }));
}
