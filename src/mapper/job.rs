//! Conductor job decoding

use super::records::{
    AppleLiveGroupSettings, ContentDuration, JobErrorRecord, JobInput, JobOutput, JobRecord,
    Location, OutputGroup, StreamAssembly, VideoDescription, VideoInputInfo,
};
use super::{objects, wire, DomainMapper, Fields};
use crate::error::{Error, Result};
use serde_json::Value;
use tracing::debug;

impl DomainMapper {
    /// Decode a conductor job document
    ///
    /// Accepts the tree produced by [`crate::decode::XmlDecoder`]: a
    /// `job_list` root holding one or many `job` elements, or a bare `job`
    /// root. An `errors` root is the service's error envelope.
    pub fn decode_job_list(&self, document: &Value) -> Result<Vec<JobRecord>> {
        let records = wire::document_items(document, "job_list", "job")?
            .into_iter()
            .map(|job| self.job_record(job))
            .collect::<Result<Vec<_>>>()?;

        debug!(count = records.len(), "Decoded conductor jobs");
        Ok(records)
    }

    fn job_record(&self, job: Fields<'_>) -> Result<JobRecord> {
        let decoder = &self.conductor_time;
        let href = job.text("@href")?;

        let errors = match job.object("error_messages", "job.error_messages")? {
            None => Vec::new(),
            Some(messages) => objects(messages.get("error"), "job.error_messages.error")?
                .into_iter()
                .map(|error| self.job_error_record(error))
                .collect::<Result<Vec<_>>>()?,
        };

        let output_groups = objects(job.get("output_group"), "job.output_group")?
            .into_iter()
            .map(output_group)
            .collect::<Result<Vec<_>>>()?;

        let stream_assemblies = objects(job.get("stream_assembly"), "job.stream_assembly")?
            .into_iter()
            .map(stream_assembly)
            .collect::<Result<Vec<_>>>()?;

        let content_duration = job
            .object("content_duration", "job.content_duration")?
            .map(|d| {
                Ok::<_, Error>(ContentDuration {
                    input_duration: d.signed("input_duration")?,
                })
            })
            .transpose()?;

        Ok(JobRecord {
            id: job_id(&href),
            status: job.text("status")?,
            priority: job.signed("priority")?,
            percent_complete: job.signed("pct_complete")?,
            submitted: job.time("submitted", decoder)?,
            started: job.time("start_time", decoder)?,
            completed: job.time("complete_time", decoder)?,
            errored: job.time("errored_time", decoder)?,
            errors,
            input: job_input(job)?,
            content_duration,
            output_groups,
            stream_assemblies,
            href,
        })
    }

    fn job_error_record(&self, error: Fields<'_>) -> Result<JobErrorRecord> {
        Ok(JobErrorRecord {
            code: error.signed("code")?,
            message: error.text("message")?,
            created_at: error.time("created_at", &self.job_error_time)?,
        })
    }
}

fn job_input(job: Fields<'_>) -> Result<JobInput> {
    let Some(input) = job.object("input", "job.input")? else {
        return Ok(JobInput::default());
    };

    let file_input = input
        .object("file_input", "job.input.file_input")?
        .map(location)
        .transpose()?
        .unwrap_or_default();

    let video_info = match input.object("input_info", "job.input.input_info")? {
        Some(info) => info
            .object("video", "job.input.input_info.video")?
            .map(video_input_info)
            .transpose()?,
        None => None,
    };

    Ok(JobInput {
        file_input,
        video_info,
    })
}

fn location(loc: Fields<'_>) -> Result<Location> {
    Ok(Location {
        uri: loc.text("uri")?,
        username: loc.text("username")?,
        password: loc.text("password")?,
    })
}

fn video_input_info(video: Fields<'_>) -> Result<VideoInputInfo> {
    Ok(VideoInputInfo {
        format: video.text("format")?,
        format_info: video.text("format_info")?,
        format_profile: video.text("format_profile")?,
        codec_id: video.text("codec_id")?,
        codec_id_info: video.text("codec_id_info")?,
        bitrate: video.text("bit_rate")?,
        width: video.text("width")?,
        height: video.text("height")?,
    })
}

fn output_group(group: Fields<'_>) -> Result<OutputGroup> {
    let file_settings =
        group.object("file_group_settings", "output_group.file_group_settings")?;
    let file_destination = match file_settings {
        Some(settings) => settings
            .object("destination", "file_group_settings.destination")?
            .map(location)
            .transpose()?,
        None => None,
    };

    let apple_live = group
        .object("apple_live_group_settings", "output_group.apple_live_group_settings")?
        .map(|settings| {
            Ok::<_, Error>(AppleLiveGroupSettings {
                destination: settings
                    .object("destination", "apple_live_group_settings.destination")?
                    .map(location)
                    .transpose()?,
                segment_length: settings.unsigned("segment_length")?,
            })
        })
        .transpose()?;

    let outputs = objects(group.get("output"), "output_group.output")?
        .into_iter()
        .map(job_output)
        .collect::<Result<Vec<_>>>()?;

    Ok(OutputGroup {
        order: group.signed("order")?,
        group_type: group.text("type")?,
        file_destination,
        apple_live,
        outputs,
    })
}

fn job_output(output: Fields<'_>) -> Result<JobOutput> {
    Ok(JobOutput {
        full_uri: output.text("full_uri")?,
        stream_assembly_name: output.text("stream_assembly_name")?,
        name_modifier: output.text("name_modifier")?,
        order: output.signed("order")?,
        extension: output.text("extension")?,
        container: output.text("container")?,
    })
}

fn stream_assembly(assembly: Fields<'_>) -> Result<StreamAssembly> {
    let video_description = assembly
        .object("video_description", "stream_assembly.video_description")?
        .map(|video| {
            Ok::<_, Error>(VideoDescription {
                codec: video.text("codec")?,
                encoder_type: video.text("encoder_type")?,
                width: video.text("width")?,
                height: video.text("height")?,
            })
        })
        .transpose()?;

    Ok(StreamAssembly {
        id: assembly.text("id")?,
        name: assembly.text("name")?,
        preset: assembly.text("preset")?,
        video_description,
    })
}

/// Last path segment of a job href; an href without `/` is the id itself
fn job_id(href: &str) -> String {
    href.rsplit('/').next().unwrap_or_default().to_string()
}
