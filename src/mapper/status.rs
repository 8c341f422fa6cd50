//! Media status decoding

use super::records::{DestinationRecord, FormatRecord, StatusRecord};
use super::{cell, objects, wire, DomainMapper, Fields};
use crate::error::Result;
use crate::shape::{align, normalize_values};
use serde_json::Value;
use tracing::debug;

impl DomainMapper {
    /// Decode a media status envelope
    ///
    /// `response.job` may be a single job or a list of jobs. The number of
    /// decoded records is not checked against `requested_ids`; a mismatch
    /// is only logged.
    pub fn decode_status_list<S: AsRef<str>>(
        &self,
        envelope: &Value,
        requested_ids: &[S],
    ) -> Result<Vec<StatusRecord>> {
        let response = wire::response(envelope)?;

        let records = objects(response.get("job"), "response.job")?
            .into_iter()
            .map(|job| self.status_record(job))
            .collect::<Result<Vec<_>>>()?;

        if records.len() != requested_ids.len() {
            debug!(
                requested = requested_ids.len(),
                decoded = records.len(),
                "Status count differs from requested media ids"
            );
        }

        Ok(records)
    }

    fn status_record(&self, job: Fields<'_>) -> Result<StatusRecord> {
        let decoder = &self.status_time;

        let formats = objects(job.get("format"), "job.format")?
            .into_iter()
            .map(|format| self.format_record(format))
            .collect::<Result<Vec<_>>>()?;

        Ok(StatusRecord {
            media_id: job.text("id")?,
            user_id: job.text("userid")?,
            source_file: job.text("sourcefile")?,
            status: job.text("status")?,
            previous_status: job.text("prevstatus")?,
            notify_url: job.text("notifyurl")?,
            created: job.time("created", decoder)?,
            started: job.time("started", decoder)?,
            finished: job.time("finished", decoder)?,
            downloaded: job.time("downloaded", decoder)?,
            uploaded: job.time("uploaded", decoder)?,
            progress: job.float("progress")?,
            time_left: job.text("time_left")?,
            progress_current: job.float("progress_current")?,
            time_left_current: job.text("time_left_current")?,
            formats,
        })
    }

    fn format_record(&self, format: Fields<'_>) -> Result<FormatRecord> {
        let decoder = &self.status_time;

        Ok(FormatRecord {
            id: format.text("id")?,
            status: format.text("status")?,
            description: format.text("description")?,
            created: format.time("created", decoder)?,
            started: format.time("started", decoder)?,
            finished: format.time("finished", decoder)?,
            s3_destination: format.text("s3_destination")?,
            cf_destination: format.text("cf_destination")?,
            file_size: format.text("convertedsize")?,
            destinations: destinations(format),
        })
    }
}

/// Pair `destination` with `destination_status` by position
fn destinations(format: Fields<'_>) -> Vec<DestinationRecord> {
    let cells = |key: &str| -> Vec<Option<String>> {
        normalize_values(format.get(key))
            .into_iter()
            .map(cell)
            .collect()
    };

    align(&cells("destination"), &cells("destination_status"))
        .into_iter()
        .map(|(name, status)| DestinationRecord { name, status })
        .collect()
}
