//! Family-bound timestamp decoder

use super::types::{TimeFamily, Timestamp};
use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::fmt::Write;

/// Decodes and encodes timestamps for a single record family
#[derive(Debug, Clone)]
pub struct TemporalDecoder {
    family: TimeFamily,
    has_offset: bool,
}

impl TemporalDecoder {
    /// Create a decoder bound to a family
    pub fn new(family: TimeFamily) -> Self {
        let has_offset = family.layout_has_offset();
        Self { family, has_offset }
    }

    /// The family this decoder was built for
    pub fn family(&self) -> &TimeFamily {
        &self.family
    }

    /// Decode wire text into a timestamp
    ///
    /// Sentinels are matched before the layout, so a sentinel does not have
    /// to be valid under the layout itself.
    pub fn decode(&self, text: &str) -> Result<Timestamp> {
        if self.family.sentinels.iter().any(|s| s == text) {
            return Ok(Timestamp::Absent);
        }

        let parsed = if self.has_offset {
            DateTime::parse_from_str(text, &self.family.layout)
        } else {
            NaiveDateTime::parse_from_str(text, &self.family.layout)
                .map(|ndt| DateTime::<Utc>::from_naive_utc_and_offset(ndt, Utc).fixed_offset())
        }
        .map_err(|_| Error::format(text, &self.family.layout))?;

        if self.family.normalize_utc {
            Ok(Timestamp::At(parsed.with_timezone(&Utc).fixed_offset()))
        } else {
            Ok(Timestamp::At(parsed))
        }
    }

    /// Decode an optional wire value; a missing field is absent
    pub fn decode_opt(&self, text: Option<&str>) -> Result<Timestamp> {
        match text {
            Some(text) => self.decode(text),
            None => Ok(Timestamp::Absent),
        }
    }

    /// Render a timestamp under the family layout
    ///
    /// Returns `None` for [`Timestamp::Absent`]: the field must be omitted,
    /// never written back as a sentinel. A layout chrono cannot render is a
    /// format error.
    pub fn encode(&self, timestamp: &Timestamp) -> Result<Option<String>> {
        let Some(dt) = timestamp.as_datetime() else {
            return Ok(None);
        };

        let layout = &self.family.layout;
        let mut text = String::new();
        let written = if self.family.normalize_utc || !self.has_offset {
            write!(text, "{}", dt.with_timezone(&Utc).format(layout))
        } else {
            write!(text, "{}", dt.format(layout))
        };
        written.map_err(|_| Error::format(dt.to_rfc3339(), layout))?;

        Ok(Some(text))
    }
}
