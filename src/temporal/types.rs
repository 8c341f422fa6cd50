//! Timestamp and family types

use crate::error::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Layout used by media status responses
pub const STATUS_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Layout used by conductor job and node documents
pub const CONDUCTOR_LAYOUT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Layout used by conductor job error entries
pub const JOB_ERROR_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Zero date written by the media status API
pub const STATUS_ZERO_DATE: &str = "0000-00-00 00:00:00";

/// Zero instant written by the conductor API
pub const ZERO_INSTANT: &str = "0001-01-01T00:00:00Z";

// ============================================================================
// Timestamp
// ============================================================================

/// A decoded point in time, or the distinguished absent value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timestamp {
    /// The wire carried one of the family's sentinels
    #[default]
    Absent,
    /// A concrete instant with the offset it was decoded with
    At(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Whether this timestamp is the absent value
    pub fn is_absent(&self) -> bool {
        matches!(self, Timestamp::Absent)
    }

    /// The underlying instant, if any
    pub fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Timestamp::Absent => None,
            Timestamp::At(dt) => Some(dt),
        }
    }

    /// The instant converted to UTC, if any
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        self.as_datetime().map(|dt| dt.with_timezone(&Utc))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Timestamp::At(dt.fixed_offset())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Timestamp::Absent => serializer.serialize_none(),
            Timestamp::At(dt) => serializer.serialize_str(&dt.to_rfc3339()),
        }
    }
}

// ============================================================================
// Time Family
// ============================================================================

/// Layout, sentinels and normalization rule shared by one record family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFamily {
    /// Family name, used in diagnostics
    pub name: String,
    /// chrono strftime pattern the wire text must match
    pub layout: String,
    /// Literal values meaning "no timestamp", checked before parsing
    #[serde(default)]
    pub sentinels: Vec<String>,
    /// Convert decoded instants to UTC
    #[serde(default = "default_normalize_utc")]
    pub normalize_utc: bool,
}

fn default_normalize_utc() -> bool {
    true
}

impl TimeFamily {
    /// Create a family with no sentinels
    pub fn new(name: impl Into<String>, layout: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layout: layout.into(),
            sentinels: Vec::new(),
            normalize_utc: true,
        }
    }

    /// Add a sentinel literal
    #[must_use]
    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinels.push(sentinel.into());
        self
    }

    /// Keep the parsed offset instead of converting to UTC
    #[must_use]
    pub fn preserving_offset(mut self) -> Self {
        self.normalize_utc = false;
        self
    }

    /// Media status and format timestamps
    pub fn status() -> Self {
        Self::new("status", STATUS_LAYOUT)
            .with_sentinel("")
            .with_sentinel(STATUS_ZERO_DATE)
    }

    /// Conductor job and node timestamps
    pub fn conductor() -> Self {
        Self::new("conductor", CONDUCTOR_LAYOUT)
            .with_sentinel("")
            .with_sentinel(ZERO_INSTANT)
    }

    /// Conductor job error timestamps
    pub fn job_error() -> Self {
        Self::new("job_error", JOB_ERROR_LAYOUT)
            .with_sentinel("")
            .with_sentinel(ZERO_INSTANT)
            .preserving_offset()
    }

    /// Whether the layout carries a UTC offset
    pub fn layout_has_offset(&self) -> bool {
        self.layout.contains("%z") || self.layout.contains("%:z") || self.layout.contains("%#z")
    }

    /// Reject layouts chrono cannot interpret
    pub fn validate(&self) -> Result<()> {
        if self.layout.is_empty() || StrftimeItems::new(&self.layout).any(|i| matches!(i, Item::Error))
        {
            return Err(Error::config(format!(
                "invalid timestamp layout {:?} for family '{}'",
                self.layout, self.name
            )));
        }
        Ok(())
    }
}
