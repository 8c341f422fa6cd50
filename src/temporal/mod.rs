//! Timestamp decoding module
//!
//! Supports: one textual layout and one set of "absent" sentinels per
//! record family.
//!
//! # Overview
//!
//! Each upstream record family writes timestamps in its own fixed layout and
//! marks missing values with reserved literals (an empty string or a zero
//! date). A [`TemporalDecoder`] is built once per family from a
//! [`TimeFamily`] and turns wire text into a [`Timestamp`], which is either a
//! concrete instant or [`Timestamp::Absent`].

mod decoder;
mod types;

pub use decoder::TemporalDecoder;
pub use types::{
    TimeFamily, Timestamp, CONDUCTOR_LAYOUT, JOB_ERROR_LAYOUT, STATUS_LAYOUT, STATUS_ZERO_DATE,
    ZERO_INSTANT,
};
