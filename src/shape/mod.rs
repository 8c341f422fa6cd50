//! Wire shape module
//!
//! Supports: singular/plural normalization, parallel array alignment
//!
//! # Overview
//!
//! The upstream services emit the same logical field as a bare object when
//! there is one of it and as an array when there are several. They also
//! split paired data (destination name and destination status) across two
//! arrays of independent length that use null for "no value here". This
//! module turns both irregularities into plain sequences.

mod align;
mod normalize;

pub use align::align;
pub use normalize::{normalize, normalize_values, OneOrMany};

#[cfg(test)]
mod tests;
