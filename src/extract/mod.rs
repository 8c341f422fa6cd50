//! Free-form configuration extraction module
//!
//! Supports: typed views over schema-less maps with a residual bag
//!
//! # Overview
//!
//! Preset formats, their streams and encoder tuning blocks are free-form
//! key/value maps on the wire. A static list of [`FieldSpec`]s names the keys
//! this version understands and how to coerce them; [`extract`] pulls those
//! into typed [`FieldValue`]s and keeps every other key, untouched, in a
//! residual map so nothing the service sends is lost.

mod extractor;
mod types;

pub use extractor::extract;
pub(crate) use extractor::{coerce_float, coerce_signed, coerce_text, coerce_unsigned};
pub use types::{Extracted, FieldKind, FieldSpec, FieldValue};

#[cfg(test)]
mod tests;
