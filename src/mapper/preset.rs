//! Preset decoding

use super::records::{PresetFormat, PresetRecord};
use super::{objects, wire, DomainMapper, Fields};
use crate::error::{kind_name, Error, Result};
use crate::types::PresetType;
use serde_json::Value;
use tracing::debug;

impl DomainMapper {
    /// Decode a preset list envelope
    ///
    /// User presets come first, then UI presets. Each group may be a single
    /// preset object or a list.
    pub fn decode_preset_list(&self, envelope: &Value) -> Result<Vec<PresetRecord>> {
        let response = wire::response(envelope)?;

        let mut presets = Vec::new();
        for (key, path) in [("user", "response.user"), ("ui", "response.ui")] {
            for preset in objects(response.get(key), path)? {
                presets.push(preset_record(preset)?);
            }
        }

        debug!(count = presets.len(), "Decoded preset list");
        Ok(presets)
    }

    /// Decode a single-preset envelope
    pub fn decode_preset(&self, envelope: &Value) -> Result<PresetRecord> {
        let response = wire::response(envelope)?;
        preset_record(Fields::new(response))
    }
}

fn preset_record(preset: Fields<'_>) -> Result<PresetRecord> {
    let format = match preset.get("format") {
        None | Some(Value::Null) => PresetFormat::default(),
        Some(Value::Object(raw)) => PresetFormat::from_raw(raw)?,
        Some(other) => return Err(Error::shape("preset.format", kind_name(other))),
    };

    Ok(PresetRecord {
        name: preset.text("name")?,
        preset_type: PresetType::from_wire(&preset.text("type")?),
        output: preset.text("output")?,
        format,
    })
}
