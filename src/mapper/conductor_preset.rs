//! Conductor preset list decoding

use super::records::ConductorPresetRecord;
use super::{wire, DomainMapper, Fields};
use crate::error::Result;
use serde_json::Value;
use tracing::debug;

impl DomainMapper {
    /// Decode a conductor preset document
    ///
    /// Accepts a `preset_list` root holding one or many `preset` elements,
    /// or a bare `preset` root.
    pub fn decode_conductor_preset_list(
        &self,
        document: &Value,
    ) -> Result<Vec<ConductorPresetRecord>> {
        let presets = wire::document_items(document, "preset_list", "preset")?
            .into_iter()
            .map(conductor_preset)
            .collect::<Result<Vec<_>>>()?;

        debug!(count = presets.len(), "Decoded conductor presets");
        Ok(presets)
    }
}

fn conductor_preset(preset: Fields<'_>) -> Result<ConductorPresetRecord> {
    Ok(ConductorPresetRecord {
        name: preset.text("name")?,
        href: preset.text("@href")?,
        permalink: preset.text("permalink")?,
        description: preset.text("description")?,
    })
}
