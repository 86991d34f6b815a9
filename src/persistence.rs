//! JSON snapshots of device settings.
//!
//! Device layers hand settings over as a JSON document (e.g. from a remote
//! acquisition process). Snapshots are validated on the way in; nothing here
//! touches the filesystem.

use crate::data::scope::DeviceSettings;
use crate::error::SettingsResult;

impl DeviceSettings {
    /// Parse and validate a settings snapshot.
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: DeviceSettings = serde_json::from_str(json)?;
        settings.validate()?;
        log::debug!(
            "loaded settings snapshot: model {}, {} channels, {} samples",
            settings.model_name,
            settings.channel_count(),
            settings.buffer_len()
        );
        Ok(settings)
    }

    /// Serialize the snapshot, including sample buffers and decoded lines.
    pub fn to_json(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize only the configuration, leaving out sample buffers and
    /// decoded symbols.
    pub fn to_json_config_only(&self) -> SettingsResult<String> {
        let mut stripped = self.clone();
        stripped.buffers.clear();
        stripped.decoded.clear();
        Ok(serde_json::to_string_pretty(&stripped)?)
    }
}

/// Serde adapter storing an [`egui::Color32`] as `[r, g, b, a]`.
pub(crate) mod rgba {
    use egui::Color32;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(color: &Color32, s: S) -> Result<S::Ok, S::Error> {
        [color.r(), color.g(), color.b(), color.a()].serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Color32, D::Error> {
        let [r, g, b, a] = <[u8; 4]>::deserialize(d)?;
        Ok(Color32::from_rgba_unmultiplied(r, g, b, a))
    }
}
