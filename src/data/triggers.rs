use egui::Color32;
use serde::{Deserialize, Serialize};

/// Input used to detect the trigger condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerSource {
    /// Physical channel, zero based.
    Channel(u8),
    External,
    /// External input through the /5 attenuator.
    External5,
    /// AC mains line.
    AcLine,
}

impl Default for TriggerSource {
    fn default() -> Self {
        TriggerSource::Channel(0)
    }
}

impl TriggerSource {
    /// Channel index when the source is a physical channel.
    pub fn channel(&self) -> Option<usize> {
        match self {
            TriggerSource::Channel(c) => Some(*c as usize),
            _ => None,
        }
    }

    /// Text shown in the header source badge.
    pub fn badge(&self) -> String {
        match self {
            TriggerSource::Channel(c) => format!("{}", *c as u32 + 1),
            TriggerSource::External | TriggerSource::External5 => "E".to_string(),
            TriggerSource::AcLine => "AC".to_string(),
        }
    }

    /// Badge color for non-channel sources; channel sources use the channel color.
    pub fn fixed_color(&self) -> Option<Color32> {
        match self {
            TriggerSource::Channel(_) => None,
            TriggerSource::External | TriggerSource::External5 => Some(Color32::GREEN),
            TriggerSource::AcLine => Some(Color32::from_rgb(255, 64, 0)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TriggerSlope {
    #[default]
    Rising,
    Falling,
    Either,
}

/// Acquisition/trigger status as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TriggerStatus {
    Triggered,
    Wait,
    Run,
    #[default]
    Auto,
    Finished,
    Stopped,
}

impl TriggerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TriggerStatus::Triggered => "T'D",
            TriggerStatus::Wait => "WAIT",
            TriggerStatus::Run => "RUN",
            TriggerStatus::Auto => "AUTO",
            TriggerStatus::Finished => "FIN",
            TriggerStatus::Stopped => "STOP",
        }
    }
}

/// Edge trigger settings plus the horizontal trigger placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    pub source: TriggerSource,
    /// Edge level in the source channel's unit.
    pub level: f64,
    pub slope: TriggerSlope,
    /// Horizontal trigger offset in seconds.
    pub timebase_offset: f64,
    /// Viewer center position in seconds, relative to the trigger.
    pub center_position: f64,
    pub status: TriggerStatus,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            source: TriggerSource::Channel(0),
            level: 0.0,
            slope: TriggerSlope::Rising,
            timebase_offset: 0.0,
            center_position: 0.0,
            status: TriggerStatus::Auto,
        }
    }
}

impl TriggerConfig {
    /// Total horizontal delay shown in the header (`D` label).
    pub fn delay(&self) -> f64 {
        self.timebase_offset + self.center_position
    }
}
