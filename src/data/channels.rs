//! Per-channel vertical settings and appearance.

use egui::Color32;
use serde::{Deserialize, Serialize};

/// Physical unit a channel is calibrated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelUnit {
    #[default]
    Volt,
    Watt,
    Ampere,
    Unknown,
}

impl ChannelUnit {
    /// Suffix appended to formatted values.
    pub fn suffix(&self) -> &'static str {
        match self {
            ChannelUnit::Volt => "V",
            ChannelUnit::Watt => "W",
            ChannelUnit::Ampere => "A",
            ChannelUnit::Unknown => "U",
        }
    }
}

/// Input coupling of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Coupling {
    #[default]
    Dc,
    Ac,
    Ground,
}

/// Vertical configuration of one physical channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Volts (or `unit`) per vertical division.
    pub scale: f64,
    /// Vertical offset in `unit`.
    pub offset: f64,
    pub unit: ChannelUnit,
    pub invert: bool,
    pub bandwidth_limit: bool,
    pub coupling: Coupling,
    /// Whether the channel is shown.
    pub display: bool,
    #[serde(with = "crate::persistence::rgba")]
    pub color: Color32,
    /// Units per raw sample count.
    pub y_increment: f64,
    /// Raw sample count of the vertical origin.
    pub y_origin: f64,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: 0.0,
            unit: ChannelUnit::Volt,
            invert: false,
            bandwidth_limit: false,
            coupling: Coupling::Dc,
            display: false,
            color: Self::alloc_color(0),
            // 8-bit ADC spread over 10 divisions of 25 counts
            y_increment: 1.0 / 25.0,
            y_origin: 0.0,
        }
    }
}

impl ChannelConfig {
    /// Create a hidden channel with the palette color for `index`.
    pub fn new(index: usize) -> Self {
        Self {
            color: Self::alloc_color(index),
            ..Default::default()
        }
    }

    /// Label character used on markers and in the footer (`'1'..='4'`).
    pub fn label(index: usize) -> char {
        char::from_digit((index as u32 + 1) % 10, 10).unwrap_or('?')
    }

    /// Default signal color for the given channel index.
    pub fn alloc_color(index: usize) -> Color32 {
        const PALETTE: [Color32; 4] = [
            Color32::from_rgb(255, 255, 0),
            Color32::from_rgb(0, 255, 255),
            Color32::from_rgb(255, 0, 255),
            Color32::from_rgb(0, 128, 255),
        ];
        PALETTE[index % PALETTE.len()]
    }

    /// Vertical span of the whole screen in `unit`.
    pub fn full_scale(&self, vert_divisions: u32) -> f64 {
        self.scale * vert_divisions as f64
    }
}
