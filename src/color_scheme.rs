//! Color scheme definitions for the wave view.
//!
//! A [`ColorScheme`] supplies the colors of everything the renderer draws
//! that is not a channel signal: background, raster, chrome text, decoder
//! lanes and the trigger accent.

use egui::{Color32, Context, Visuals};

/// Resolved colors for one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveColors {
    /// Fill behind the plot body.
    pub background: Color32,
    /// Graticule, rulers and border.
    pub raster: Color32,
    /// Chrome labels on the header/footer bars.
    pub text: Color32,
    /// Header and footer bar fill.
    pub chrome_bar: Color32,
    /// Trigger arrows, delay label and header trigger marker.
    pub trigger: Color32,
    /// Decoder baselines and cell outlines.
    pub decode_lane: Color32,
    /// Decoder error indicator.
    pub error: Color32,
    /// Labels of disabled channels.
    pub dimmed: Color32,
}

impl Default for CurveColors {
    fn default() -> Self {
        ColorScheme::Classic.curve_colors()
    }
}

/// Visual theme of the wave view, including user-defined custom schemes.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ColorScheme {
    /// Gray body with a dark raster, like the front panel of the device.
    #[default]
    Classic,
    /// Near-black body.
    Dark,
    /// Pure-black background with maximally-saturated colours.
    HighContrast,
    /// User-defined colors.
    Custom(CurveColors),
}

impl ColorScheme {
    /// All built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Classic,
            ColorScheme::Dark,
            ColorScheme::HighContrast,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> String {
        match self {
            ColorScheme::Classic => "Classic".to_string(),
            ColorScheme::Dark => "Dark".to_string(),
            ColorScheme::HighContrast => "High Contrast".to_string(),
            ColorScheme::Custom(_) => "Custom".to_string(),
        }
    }

    pub fn curve_colors(&self) -> CurveColors {
        match self {
            ColorScheme::Classic => CurveColors {
                background: Color32::from_rgb(128, 128, 128),
                raster: Color32::from_rgb(64, 64, 64),
                text: Color32::BLACK,
                chrome_bar: Color32::from_rgb(32, 32, 32),
                trigger: crate::markers::TRIGGER_COLOR,
                decode_lane: Color32::GREEN,
                error: Color32::RED,
                dimmed: Color32::from_rgb(48, 48, 48),
            },
            ColorScheme::Dark => CurveColors {
                background: Color32::from_rgb(16, 16, 16),
                raster: Color32::from_rgb(96, 96, 96),
                text: Color32::from_rgb(220, 220, 220),
                chrome_bar: Color32::from_rgb(32, 32, 32),
                trigger: crate::markers::TRIGGER_COLOR,
                decode_lane: Color32::GREEN,
                error: Color32::RED,
                dimmed: Color32::from_rgb(72, 72, 72),
            },
            ColorScheme::HighContrast => CurveColors {
                background: Color32::BLACK,
                raster: Color32::WHITE,
                text: Color32::WHITE,
                chrome_bar: Color32::from_rgb(20, 20, 20),
                trigger: Color32::from_rgb(255, 160, 0),
                decode_lane: Color32::from_rgb(0, 255, 64),
                error: Color32::from_rgb(255, 40, 40),
                dimmed: Color32::from_rgb(90, 90, 90),
            },
            ColorScheme::Custom(colors) => colors.clone(),
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        let colors = self.curve_colors();
        let mut v = match self {
            ColorScheme::Classic => Visuals::light(),
            _ => Visuals::dark(),
        };
        v.panel_fill = colors.chrome_bar;
        v.extreme_bg_color = colors.background;
        ctx.set_visuals(v);
    }
}
