//! Configuration of the wave view itself (as opposed to the device settings).

use crate::color_scheme::ColorScheme;

/// Appearance of the wave view.
///
/// | Field          | Purpose |
/// |----------------|---------|
/// | `border_size`  | Inset of the plot body from the target edges, px |
/// | `trace_width`  | Line width of signal traces, px |
/// | `font_size`    | Label font size used by the painter |
/// | `color_scheme` | Background, raster and chrome colors |
#[derive(Clone, Debug, PartialEq)]
pub struct WaveViewConfig {
    pub border_size: f32,
    pub trace_width: f32,
    pub font_size: f32,
    pub color_scheme: ColorScheme,
}

impl Default for WaveViewConfig {
    fn default() -> Self {
        Self {
            border_size: 60.0,
            trace_width: 1.0,
            font_size: 13.0,
            color_scheme: ColorScheme::Classic,
        }
    }
}

impl WaveViewConfig {
    /// Set the body inset. Negative values become 0.
    pub fn set_border_size(&mut self, size: f32) {
        self.border_size = size.max(0.0);
    }

    /// Set the trace line width. Negative values become 0.
    pub fn set_trace_width(&mut self, width: f32) {
        self.trace_width = width.max(0.0);
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size.max(0.0);
    }

    /// Smallest target extent that still holds a plot body.
    pub fn min_extent(&self) -> f32 {
        2.0 * self.border_size + 5.0
    }
}
