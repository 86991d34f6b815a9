//! One render pass: device settings in, [`Scene`] out.
//!
//! The pass is pure and never fails. Degenerate inputs (zero scales, empty
//! buffers, out-of-range symbols) are skipped rather than reported.

use egui::{Pos2, Rect, Vec2};

use crate::chrome;
use crate::config::WaveViewConfig;
use crate::data::scope::{DeviceSettings, MIN_TRACE_SAMPLES};
use crate::decoder::layout_decoder;
use crate::grid::raster;
use crate::mapper::{build_trace, TraceParams};
use crate::markers::{
    channel_markers, trigger_center_marker, trigger_level_marker, trigger_position_marker,
};
use crate::scene::{PlotBody, Primitive, Scene};

/// Renders device settings into scenes.
#[derive(Debug, Clone, Default)]
pub struct WaveRenderer {
    pub config: WaveViewConfig,
}

impl WaveRenderer {
    pub fn new(config: WaveViewConfig) -> Self {
        Self { config }
    }

    /// Plot body rectangle for a target of `size`, or `None` when the target
    /// is too small to hold one.
    pub fn body_rect(&self, size: Vec2) -> Option<Rect> {
        let min = self.config.min_extent();
        if size.x < min || size.y < min {
            return None;
        }
        let b = self.config.border_size;
        Some(Rect::from_min_max(
            Pos2::new(b, b),
            Pos2::new(size.x - b, size.y - b),
        ))
    }

    /// Render one frame. Returns `None` when there are no settings to show.
    pub fn render(&self, settings: Option<&DeviceSettings>, size: Vec2) -> Option<Scene> {
        let settings = settings?;
        let colors = self.config.color_scheme.curve_colors();

        let mut scene = Scene::new(size, colors.background);
        scene.chrome.extend(chrome::header(settings, size.x, &colors));
        scene
            .chrome
            .extend(chrome::footer(settings, size.x, size.y, &colors));

        let Some(rect) = self.body_rect(size) else {
            log::trace!(
                "render: target {}x{} too small for border {}",
                size.x,
                size.y,
                self.config.border_size
            );
            return Some(scene);
        };
        let (w, h) = (rect.width(), rect.height());
        let body_size = rect.size();
        let mut body = Vec::new();

        body.extend(raster(
            &settings.display,
            w,
            h,
            colors.raster,
            self.config.trace_width,
        ));
        body.push(trigger_center_marker(w, colors.trigger));
        body.extend(
            channel_markers(&settings.channels, settings.display.vert_divisions, body_size)
                .into_iter()
                .map(Primitive::Arrow),
        );

        let view = settings.view_window();
        if settings.buffer_len() > MIN_TRACE_SAMPLES {
            let params = TraceParams {
                curve_width: w as f64,
                curve_height: h as f64,
                vert_divisions: settings.display.vert_divisions,
                mode: settings.display.trace_mode,
                line_width: self.config.trace_width,
            };
            for (ch, buf) in settings.channels.iter().zip(&settings.buffers) {
                if ch.display {
                    body.extend(build_trace(buf, ch, &view, &params));
                }
            }
        }

        if settings.decode.display {
            let layout = layout_decoder(settings, &view, Rect::from_min_size(Pos2::ZERO, body_size));
            body.extend(layout.primitives(w, &colors));
        }

        if let Some(marker) = trigger_level_marker(settings, body_size, colors.trigger) {
            body.push(Primitive::Arrow(marker));
        }
        body.push(Primitive::Arrow(trigger_position_marker(
            &settings.trigger,
            &settings.timebase,
            settings.display.hor_divisions,
            body_size,
            colors.trigger,
        )));

        scene.body = Some(PlotBody {
            rect,
            primitives: body,
        });
        Some(scene)
    }
}
