//! Native viewer window hosting a [`WaveRenderer`].
//!
//! [`run_wave_view`] opens an eframe window that renders a fixed settings
//! snapshot every frame. The arrow keys pan through the acquisition memory,
//! `+`/`-` change the timebase.

use eframe::egui;

use crate::config::WaveViewConfig;
use crate::data::scope::DeviceSettings;
use crate::painter::paint_scene;
use crate::render::WaveRenderer;

/// Timebase steps walked by the zoom keys, seconds per division.
const TIMEBASE_STEPS: [f64; 12] = [
    1e-6, 2e-6, 5e-6, 1e-5, 2e-5, 5e-5, 1e-4, 2e-4, 5e-4, 1e-3, 2e-3, 5e-3,
];

pub struct WaveViewApp {
    settings: Option<DeviceSettings>,
    renderer: WaveRenderer,
    color_scheme_applied: bool,
}

impl WaveViewApp {
    pub fn new(settings: Option<DeviceSettings>, config: WaveViewConfig) -> Self {
        Self {
            settings,
            renderer: WaveRenderer::new(config),
            color_scheme_applied: false,
        }
    }

    pub fn settings(&self) -> Option<&DeviceSettings> {
        self.settings.as_ref()
    }

    /// Move the view by `divisions` horizontal divisions, staying inside the buffer.
    pub fn pan(&mut self, divisions: f64) {
        let Some(s) = self.settings.as_mut() else {
            return;
        };
        let step = s.timebase.samples_per_division() * divisions;
        let max_start = s.buffer_len().saturating_sub(s.view_window().sample_count.max(1));
        let start = (s.view_start as f64 + step).clamp(0.0, max_start as f64);
        s.view_start = start as usize;
        log::debug!("view start -> {}", s.view_start);
    }

    /// Step the timebase one entry up (`zoom_out`) or down the 1-2-5 table.
    pub fn zoom(&mut self, zoom_out: bool) {
        let Some(s) = self.settings.as_mut() else {
            return;
        };
        let idx = TIMEBASE_STEPS
            .iter()
            .position(|t| *t >= s.timebase.scale * 0.999)
            .unwrap_or(TIMEBASE_STEPS.len() - 1);
        let idx = if zoom_out {
            (idx + 1).min(TIMEBASE_STEPS.len() - 1)
        } else {
            idx.saturating_sub(1)
        };
        s.timebase.scale = TIMEBASE_STEPS[idx];
        log::debug!("timebase -> {} s/div", s.timebase.scale);
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (left, right, plus, minus) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
                i.key_pressed(egui::Key::Minus),
            )
        });
        if left {
            self.pan(-1.0);
        }
        if right {
            self.pan(1.0);
        }
        if plus {
            self.zoom(false);
        }
        if minus {
            self.zoom(true);
        }
    }
}

impl eframe::App for WaveViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.color_scheme_applied {
            self.renderer.config.color_scheme.apply(ctx);
            self.color_scheme_applied = true;
        }
        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let target = ui.max_rect();
                if let Some(scene) = self.renderer.render(self.settings.as_ref(), target.size()) {
                    paint_scene(
                        ui.painter(),
                        target,
                        &scene,
                        self.renderer.config.font_size,
                    );
                }
            });
    }
}

/// Open a native window showing `settings`. Blocks until the window is closed.
pub fn run_wave_view(
    settings: Option<DeviceSettings>,
    config: WaveViewConfig,
) -> eframe::Result<()> {
    let title = settings
        .as_ref()
        .map_or_else(|| "wavescope".to_string(), |s| format!("wavescope - {}", s.model_name));
    let app = WaveViewApp::new(settings, config);
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1000.0, 600.0)),
        ..Default::default()
    };
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
