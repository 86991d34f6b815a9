//! wavescope crate root: re-exports and module wiring.
//!
//! Renders the main wave view of a digital storage oscilloscope: sample
//! traces, graticule, header/footer status bars, channel and trigger arrow
//! markers, and UART/SPI protocol decoder lanes.
//!
//! - `data`: device settings snapshot and the pure helpers behind it
//!   (metric formatting, control-character names)
//! - `mapper`: sample index to pixel mapping and trace geometry
//! - `markers`: channel/trigger arrow placement with edge clamping
//! - `decoder`: bit-level UART/SPI decoders and decoder lane layout
//! - `render`: one render pass producing a [`Scene`]
//! - `painter` / `viewer`: egui painting and a native viewer window
//!
//! ```
//! use wavescope::{DeviceSettings, WaveRenderer};
//!
//! let mut settings = DeviceSettings::default();
//! settings.channels[0].display = true;
//! let scene = WaveRenderer::default()
//!     .render(Some(&settings), egui::vec2(1000.0, 520.0))
//!     .unwrap();
//! let arrow = scene.arrows().find(|a| a.label == '1').unwrap();
//! assert_eq!(arrow.pixel_position, 200.0);
//! ```

pub mod chrome;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod decoder;
pub mod error;
pub mod grid;
pub mod mapper;
pub mod markers;
pub mod painter;
pub mod persistence;
pub mod render;
pub mod scene;
pub mod viewer;

// Public re-exports for a compact external API
pub use color_scheme::{ColorScheme, CurveColors};
pub use config::WaveViewConfig;
pub use data::metric::{format_metric, MetricFormatter};
pub use data::scope::{DeviceSettings, SampleBuffer, ViewWindow};
pub use error::{DecoderError, SettingsError};
pub use mapper::sample_to_x;
pub use markers::{compute_marker, ClampState};
pub use render::WaveRenderer;
pub use scene::{Primitive, Scene};
pub use viewer::run_wave_view;
