//! Sample index → pixel mapping and trace geometry.

use egui::{Color32, Pos2};

use crate::data::channels::ChannelConfig;
use crate::data::scope::{SampleBuffer, TraceMode, ViewWindow};
use crate::scene::Primitive;

/// Map a sample index to a horizontal body coordinate.
///
/// `(sample_index - sample_start) * curve_width / samples_per_screen`. Indices
/// before the window start map to negative coordinates.
///
/// ```
/// # use wavescope::data::scope::{TimebaseConfig, ViewWindow};
/// # use wavescope::mapper::sample_to_x;
/// let tb = TimebaseConfig { samplerate: 1000.0, scale: 0.1 };
/// let view = ViewWindow::new(100, 10, &tb, 10_000);
/// assert_eq!(sample_to_x(100, &view, 500.0), 0.0);
/// assert_eq!(sample_to_x(600, &view, 500.0), 250.0);
/// ```
pub fn sample_to_x(sample_index: usize, view: &ViewWindow, curve_width: f64) -> f64 {
    SampleMapper::new(view, curve_width).x(sample_index)
}

/// Precomputed horizontal scale for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleMapper {
    pub sample_start: usize,
    pub pixels_per_sample: f64,
}

impl SampleMapper {
    pub fn new(view: &ViewWindow, curve_width: f64) -> Self {
        Self {
            sample_start: view.sample_start,
            pixels_per_sample: curve_width / view.samples_per_screen,
        }
    }

    pub fn x(&self, sample_index: usize) -> f64 {
        (sample_index as f64 - self.sample_start as f64) * self.pixels_per_sample
    }

    /// Width in pixels of a span of `samples` samples.
    pub fn width(&self, samples: f64) -> f64 {
        samples * self.pixels_per_sample
    }
}

/// How a trace is drawn for the current zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceDensity {
    /// Fewer samples than half the curve width: each sample is held over its
    /// own interval and joined to the previous level by a vertical riser.
    PerSample,
    /// A connected path through consecutive samples.
    Continuous,
}

impl TraceDensity {
    pub fn for_view(sample_count: usize, curve_width: f64) -> Self {
        if (sample_count as f64) < curve_width / 2.0 {
            TraceDensity::PerSample
        } else {
            TraceDensity::Continuous
        }
    }
}

/// Vertical mapping of raw sample counts for one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalMapper {
    /// Pixels per raw count (negative: larger values go up).
    pub v_sense: f64,
    /// Pixel row of raw count zero.
    pub zero_row: f64,
}

impl VerticalMapper {
    pub fn new(channel: &ChannelConfig, vert_divisions: u32, curve_height: f64) -> Self {
        let counts_per_screen = channel.full_scale(vert_divisions) / channel.y_increment;
        let v_sense = -curve_height / counts_per_screen;
        Self {
            v_sense,
            zero_row: curve_height / 2.0 + channel.y_origin * v_sense,
        }
    }

    pub fn y(&self, sample: i16) -> f64 {
        sample as f64 * self.v_sense + self.zero_row
    }
}

/// Per-frame parameters for [`build_trace`].
#[derive(Debug, Clone, Copy)]
pub struct TraceParams {
    pub curve_width: f64,
    pub curve_height: f64,
    pub vert_divisions: u32,
    pub mode: TraceMode,
    pub line_width: f32,
}

/// Build the primitives for one channel's trace within `view`.
///
/// Returns an empty list when the view holds no samples or the scales are
/// degenerate.
pub fn build_trace(
    buffer: &SampleBuffer,
    channel: &ChannelConfig,
    view: &ViewWindow,
    params: &TraceParams,
) -> Vec<Primitive> {
    if !view.is_valid() || view.sample_count == 0 {
        return Vec::new();
    }
    let h = SampleMapper::new(view, params.curve_width);
    let v = VerticalMapper::new(channel, params.vert_divisions, params.curve_height);
    if !v.v_sense.is_finite() || !v.zero_row.is_finite() {
        return Vec::new();
    }
    let samples = buffer.as_slice();
    let start = view.sample_start;
    let count = view.sample_count.min(samples.len().saturating_sub(start));
    let point = |i: usize, sample: i16| Pos2::new(h.width(i as f64) as f32, v.y(sample) as f32);
    let color = channel.color;

    if params.mode == TraceMode::Dots {
        let points = (0..count).map(|i| point(i, samples[start + i])).collect();
        return vec![Primitive::Points {
            points,
            color,
            size: params.line_width.max(1.0),
        }];
    }

    match TraceDensity::for_view(count, params.curve_width) {
        TraceDensity::PerSample => stepped(samples, start, count, &h, &v, color, params.line_width),
        TraceDensity::Continuous => {
            // The segment leaving the last visible sample runs to the next
            // buffered one and is clipped at the body edge.
            let end = (start + count + 1).min(samples.len());
            let points = (start..end).map(|s| point(s - start, samples[s])).collect();
            vec![Primitive::Path {
                points,
                color,
                width: params.line_width,
            }]
        }
    }
}

fn stepped(
    samples: &[i16],
    start: usize,
    count: usize,
    h: &SampleMapper,
    v: &VerticalMapper,
    color: Color32,
    width: f32,
) -> Vec<Primitive> {
    let mut out = Vec::with_capacity(count * 2);
    for i in 0..count {
        let x0 = h.width(i as f64) as f32;
        let x1 = h.width((i + 1) as f64) as f32;
        let y = v.y(samples[start + i]) as f32;
        out.push(Primitive::Line {
            from: Pos2::new(x0, y),
            to: Pos2::new(x1, y),
            color,
            width,
            style: Default::default(),
        });
        if i > 0 {
            let y_prev = v.y(samples[start + i - 1]) as f32;
            out.push(Primitive::Line {
                from: Pos2::new(x0, y_prev),
                to: Pos2::new(x0, y),
                color,
                width,
                style: Default::default(),
            });
        }
    }
    out
}
