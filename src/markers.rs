//! Channel, trigger-level and trigger-position arrow placement.
//!
//! Markers are placed in plot-body coordinates. A marker whose ideal position
//! lies outside the body is pinned one pixel past the edge and turned to point
//! towards the off-screen value.

use egui::{Color32, Pos2, Vec2};

use crate::data::channels::ChannelConfig;
use crate::data::scope::{DeviceSettings, TimebaseConfig};
use crate::data::triggers::TriggerConfig;
use crate::scene::Primitive;

/// Default accent color for trigger markers.
pub const TRIGGER_COLOR: Color32 = Color32::from_rgb(255, 128, 0);

/// Where a marker ended up relative to the visible range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampState {
    None,
    /// Below the start of the range (above the top edge, left of the left edge).
    ClampedLow,
    /// Past the end of the range (below the bottom edge, right of the right edge).
    ClampedHigh,
}

/// Direction the arrow tip points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowOrientation {
    Right,
    Down,
    Left,
    Up,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowMarker {
    /// Clamped position along the marker's axis (y for level markers, x for
    /// the trigger-position marker).
    pub pixel_position: f64,
    pub clamp: ClampState,
    /// Tip of the arrow in body coordinates.
    pub tip: Pos2,
    pub orientation: ArrowOrientation,
    pub color: Color32,
    pub label: char,
}

impl ArrowMarker {
    /// Outline of the arrow shape, tip included.
    pub fn outline(&self) -> [Pos2; 5] {
        let Pos2 { x, y } = self.tip;
        match self.orientation {
            ArrowOrientation::Right => [
                Pos2::new(x - 20.0, y + 6.0),
                Pos2::new(x - 7.0, y + 6.0),
                Pos2::new(x, y),
                Pos2::new(x - 7.0, y - 6.0),
                Pos2::new(x - 20.0, y - 6.0),
            ],
            ArrowOrientation::Down => [
                Pos2::new(x + 6.0, y - 20.0),
                Pos2::new(x + 6.0, y - 7.0),
                Pos2::new(x, y),
                Pos2::new(x - 6.0, y - 7.0),
                Pos2::new(x - 6.0, y - 20.0),
            ],
            ArrowOrientation::Left => [
                Pos2::new(x + 20.0, y + 6.0),
                Pos2::new(x + 7.0, y + 6.0),
                Pos2::new(x, y),
                Pos2::new(x + 7.0, y - 6.0),
                Pos2::new(x + 20.0, y - 6.0),
            ],
            ArrowOrientation::Up => [
                Pos2::new(x + 6.0, y + 20.0),
                Pos2::new(x + 6.0, y + 7.0),
                Pos2::new(x, y),
                Pos2::new(x - 6.0, y + 7.0),
                Pos2::new(x - 6.0, y + 20.0),
            ],
        }
    }

    /// Baseline-left anchor of the label character inside the arrow body.
    pub fn label_pos(&self) -> Pos2 {
        let Pos2 { x, y } = self.tip;
        match self.orientation {
            ArrowOrientation::Right => Pos2::new(x - 17.0, y + 4.0),
            ArrowOrientation::Down => Pos2::new(x - 3.0, y - 7.0),
            ArrowOrientation::Left => Pos2::new(x + 9.0, y + 4.0),
            ArrowOrientation::Up => Pos2::new(x - 3.0, y + 16.0),
        }
    }
}

/// Vertical pixel position of `value` on a channel with the given scale and
/// offset, clamped to one pixel outside `0..=curve_height`.
///
/// ```
/// # use wavescope::markers::{compute_marker, ClampState};
/// assert_eq!(compute_marker(0.0, 1.0, 0.0, 8, 400.0), (200.0, ClampState::None));
/// assert_eq!(compute_marker(5.0, 1.0, 0.0, 8, 400.0), (-1.0, ClampState::ClampedLow));
/// ```
pub fn compute_marker(
    value: f64,
    scale: f64,
    offset: f64,
    vert_divisions: u32,
    curve_height: f64,
) -> (f64, ClampState) {
    let units_per_pixel = (scale * vert_divisions as f64) / curve_height;
    let raw = curve_height / 2.0 - (value + offset) / units_per_pixel;
    clamp_to(raw, curve_height)
}

/// Horizontal pixel position of the trigger point, clamped to one pixel
/// outside `0..=curve_width`.
pub fn compute_position_marker(
    timebase_offset: f64,
    center_position: f64,
    timebase_scale: f64,
    hor_divisions: u32,
    curve_width: f64,
) -> (f64, ClampState) {
    let screen_time = timebase_scale * hor_divisions as f64;
    let raw = curve_width / 2.0 - ((timebase_offset + center_position) / screen_time) * curve_width;
    clamp_to(raw, curve_width)
}

fn clamp_to(raw: f64, extent: f64) -> (f64, ClampState) {
    if raw.is_nan() {
        (extent / 2.0, ClampState::None)
    } else if raw < 0.0 {
        (-1.0, ClampState::ClampedLow)
    } else if raw > extent {
        (extent + 1.0, ClampState::ClampedHigh)
    } else {
        (raw, ClampState::None)
    }
}

/// Markers on the left body edge for every displayed channel.
pub fn channel_markers(
    channels: &[ChannelConfig],
    vert_divisions: u32,
    body: Vec2,
) -> Vec<ArrowMarker> {
    channels
        .iter()
        .enumerate()
        .filter(|(_, ch)| ch.display)
        .map(|(i, ch)| {
            let (y, clamp) =
                compute_marker(0.0, ch.scale, ch.offset, vert_divisions, body.y as f64);
            let (x, orientation) = match clamp {
                ClampState::None => (0.0, ArrowOrientation::Right),
                ClampState::ClampedLow => (-6.0, ArrowOrientation::Up),
                ClampState::ClampedHigh => (-6.0, ArrowOrientation::Down),
            };
            ArrowMarker {
                pixel_position: y,
                clamp,
                tip: Pos2::new(x, y as f32),
                orientation,
                color: ch.color,
                label: ChannelConfig::label(i),
            }
        })
        .collect()
}

/// Trigger-level marker on the right body edge. Only channel sources have a
/// level that maps onto the screen.
pub fn trigger_level_marker(
    settings: &DeviceSettings,
    body: Vec2,
    color: Color32,
) -> Option<ArrowMarker> {
    let ch = settings.trigger_channel()?;
    let (y, clamp) = compute_marker(
        settings.trigger.level,
        ch.scale,
        ch.offset,
        settings.display.vert_divisions,
        body.y as f64,
    );
    let (x, orientation) = match clamp {
        ClampState::None => (body.x, ArrowOrientation::Left),
        ClampState::ClampedLow => (body.x + 6.0, ArrowOrientation::Up),
        ClampState::ClampedHigh => (body.x + 6.0, ArrowOrientation::Down),
    };
    Some(ArrowMarker {
        pixel_position: y,
        clamp,
        tip: Pos2::new(x, y as f32),
        orientation,
        color,
        label: 'T',
    })
}

/// Trigger-position marker along the top body edge.
pub fn trigger_position_marker(
    trigger: &TriggerConfig,
    timebase: &TimebaseConfig,
    hor_divisions: u32,
    body: Vec2,
    color: Color32,
) -> ArrowMarker {
    let (x, clamp) = compute_position_marker(
        trigger.timebase_offset,
        trigger.center_position,
        timebase.scale,
        hor_divisions,
        body.x as f64,
    );
    let (y, orientation) = match clamp {
        ClampState::None => (27.0, ArrowOrientation::Down),
        ClampState::ClampedLow => (18.0, ArrowOrientation::Left),
        ClampState::ClampedHigh => (18.0, ArrowOrientation::Right),
    };
    ArrowMarker {
        pixel_position: x,
        clamp,
        tip: Pos2::new(x as f32, y),
        orientation,
        color,
        label: 'T',
    }
}

/// Small downward triangle marking the horizontal center of the body.
pub fn trigger_center_marker(body_width: f32, color: Color32) -> Primitive {
    let x = body_width / 2.0;
    Primitive::Polygon {
        points: vec![
            Pos2::new(x + 7.0, 0.0),
            Pos2::new(x - 6.0, 0.0),
            Pos2::new(x, 7.0),
        ],
        fill: color,
    }
}

/// Small trigger arrow drawn on the header memory bar at `x`.
pub fn header_trigger_arrow(x: f32, y: f32, color: Color32) -> Vec<Primitive> {
    vec![
        Primitive::Polygon {
            points: vec![
                Pos2::new(x + 5.0, y - 10.0),
                Pos2::new(x + 5.0, y - 5.0),
                Pos2::new(x, y),
                Pos2::new(x - 4.0, y - 5.0),
                Pos2::new(x - 4.0, y - 10.0),
            ],
            fill: color,
        },
        Primitive::line(
            Pos2::new(x - 2.0, y - 8.0),
            Pos2::new(x + 2.0, y - 8.0),
            Color32::BLACK,
        ),
        Primitive::line(Pos2::new(x, y - 8.0), Pos2::new(x, y - 3.0), Color32::BLACK),
    ]
}
