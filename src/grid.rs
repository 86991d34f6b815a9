//! Graticule: border, division grid and edge rulers.

use egui::{Color32, Pos2};

use crate::data::scope::{DisplayConfig, GridMode, MAX_DIVISIONS};
use crate::scene::{rect_xywh, LineStyle, Primitive};

/// Ruler ticks per division.
pub const TICKS_PER_DIVISION: u32 = 5;

fn line(x0: f32, y0: f32, x1: f32, y1: f32, color: Color32) -> Primitive {
    Primitive::line(Pos2::new(x0, y0), Pos2::new(x1, y1), color)
}

fn dotted(x0: f32, y0: f32, x1: f32, y1: f32, color: Color32, width: f32) -> Primitive {
    Primitive::Line {
        from: Pos2::new(x0, y0),
        to: Pos2::new(x1, y1),
        color,
        width,
        style: LineStyle::Dotted,
    }
}

/// Raster primitives for a body of `w` × `h` pixels, in body coordinates.
///
/// Division counts above [`MAX_DIVISIONS`] are drawn as [`MAX_DIVISIONS`].
pub fn raster(display: &DisplayConfig, w: f32, h: f32, color: Color32, width: f32) -> Vec<Primitive> {
    let mut out = vec![Primitive::outlined(rect_xywh(0.0, 0.0, w - 1.0, h - 1.0), color)];

    if display.fft_split {
        out.push(line(w / 2.0, h - 1.0, w / 2.0, 0.0, color));
        out.push(line(0.0, h / 2.0, w - 1.0, h / 2.0, color));
        return out;
    }

    let hor_divisions = display.hor_divisions.min(MAX_DIVISIONS);
    let vert_divisions = display.vert_divisions.min(MAX_DIVISIONS);

    match display.grid {
        GridMode::None => {}
        GridMode::Center => {
            out.push(dotted(w / 2.0, h - 1.0, w / 2.0, 0.0, color, width));
            out.push(dotted(0.0, h / 2.0, w - 1.0, h / 2.0, color, width));
        }
        GridMode::Full => {
            let step = w / hor_divisions as f32;
            for i in 1..hor_divisions {
                let x = step * i as f32;
                out.push(dotted(x, h - 1.0, x, 0.0, color, width));
            }
            let step = h / vert_divisions as f32;
            for i in 1..vert_divisions {
                let y = step * i as f32;
                out.push(dotted(0.0, y, w - 1.0, y, color, width));
            }
        }
    }

    let axis_ticks = display.grid != GridMode::None;

    let ticks = TICKS_PER_DIVISION * hor_divisions;
    let step = w / ticks as f32;
    for i in 1..ticks {
        let x = step * i as f32;
        if axis_ticks {
            out.push(line(x, h / 2.0 + 2.0, x, h / 2.0 - 2.0, color));
        }
        let len = if i % TICKS_PER_DIVISION == 0 { 8.0 } else { 4.0 };
        out.push(line(x, h - 1.0, x, h - 1.0 - len, color));
        out.push(line(x, 0.0, x, len, color));
    }

    let ticks = TICKS_PER_DIVISION * vert_divisions;
    let step = h / ticks as f32;
    for i in 1..ticks {
        let y = step * i as f32;
        if axis_ticks {
            out.push(line(w / 2.0 + 2.0, y, w / 2.0 - 2.0, y, color));
        }
        let len = if i % TICKS_PER_DIVISION == 0 { 8.0 } else { 4.0 };
        out.push(line(w - 1.0, y, w - 1.0 - len, y, color));
        out.push(line(0.0, y, len, y, color));
    }
    out
}
