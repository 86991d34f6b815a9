//! Render primitives produced by a render pass.
//!
//! A [`Scene`] is a flat list of drawing instructions. Chrome primitives use
//! absolute target coordinates; body primitives are relative to the plot body
//! origin and must be clipped to the body rectangle by the consumer.

use egui::{Align2, Color32, Pos2, Rect, Vec2};

use crate::markers::ArrowMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dotted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        from: Pos2,
        to: Pos2,
        color: Color32,
        width: f32,
        style: LineStyle,
    },
    /// Connected polyline through consecutive points.
    Path {
        points: Vec<Pos2>,
        color: Color32,
        width: f32,
    },
    Points {
        points: Vec<Pos2>,
        color: Color32,
        size: f32,
    },
    Rect {
        rect: Rect,
        fill: Option<Color32>,
        stroke: Option<Color32>,
        rounding: f32,
    },
    Polygon {
        points: Vec<Pos2>,
        fill: Color32,
    },
    /// Text anchored at `pos`; `anchor` says which corner/edge of the text
    /// box sits at `pos`.
    Text {
        pos: Pos2,
        anchor: Align2,
        text: String,
        color: Color32,
    },
    Arrow(ArrowMarker),
}

impl Primitive {
    pub fn line(from: Pos2, to: Pos2, color: Color32) -> Self {
        Primitive::Line {
            from,
            to,
            color,
            width: 1.0,
            style: LineStyle::Solid,
        }
    }

    pub fn filled(rect: Rect, fill: Color32) -> Self {
        Primitive::Rect {
            rect,
            fill: Some(fill),
            stroke: None,
            rounding: 0.0,
        }
    }

    pub fn outlined(rect: Rect, stroke: Color32) -> Self {
        Primitive::Rect {
            rect,
            fill: None,
            stroke: Some(stroke),
            rounding: 0.0,
        }
    }

    /// Text centered in `rect`.
    pub fn centered_text(rect: Rect, text: impl Into<String>, color: Color32) -> Self {
        Primitive::Text {
            pos: rect.center(),
            anchor: Align2::CENTER_CENTER,
            text: text.into(),
            color,
        }
    }

    /// Text whose left end sits on the baseline at `pos`.
    pub fn baseline_text(pos: Pos2, text: impl Into<String>, color: Color32) -> Self {
        Primitive::Text {
            pos,
            anchor: Align2::LEFT_BOTTOM,
            text: text.into(),
            color,
        }
    }

    /// The text carried by this primitive, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Primitive::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Rectangle helper taking the `(x, y, w, h)` form used throughout the layouts.
pub fn rect_xywh(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::from_min_size(Pos2::new(x, y), Vec2::new(w, h))
}

/// The plot body: its placement in the target and its local primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotBody {
    pub rect: Rect,
    pub primitives: Vec<Primitive>,
}

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub size: Vec2,
    pub background: Color32,
    pub chrome: Vec<Primitive>,
    /// `None` when the target is too small to hold a plot body.
    pub body: Option<PlotBody>,
}

impl Scene {
    pub fn new(size: Vec2, background: Color32) -> Self {
        Self {
            size,
            background,
            chrome: Vec::new(),
            body: None,
        }
    }

    /// All text strings in the scene, chrome first.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.chrome
            .iter()
            .chain(self.body.iter().flat_map(|b| b.primitives.iter()))
            .filter_map(Primitive::text)
    }

    /// All arrow markers in the plot body.
    pub fn arrows(&self) -> impl Iterator<Item = &ArrowMarker> {
        self.body
            .iter()
            .flat_map(|b| b.primitives.iter())
            .filter_map(|p| match p {
                Primitive::Arrow(a) => Some(a),
                _ => None,
            })
    }
}
