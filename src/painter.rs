//! Paint a [`Scene`] with an [`egui::Painter`].

use egui::epaint::CornerRadius;
use egui::{FontId, Painter, Pos2, Rect, Shape, Stroke, StrokeKind, Vec2};

use crate::markers::ArrowMarker;
use crate::scene::{LineStyle, Primitive, Scene};

/// Paint `scene` into `target`; scene coordinates are relative to
/// `target.min`. Body primitives are clipped to the body rectangle.
pub fn paint_scene(painter: &Painter, target: Rect, scene: &Scene, font_size: f32) {
    let font = FontId::proportional(font_size);
    painter.rect_filled(target, CornerRadius::ZERO, scene.background);

    let origin = target.min.to_vec2();
    for p in &scene.chrome {
        paint_primitive(painter, p, origin, &font);
    }

    if let Some(body) = &scene.body {
        let rect = body.rect.translate(origin);
        let clipped = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
        let body_origin = rect.min.to_vec2();
        for p in &body.primitives {
            match p {
                // Clamped arrows sit just outside the body.
                Primitive::Arrow(a) => paint_arrow(painter, a, body_origin, &font),
                _ => paint_primitive(&clipped, p, body_origin, &font),
            }
        }
    }
}

fn paint_primitive(painter: &Painter, p: &Primitive, offset: Vec2, font: &FontId) {
    match p {
        Primitive::Line {
            from,
            to,
            color,
            width,
            style,
        } => {
            let points = [*from + offset, *to + offset];
            let stroke = Stroke::new(*width, *color);
            match style {
                LineStyle::Solid => {
                    painter.line_segment(points, stroke);
                }
                LineStyle::Dotted => {
                    painter.extend(Shape::dashed_line(&points, stroke, 1.0, 2.0));
                }
            }
        }
        Primitive::Path {
            points,
            color,
            width,
        } => {
            let points: Vec<Pos2> = points.iter().map(|p| *p + offset).collect();
            painter.add(Shape::line(points, Stroke::new(*width, *color)));
        }
        Primitive::Points {
            points,
            color,
            size,
        } => {
            for p in points {
                painter.circle_filled(*p + offset, size / 2.0, *color);
            }
        }
        Primitive::Rect {
            rect,
            fill,
            stroke,
            rounding,
        } => {
            let rect = rect.translate(offset);
            let radius = CornerRadius::same(rounding.clamp(0.0, 255.0) as u8);
            if let Some(fill) = fill {
                painter.rect_filled(rect, radius, *fill);
            }
            if let Some(stroke) = stroke {
                painter.rect_stroke(rect, radius, Stroke::new(1.0, *stroke), StrokeKind::Inside);
            }
        }
        Primitive::Polygon { points, fill } => {
            let points = points.iter().map(|p| *p + offset).collect();
            painter.add(Shape::convex_polygon(points, *fill, Stroke::NONE));
        }
        Primitive::Text {
            pos,
            anchor,
            text,
            color,
        } => {
            painter.text(*pos + offset, *anchor, text, font.clone(), *color);
        }
        Primitive::Arrow(a) => paint_arrow(painter, a, offset, font),
    }
}

fn paint_arrow(painter: &Painter, a: &ArrowMarker, offset: Vec2, font: &FontId) {
    let points = a.outline().iter().map(|p| *p + offset).collect();
    painter.add(Shape::convex_polygon(points, a.color, Stroke::NONE));
    painter.text(
        a.label_pos() + offset,
        egui::Align2::LEFT_BOTTOM,
        a.label,
        font.clone(),
        egui::Color32::BLACK,
    );
}
