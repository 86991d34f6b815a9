//! Header and footer bars drawn around the plot body.
//!
//! Positions are fixed pixel offsets in target coordinates; the header is
//! the top 30 px of the target and the footer the bottom 30 px.

use egui::{Color32, Pos2, Rect};

use crate::color_scheme::CurveColors;
use crate::data::channels::{ChannelConfig, ChannelUnit, Coupling};
use crate::data::metric::format_metric;
use crate::data::scope::DeviceSettings;
use crate::data::triggers::{TriggerSlope, TriggerSource, TriggerStatus};
use crate::markers::header_trigger_arrow;
use crate::scene::{rect_xywh, Primitive};

pub const BAR_HEIGHT: f32 = 30.0;

/// Horizontal pitch of the footer channel labels.
pub const CHANNEL_LABEL_PITCH: f32 = 130.0;

const MEMORY_BAR_X: f32 = 288.0;
const MEMORY_BAR_W: f32 = 233.0;
const MEMORY_BAR_FILL: Color32 = Color32::from_rgb(64, 160, 255);

fn line(x0: f32, y0: f32, x1: f32, y1: f32, color: Color32) -> Primitive {
    Primitive::line(Pos2::new(x0, y0), Pos2::new(x1, y1), color)
}

fn label_box(rect: Rect) -> Primitive {
    Primitive::Rect {
        rect,
        fill: Some(Color32::BLACK),
        stroke: None,
        rounding: 3.0,
    }
}

/// Header bar primitives for a target `width` pixels wide.
pub fn header(settings: &DeviceSettings, width: f32, colors: &CurveColors) -> Vec<Primitive> {
    let mut out = vec![Primitive::filled(
        rect_xywh(0.0, 0.0, width, BAR_HEIGHT),
        colors.chrome_bar,
    )];

    let model = rect_xywh(5.0, 5.0, 70.0, 20.0);
    out.push(label_box(model));
    out.push(Primitive::centered_text(
        model,
        settings.model_name.clone(),
        Color32::WHITE,
    ));

    let status = rect_xywh(80.0, 5.0, 35.0, 20.0);
    out.push(label_box(status));
    let status_color = match settings.trigger.status {
        TriggerStatus::Stopped => Color32::RED,
        _ => Color32::GREEN,
    };
    out.push(Primitive::centered_text(
        status,
        settings.trigger.status.label(),
        status_color,
    ));

    let hor = rect_xywh(140.0, 5.0, 70.0, 20.0);
    out.push(label_box(hor));
    out.push(Primitive::baseline_text(
        Pos2::new(125.0, 20.0),
        "H",
        Color32::WHITE,
    ));
    out.push(Primitive::centered_text(
        hor,
        timebase_label(settings.timebase.scale),
        Color32::WHITE,
    ));

    out.push(Primitive::centered_text(
        rect_xywh(200.0, -1.0, 85.0, 20.0),
        format_metric(settings.timebase.samplerate, 0, Some("Sa/s")),
        Color32::GRAY,
    ));
    out.push(Primitive::centered_text(
        rect_xywh(200.0, 14.0, 85.0, 20.0),
        depth_label(settings.acquire_mem_depth),
        Color32::GRAY,
    ));

    out.extend(memory_bar(settings, colors.trigger));

    let delay = rect_xywh(570.0, 5.0, 85.0, 20.0);
    out.push(label_box(delay));
    out.push(Primitive::baseline_text(
        Pos2::new(555.0, 20.0),
        "D",
        colors.trigger,
    ));
    out.push(Primitive::centered_text(
        delay,
        format_metric(settings.trigger.delay(), 4, Some("s")),
        colors.trigger,
    ));

    out.extend(trigger_label(settings));
    out
}

/// Timebase text, e.g. `500µs`.
pub fn timebase_label(scale: f64) -> String {
    format_metric(scale, 1, Some("s"))
}

/// Memory depth text, `AUTO` for automatic depth.
pub fn depth_label(depth: usize) -> String {
    if depth == 0 {
        "AUTO".to_string()
    } else {
        format_metric(depth as f64, 1, Some("pts"))
    }
}

/// Horizontal header position of the small trigger arrow on the memory bar.
///
/// With automatic depth the memory duration is unknown and the arrow sits at
/// the bar center.
pub fn header_trigger_x(settings: &DeviceSettings) -> f32 {
    let duration = settings.memory_duration();
    let center = MEMORY_BAR_X + 120.0;
    if duration.is_finite() && duration > 0.0 {
        center - ((settings.trigger.timebase_offset / duration) * MEMORY_BAR_W as f64) as f32
    } else {
        center
    }
}

fn memory_bar(settings: &DeviceSettings, trigger_color: Color32) -> Vec<Primitive> {
    let mut out = vec![label_box(rect_xywh(285.0, 5.0, 240.0, 20.0))];
    let bar = rect_xywh(MEMORY_BAR_X, 16.0, MEMORY_BAR_W, 8.0);
    out.push(Primitive::filled(bar, MEMORY_BAR_FILL));

    let duration = settings.memory_duration();
    if duration.is_finite() && duration > 0.0 {
        let screen = settings.display.hor_divisions as f64 * settings.timebase.scale / duration;
        let center = settings.trigger.center_position / duration;
        let x = MEMORY_BAR_X as f64 + 119.0 + (MEMORY_BAR_W as f64 * center - 116.0 * screen);
        let window = rect_xywh(x as f32, 16.0, (MEMORY_BAR_W as f64 * screen) as f32, 8.0);
        out.push(Primitive::filled(window, Color32::BLACK));
    }
    out.push(Primitive::outlined(bar, Color32::GRAY));

    out.push(line(289.0, 20.0, 291.0, 22.0, Color32::WHITE));
    for i in 0..19 {
        let x = 291.0 + 12.0 * i as f32;
        out.push(line(x, 22.0, x + 2.0, 22.0, Color32::WHITE));
        out.push(line(x + 6.0, 18.0, x + 8.0, 18.0, Color32::WHITE));
        out.push(line(x + 3.0, 21.0, x + 5.0, 19.0, Color32::WHITE));
        out.push(line(x + 9.0, 19.0, x + 11.0, 21.0, Color32::WHITE));
    }
    out.push(line(519.0, 22.0, 520.0, 22.0, Color32::WHITE));

    out.extend(header_trigger_arrow(
        header_trigger_x(settings),
        16.0,
        trigger_color,
    ));
    out
}

fn trigger_label(settings: &DeviceSettings) -> Vec<Primitive> {
    let trigger = &settings.trigger;
    let mut out = vec![label_box(rect_xywh(685.0, 5.0, 125.0, 20.0))];
    out.push(Primitive::baseline_text(
        Pos2::new(670.0, 20.0),
        "T",
        Color32::GRAY,
    ));

    let source = trigger.source;
    let source_channel = settings.trigger_channel();
    let color = source
        .fixed_color()
        .or_else(|| source_channel.map(|c| c.color))
        .unwrap_or(Color32::GRAY);

    if source != TriggerSource::AcLine {
        let unit = source_channel.map_or(ChannelUnit::Volt, |c| c.unit);
        out.push(Primitive::centered_text(
            rect_xywh(735.0, 5.0, 85.0, 20.0),
            format_metric(trigger.level, 2, Some(unit.suffix())),
            color,
        ));
    }

    let badge = rect_xywh(725.0, 7.0, 15.0, 15.0);
    out.push(Primitive::Rect {
        rect: badge,
        fill: Some(color),
        stroke: None,
        rounding: 3.0,
    });
    out.extend(slope_glyph(trigger.slope, color));
    out.push(Primitive::centered_text(
        rect_xywh(725.0, 8.0, 15.0, 15.0),
        source.badge(),
        Color32::BLACK,
    ));
    out
}

fn slope_glyph(slope: TriggerSlope, color: Color32) -> Vec<Primitive> {
    let segments: &[[f32; 4]] = match slope {
        TriggerSlope::Rising => &[
            [705.0, 8.0, 710.0, 8.0],
            [705.0, 8.0, 705.0, 20.0],
            [700.0, 20.0, 705.0, 20.0],
            [701.0, 15.0, 705.0, 11.0],
            [709.0, 15.0, 705.0, 11.0],
        ],
        TriggerSlope::Falling => &[
            [700.0, 8.0, 705.0, 8.0],
            [705.0, 8.0, 705.0, 20.0],
            [705.0, 20.0, 710.0, 20.0],
            [701.0, 12.0, 705.0, 16.0],
            [709.0, 12.0, 705.0, 16.0],
        ],
        TriggerSlope::Either => &[
            [702.0, 8.0, 702.0, 18.0],
            [700.0, 10.0, 702.0, 8.0],
            [704.0, 10.0, 702.0, 8.0],
            [708.0, 8.0, 708.0, 18.0],
            [706.0, 16.0, 708.0, 18.0],
            [710.0, 16.0, 708.0, 18.0],
        ],
    };
    segments
        .iter()
        .map(|[x0, y0, x1, y1]| line(*x0, *y0, *x1, *y1, color))
        .collect()
}

/// Footer bar with one label per channel.
pub fn footer(
    settings: &DeviceSettings,
    width: f32,
    height: f32,
    colors: &CurveColors,
) -> Vec<Primitive> {
    let mut out = vec![Primitive::filled(
        rect_xywh(0.0, height - BAR_HEIGHT, width, BAR_HEIGHT),
        colors.chrome_bar,
    )];
    for (i, ch) in settings.channels.iter().enumerate() {
        let pos = Pos2::new(8.0 + CHANNEL_LABEL_PITCH * i as f32, height - 25.0);
        out.extend(channel_label(ch, i, pos, colors));
    }
    out
}

/// Footer scale text, e.g. `1.00V B`.
pub fn scale_label(ch: &ChannelConfig) -> String {
    let mut s = format_metric(ch.scale, 2, Some(ch.unit.suffix()));
    if ch.bandwidth_limit {
        s.push_str(" B");
    }
    s
}

fn channel_label(ch: &ChannelConfig, index: usize, pos: Pos2, colors: &CurveColors) -> Vec<Primitive> {
    let Pos2 { x, y } = pos;
    let color = if ch.display { ch.color } else { colors.dimmed };
    let mut out = vec![
        label_box(rect_xywh(x, y, 20.0, 20.0)),
        label_box(rect_xywh(x + 25.0, y, 85.0, 20.0)),
        Primitive::baseline_text(
            Pos2::new(x + 6.0, y + 15.0),
            ChannelConfig::label(index).to_string(),
            color,
        ),
    ];
    if ch.invert {
        out.push(line(x + 6.0, y + 3.0, x + 14.0, y + 3.0, color));
    }
    out.push(Primitive::centered_text(
        rect_xywh(x + 35.0, y + 1.0, 90.0, 20.0),
        scale_label(ch),
        color,
    ));
    out.extend(coupling_glyph(ch.coupling, x, y, color));
    out
}

fn coupling_glyph(coupling: Coupling, x: f32, y: f32, color: Color32) -> Vec<Primitive> {
    match coupling {
        Coupling::Ground => vec![
            line(x + 33.0, y + 6.0, x + 33.0, y + 10.0, color),
            line(x + 28.0, y + 10.0, x + 38.0, y + 10.0, color),
            line(x + 30.0, y + 12.0, x + 36.0, y + 12.0, color),
            line(x + 32.0, y + 14.0, x + 34.0, y + 14.0, color),
        ],
        Coupling::Dc => vec![
            line(x + 28.0, y + 8.0, x + 38.0, y + 8.0, color),
            line(x + 28.0, y + 12.0, x + 30.0, y + 12.0, color),
            line(x + 32.0, y + 12.0, x + 34.0, y + 12.0, color),
            line(x + 36.0, y + 12.0, x + 38.0, y + 12.0, color),
        ],
        Coupling::Ac => {
            // Two half-waves approximated by polylines.
            let wave = |cx: f32, up: bool| -> Primitive {
                let points = (0..=6)
                    .map(|k| {
                        let t = std::f32::consts::PI * k as f32 / 6.0;
                        let dy = 2.5 * t.sin();
                        Pos2::new(cx - 2.5 * t.cos(), y + 10.5 + if up { -dy } else { dy })
                    })
                    .collect();
                Primitive::Path {
                    points,
                    color,
                    width: 1.0,
                }
            };
            vec![wave(x + 32.5, true), wave(x + 37.5, false)]
        }
    }
}
