use wavescope::data::channels::ChannelConfig;
use wavescope::data::scope::{SampleBuffer, TimebaseConfig, TraceMode, ViewWindow};
use wavescope::mapper::*;
use wavescope::scene::Primitive;

fn params(mode: TraceMode) -> TraceParams {
    TraceParams {
        curve_width: 500.0,
        curve_height: 400.0,
        vert_divisions: 8,
        mode,
        line_width: 1.0,
    }
}

fn shown_channel() -> ChannelConfig {
    ChannelConfig {
        display: true,
        ..ChannelConfig::new(0)
    }
}

#[test]
fn window_start_maps_to_zero() {
    let tb = TimebaseConfig {
        samplerate: 1000.0,
        scale: 0.1,
    };
    let view = ViewWindow::new(100, 10, &tb, 10_000);
    assert_eq!(sample_to_x(100, &view, 500.0), 0.0);
    assert_eq!(sample_to_x(1100, &view, 500.0), 500.0);
}

#[test]
fn sample_to_x_is_monotonic_over_window() {
    let tb = TimebaseConfig {
        samplerate: 1_000_000.0,
        scale: 0.000_05,
    };
    let view = ViewWindow::new(37, 14, &tb, 5_000);
    let mut last = f64::NEG_INFINITY;
    for i in view.sample_start..view.end() {
        let x = sample_to_x(i, &view, 813.0);
        assert!(x >= last, "x({i}) = {x} < {last}");
        last = x;
    }
}

#[test]
fn window_is_limited_by_buffer_end() {
    let tb = TimebaseConfig {
        samplerate: 1000.0,
        scale: 0.1,
    };
    let view = ViewWindow::new(500, 10, &tb, 1200);
    assert_eq!(view.sample_count, 700);
    assert_eq!(view.end(), 1200);
    assert!(view.contains(500));
    assert!(!view.contains(1200));
}

#[test]
fn density_switches_at_half_width() {
    assert_eq!(TraceDensity::for_view(249, 500.0), TraceDensity::PerSample);
    assert_eq!(TraceDensity::for_view(250, 500.0), TraceDensity::Continuous);
}

#[test]
fn vertical_mapping_centers_zero() {
    let v = VerticalMapper::new(&shown_channel(), 8, 400.0);
    assert!((v.y(0) - 200.0).abs() < 1e-9);
    assert!((v.y(50) - 100.0).abs() < 1e-9);
    assert!((v.y(-50) - 300.0).abs() < 1e-9);
}

#[test]
fn vertical_mapping_applies_origin() {
    let ch = ChannelConfig {
        y_origin: 25.0,
        ..shown_channel()
    };
    let v = VerticalMapper::new(&ch, 8, 400.0);
    assert!((v.y(0) - 150.0).abs() < 1e-9);
    assert!((v.y(-25) - 200.0).abs() < 1e-9);
}

#[test]
fn sparse_view_draws_held_levels_with_risers() {
    let tb = TimebaseConfig {
        samplerate: 1000.0,
        scale: 0.01,
    };
    let buf = SampleBuffer::new((0..64).map(|i| (i % 4) as i16 * 10).collect());
    let view = ViewWindow::new(0, 10, &tb, buf.len());
    let prims = build_trace(&buf, &shown_channel(), &view, &params(TraceMode::Vectors));
    // one level per sample plus one riser between neighbours
    assert_eq!(prims.len(), 64 + 63);
    assert!(prims.iter().all(|p| matches!(p, Primitive::Line { .. })));
}

#[test]
fn dense_view_draws_one_path_through_next_sample() {
    let tb = TimebaseConfig {
        samplerate: 1000.0,
        scale: 0.1,
    };
    let buf = SampleBuffer::new(vec![0; 2000]);
    let view = ViewWindow::new(0, 10, &tb, buf.len());
    let prims = build_trace(&buf, &shown_channel(), &view, &params(TraceMode::Vectors));
    assert_eq!(prims.len(), 1);
    match &prims[0] {
        Primitive::Path { points, .. } => {
            assert_eq!(points.len(), 1001);
            assert_eq!(points[1000].x, 500.0);
        }
        other => panic!("expected a path, got {other:?}"),
    }
}

#[test]
fn dots_mode_draws_one_point_per_sample() {
    let tb = TimebaseConfig {
        samplerate: 1000.0,
        scale: 0.1,
    };
    let buf = SampleBuffer::new(vec![5; 2000]);
    let view = ViewWindow::new(300, 10, &tb, buf.len());
    let prims = build_trace(&buf, &shown_channel(), &view, &params(TraceMode::Dots));
    match &prims[..] {
        [Primitive::Points { points, .. }] => assert_eq!(points.len(), 1000),
        other => panic!("expected one point set, got {} primitives", other.len()),
    }
}

#[test]
fn degenerate_scale_draws_nothing() {
    let tb = TimebaseConfig {
        samplerate: 1000.0,
        scale: 0.1,
    };
    let buf = SampleBuffer::new(vec![0; 2000]);
    let view = ViewWindow::new(0, 10, &tb, buf.len());
    let ch = ChannelConfig {
        scale: 0.0,
        ..shown_channel()
    };
    assert!(build_trace(&buf, &ch, &view, &params(TraceMode::Vectors)).is_empty());
}
