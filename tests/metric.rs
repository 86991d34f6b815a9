use wavescope::data::metric::*;

#[test]
fn zero_and_non_finite_render_as_plain_zero() {
    assert_eq!(format_metric(0.0, 2, Some("V")), "0");
    assert_eq!(format_metric(-0.0, 0, None), "0");
    assert_eq!(format_metric(f64::NAN, 1, Some("s")), "0");
    assert_eq!(format_metric(f64::INFINITY, 4, Some("Hz")), "0");
}

#[test]
fn megahertz_without_decimals() {
    assert_eq!(format_metric(1_000_000.0, 0, Some("Hz")), "1MHz");
}

#[test]
fn microseconds_with_four_decimals() {
    assert_eq!(format_metric(0.000001, 4, Some("s")), "1.0000µs");
}

#[test]
fn fixed_decimal_modes() {
    assert_eq!(format_metric(0.0025, 2, Some("V")), "2.50mV");
    assert_eq!(format_metric(2.0, 3, Some("V")), "2.000V");
    assert_eq!(format_metric(12_600.0, 0, Some("pts")), "13kpts");
}

#[test]
fn compact_mode_strips_trailing_zeros() {
    assert_eq!(format_metric(1500.0, 1, None), "1.5k");
    assert_eq!(format_metric(2000.0, 1, Some("pts")), "2kpts");
    assert_eq!(format_metric(0.0005, 1, Some("s")), "500µs");
}

#[test]
fn rounding_carries_into_next_prefix() {
    assert_eq!(format_metric(999.996, 2, Some("Hz")), "1.00kHz");
}

#[test]
fn negative_values_keep_sign() {
    assert_eq!(format_metric(-0.0025, 2, Some("V")), "-2.50mV");
    assert_eq!(format_metric(-1.5, 1, Some("s")), "-1.5s");
}

#[test]
fn precision_above_four_is_clamped() {
    assert_eq!(format_metric(1.0, 9, None), "1.0000");
}

#[test]
fn remove_trailing_zeros_keeps_suffix() {
    assert_eq!(remove_trailing_zeros("1.500"), "1.5");
    assert_eq!(remove_trailing_zeros("2.000ms"), "2ms");
    assert_eq!(remove_trailing_zeros("100"), "100");
    assert_eq!(remove_trailing_zeros("100kHz"), "100kHz");
}

#[test]
fn formatter_applies_precision_and_unit() {
    let f = MetricFormatter::new(2, "V");
    assert_eq!(f.format(1.0), "1.00V");
    assert_eq!(f.format(0.05), "50.00mV");
    assert_eq!(MetricFormatter::default().format(3.0), "3.00");
}
