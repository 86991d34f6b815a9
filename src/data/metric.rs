//! Metric (SI-prefix) value formatting for header, footer and trigger labels.
//!
//! The main entry point is [`format_metric`]. Callers that format the same kind
//! of quantity repeatedly (e.g. every channel scale label) can keep a
//! [`MetricFormatter`] around instead.

// ─────────────────────────────────────────────────────────────────────────────
// Prefix table
// ─────────────────────────────────────────────────────────────────────────────

/// SI prefixes from pico to tera, paired with their exponent (power of 1000).
const PREFIXES: [(&str, i32); 9] = [
    ("p", -4),
    ("n", -3),
    ("µ", -2),
    ("m", -1),
    ("", 0),
    ("k", 1),
    ("M", 2),
    ("G", 3),
    ("T", 4),
];

/// Index of the empty prefix in [`PREFIXES`].
const UNIT_PREFIX_IDX: usize = 4;

/// Highest precision mode accepted; larger values are clamped.
pub const MAX_PRECISION: u8 = 4;

// ─────────────────────────────────────────────────────────────────────────────
// Free functions
// ─────────────────────────────────────────────────────────────────────────────

/// Format `value` with an SI prefix so that the scaled magnitude falls in
/// `[1, 1000)` where possible.
///
/// `precision` is the number of fractional digits (0..=4). Mode `1` is the
/// "compact" mode: one decimal, then trailing zeros are stripped. The optional
/// `unit` is appended directly after the prefix.
///
/// Zero, `NaN` and infinities all render as `"0"`.
///
/// ```
/// # use wavescope::data::metric::format_metric;
/// assert_eq!(format_metric(1_000_000.0, 0, Some("Hz")), "1MHz");
/// assert_eq!(format_metric(0.0025, 2, Some("V")), "2.50mV");
/// assert_eq!(format_metric(0.5, 1, Some("s")), "500ms");
/// ```
pub fn format_metric(value: f64, precision: u8, unit: Option<&str>) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    let decimals = precision.min(MAX_PRECISION) as usize;

    let negative = value < 0.0;
    let magnitude = value.abs();

    let mut idx = prefix_index(magnitude);
    let mut scaled = magnitude / 1000f64.powi(PREFIXES[idx].1);

    // 999.96 at two decimals must become "1.00k", not "1000.00".
    if round_to(scaled, decimals) >= 1000.0 && idx + 1 < PREFIXES.len() {
        idx += 1;
        scaled /= 1000.0;
    }

    let mut number = format!("{:.*}", decimals, scaled);
    if precision == 1 {
        number = remove_trailing_zeros(&number);
    }

    let mut out = String::with_capacity(number.len() + 4);
    if negative && number.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&number);
    out.push_str(PREFIXES[idx].0);
    if let Some(u) = unit {
        out.push_str(u);
    }
    out
}

/// Strip trailing zeros (and a then-dangling decimal point) from the numeric
/// part of `s`. Any non-numeric suffix (SI prefix, unit) is preserved.
///
/// ```
/// # use wavescope::data::metric::remove_trailing_zeros;
/// assert_eq!(remove_trailing_zeros("1.500"), "1.5");
/// assert_eq!(remove_trailing_zeros("2.000ms"), "2ms");
/// assert_eq!(remove_trailing_zeros("100"), "100");
/// ```
pub fn remove_trailing_zeros(s: &str) -> String {
    let split = s
        .char_indices()
        .find(|&(_, c)| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let (number, suffix) = s.split_at(split);
    if !number.contains('.') {
        return s.to_string();
    }
    let trimmed = number.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}", trimmed, suffix)
}

fn prefix_index(magnitude: f64) -> usize {
    let exp = (magnitude.log10() / 3.0).floor() as i32;
    let idx = UNIT_PREFIX_IDX as i32 + exp;
    idx.clamp(0, PREFIXES.len() as i32 - 1) as usize
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

// ─────────────────────────────────────────────────────────────────────────────
// MetricFormatter
// ─────────────────────────────────────────────────────────────────────────────

/// A reusable metric formatter with a fixed precision mode and unit.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricFormatter {
    /// Precision mode, see [`format_metric`].
    pub precision: u8,
    /// Optional unit suffix appended after the SI prefix (e.g. `"V"`).
    pub unit: Option<String>,
}

impl Default for MetricFormatter {
    fn default() -> Self {
        Self {
            precision: 2,
            unit: None,
        }
    }
}

impl MetricFormatter {
    pub fn new(precision: u8, unit: impl Into<String>) -> Self {
        Self {
            precision,
            unit: Some(unit.into()),
        }
    }

    /// Format `value` with this formatter's precision and unit.
    pub fn format(&self, value: f64) -> String {
        format_metric(value, self.precision, self.unit.as_deref())
    }
}
