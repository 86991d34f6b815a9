//! Text rendering of decoded values.

use crate::data::ascii::{decode_byte, decode_word_le};
use crate::data::decode::DisplayFormat;

/// Widest word the bit-string formats handle.
pub const MAX_BIT_WIDTH: u32 = 32;

/// Format `value` for a decode cell.
///
/// `bit_width` drives the binary/line digit count; `chars` (1..=4) is the
/// number of byte groups, which sets the hex digit count and how many bytes
/// the ASCII form decodes.
///
/// ```
/// # use wavescope::data::decode::DisplayFormat;
/// # use wavescope::decoder::format::format_value;
/// assert_eq!(format_value(0x41, DisplayFormat::Hex, 8, 1), "41");
/// assert_eq!(format_value(0x0A41, DisplayFormat::Hex, 12, 2), "0A41");
/// assert_eq!(format_value(0x4241, DisplayFormat::Ascii, 16, 2), "AB");
/// ```
pub fn format_value(value: u32, format: DisplayFormat, bit_width: u32, chars: usize) -> String {
    let chars = chars.clamp(1, 4);
    match format {
        DisplayFormat::Hex => format!("{:01$X}", value, chars * 2),
        DisplayFormat::Ascii if chars == 1 => decode_byte(value as u8).to_string(),
        DisplayFormat::Ascii => decode_word_le(value, chars),
        DisplayFormat::Decimal => value.to_string(),
        DisplayFormat::Binary => to_binary_msb(value, bit_width),
        DisplayFormat::Line => to_line_lsb(value, bit_width),
    }
}

/// The low `width` bits of `value`, most significant bit first.
pub fn to_binary_msb(value: u32, width: u32) -> String {
    let width = width.min(MAX_BIT_WIDTH);
    (0..width)
        .rev()
        .map(|j| if (value >> j) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// The low `width` bits of `value`, least significant bit first.
pub fn to_line_lsb(value: u32, width: u32) -> String {
    let width = width.min(MAX_BIT_WIDTH);
    (0..width)
        .map(|j| if (value >> j) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Inverse of [`to_binary_msb`]. `None` for empty, over-long or non-binary input.
pub fn parse_binary_msb(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > MAX_BIT_WIDTH as usize {
        return None;
    }
    s.chars().try_fold(0u32, |acc, c| {
        let bit = c.to_digit(2)?;
        Some((acc << 1) | bit)
    })
}

/// Inverse of [`to_line_lsb`].
pub fn parse_line_lsb(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > MAX_BIT_WIDTH as usize {
        return None;
    }
    s.chars().enumerate().try_fold(0u32, |acc, (j, c)| {
        let bit = c.to_digit(2)?;
        Some(acc | (bit << j))
    })
}
