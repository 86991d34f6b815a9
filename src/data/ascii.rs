//! Byte → display string translation for ASCII decode cells.

/// Mnemonics for the control range `0..=32`.
const CONTROL_NAMES: [&str; 33] = [
    "NULL", "SOH", "STX", "ETX", "EOT", "ENQ", "ACK", "BEL", "BS", "HT", "LF", "VT", "FF", "CR",
    "SO", "SI", "DLE", "DC1", "DC2", "DC3", "DC4", "NAK", "SYN", "ETB", "CAN", "EM", "SUB", "ESC",
    "FS", "GS", "RS", "US", "SP",
];

/// Printable characters `33..=126`, indexed by `byte - 33`.
const PRINTABLE: &str =
    "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// Translate one byte into its display form.
///
/// Printable ASCII maps to itself, `0..=32` and `127` map to their control
/// mnemonics and everything else (the upper half of the byte range) to `"."`.
///
/// ```
/// # use wavescope::data::ascii::decode_byte;
/// assert_eq!(decode_byte(b'A'), "A");
/// assert_eq!(decode_byte(13), "CR");
/// assert_eq!(decode_byte(0xC8), ".");
/// ```
pub fn decode_byte(b: u8) -> &'static str {
    match b {
        0..=32 => CONTROL_NAMES[b as usize],
        33..=126 => {
            let i = (b - 33) as usize;
            &PRINTABLE[i..i + 1]
        }
        127 => "DEL",
        _ => ".",
    }
}

/// Decode `count` bytes of `value`, least-significant byte first, and
/// concatenate their display forms.
pub fn decode_word_le(value: u32, count: usize) -> String {
    (0..count.min(4))
        .map(|k| decode_byte((value >> (k * 8)) as u8))
        .collect()
}
