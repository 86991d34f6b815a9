use wavescope::data::ascii::{decode_byte, decode_word_le};

#[test]
fn printable_bytes_map_to_themselves() {
    assert_eq!(decode_byte(65), "A");
    assert_eq!(decode_byte(b'z'), "z");
    assert_eq!(decode_byte(b'!'), "!");
    assert_eq!(decode_byte(b'~'), "~");
}

#[test]
fn control_bytes_map_to_mnemonics() {
    assert_eq!(decode_byte(0), "NULL");
    assert_eq!(decode_byte(10), "LF");
    assert_eq!(decode_byte(13), "CR");
    assert_eq!(decode_byte(27), "ESC");
    assert_eq!(decode_byte(32), "SP");
    assert_eq!(decode_byte(127), "DEL");
}

#[test]
fn upper_half_maps_to_dot() {
    assert_eq!(decode_byte(128), ".");
    assert_eq!(decode_byte(200), ".");
    assert_eq!(decode_byte(255), ".");
}

#[test]
fn every_byte_has_a_display_form() {
    for b in 0..=u8::MAX {
        assert!(!decode_byte(b).is_empty(), "byte {b} has no display form");
    }
}

#[test]
fn words_decode_least_significant_byte_first() {
    assert_eq!(decode_word_le(0x4241, 2), "AB");
    assert_eq!(decode_word_le(0x0A0D_4948, 4), "HICRLF");
    assert_eq!(decode_word_le(0x41, 1), "A");
}
