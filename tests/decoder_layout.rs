use egui::{Pos2, Rect, Vec2};
use wavescope::color_scheme::CurveColors;
use wavescope::data::decode::{DecodeMode, DecodedSymbol, DisplayFormat, LineId};
use wavescope::data::scope::{DeviceSettings, TimebaseConfig, ViewWindow};
use wavescope::decoder::format::*;
use wavescope::decoder::*;
use wavescope::scene::Primitive;

const BODY: Vec2 = Vec2::new(700.0, 400.0);

fn body() -> Rect {
    Rect::from_min_size(Pos2::ZERO, BODY)
}

/// 1 MSa/s, 1 ms/div, 14 divisions: 14000 samples across 700 px (0.05 px/sample).
fn view() -> ViewWindow {
    ViewWindow::new(0, 14, &TimebaseConfig::default(), 14_000)
}

fn uart_settings(tx: bool, rx: bool) -> DeviceSettings {
    let mut s = DeviceSettings::default();
    s.decode.mode = DecodeMode::Uart;
    s.decode.display = true;
    s.decode.position = 200.0;
    s.decode.uart.tx = tx;
    s.decode.uart.rx = rx;
    s.decoded.tx = vec![
        DecodedSymbol::point(1400, 0x41, false),
        DecodedSymbol::point(7000, 0x0A, true),
    ];
    s.decoded.rx = vec![DecodedSymbol::point(2000, 0x42, false)];
    s
}

fn spi_settings(width: u32) -> DeviceSettings {
    let mut s = DeviceSettings::default();
    s.decode.mode = DecodeMode::Spi;
    s.decode.display = true;
    s.decode.position = 100.0;
    s.decode.spi.width = width;
    s.decoded.mosi = vec![DecodedSymbol::span(1400, 2800, 0x0A41, false)];
    s.decoded.miso = vec![DecodedSymbol::span(1400, 2800, 0x4241, false)];
    s
}

#[test]
fn base_line_depends_on_model_series() {
    assert_eq!(base_line(1, 50.0, 400.0), 50.0);
    assert_eq!(base_line(2, 400.0, 400.0), 400.0);
    assert_eq!(base_line(4, 50.0, 400.0), 150.0);
    assert_eq!(base_line(6, 50.0, 400.0), 150.0);
}

#[test]
fn visible_range_includes_start_excludes_end() {
    let symbols: Vec<_> = [10, 20, 30, 40]
        .into_iter()
        .map(|p| DecodedSymbol::point(p, 0, false))
        .collect();
    let tb = TimebaseConfig {
        samplerate: 1000.0,
        scale: 0.002,
    };
    let view = ViewWindow::new(20, 10, &tb, 1000);
    assert_eq!(view.end(), 40);
    assert_eq!(visible_range(&symbols, &view), 1..3);
}

#[test]
fn visible_range_of_empty_list_is_empty() {
    assert!(visible_range(&[], &view()).is_empty());
}

#[test]
fn unsorted_symbols_fall_back_to_a_scan() {
    let symbols = vec![
        DecodedSymbol::point(300, 1, false),
        DecodedSymbol::point(20_000, 2, false),
        DecodedSymbol::point(100, 3, false),
    ];
    let visible: Vec<u32> = visible_symbols(&symbols, &view())
        .into_iter()
        .map(|s| s.value)
        .collect();
    assert_eq!(visible, vec![1, 3]);
}

#[test]
fn both_uart_lanes_are_offset_from_base() {
    let layout = layout_decoder(&uart_settings(true, true), &view(), body());
    assert_eq!(layout.lanes.len(), 2);
    let tx = layout.lane(LineId::Tx).unwrap();
    let rx = layout.lane(LineId::Rx).unwrap();
    assert_eq!(tx.baseline, 195.0);
    assert_eq!(rx.baseline, 245.0);
    assert_eq!(tx.header, "Tx[HEX]");
    assert_eq!(rx.header, "Rx[HEX]");
}

#[test]
fn single_uart_lane_sits_on_base() {
    let layout = layout_decoder(&uart_settings(false, true), &view(), body());
    assert_eq!(layout.lanes.len(), 1);
    assert_eq!(layout.lanes[0].line, LineId::Rx);
    assert_eq!(layout.lanes[0].baseline, 200.0);
}

#[test]
fn uart_cells_follow_baud_rate() {
    let layout = layout_decoder(&uart_settings(true, false), &view(), body());
    let cells = &layout.lane(LineId::Tx).unwrap().cells;
    assert_eq!(cells.len(), 2);

    // 50000 px/s / 9600 baud * 8 bits
    let expected_w = 50_000.0 / 9600.0 * 8.0;
    assert!((cells[0].rect.width() as f64 - expected_w).abs() < 1e-3);
    assert!((cells[0].rect.min.x - 70.0).abs() < 1e-3);
    assert_eq!(cells[0].rect.min.y, 200.0 - 13.0);
    assert_eq!(cells[0].rect.height(), CELL_HEIGHT);
    assert_eq!(cells[0].text, "41");
    assert!(cells[0].error_rect.is_none());

    assert_eq!(cells[1].text, "0A");
    let err = cells[1].error_rect.unwrap();
    assert!((err.min.x - cells[1].rect.max.x).abs() < 1e-3);
}

#[test]
fn ascii_format_uses_control_names() {
    let mut s = uart_settings(true, false);
    s.decode.format = DisplayFormat::Ascii;
    let layout = layout_decoder(&s, &view(), body());
    let texts: Vec<&str> = layout.lanes[0].cells.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["A", "LF"]);
    assert_eq!(layout.lanes[0].header, "Tx[ASC]");
}

#[test]
fn symbols_outside_view_are_skipped() {
    let mut s = uart_settings(true, false);
    s.decoded.tx.push(DecodedSymbol::point(14_000, 0x43, false));
    let layout = layout_decoder(&s, &view(), body());
    assert_eq!(layout.lanes[0].cells.len(), 2);
}

#[test]
fn spi_cells_span_their_samples() {
    let mut s = spi_settings(16);
    s.decode.spi.miso = false;
    let layout = layout_decoder(&s, &view(), body());
    assert_eq!(layout.lanes.len(), 1);
    let lane = &layout.lanes[0];
    assert_eq!(lane.header, "Mosi[HEX]");
    assert_eq!(lane.baseline, 100.0);
    let cell = &lane.cells[0];
    assert!((cell.rect.width() - 70.0).abs() < 1e-3);
    assert_eq!(cell.text, "0A41");
}

#[test]
fn spi_ascii_decodes_each_byte() {
    let mut s = spi_settings(16);
    s.decode.spi.miso = true;
    s.decode.format = DisplayFormat::Ascii;
    let layout = layout_decoder(&s, &view(), body());
    let miso = layout.lane(LineId::Miso).unwrap();
    assert_eq!(miso.header, "Miso[ASC]");
    assert_eq!(miso.cells[0].text, "AB");
    assert_eq!(layout.lane(LineId::Mosi).unwrap().cells[0].text, "ALF");
}

#[test]
fn decoding_off_lays_out_nothing() {
    let mut s = uart_settings(true, true);
    s.decode.mode = DecodeMode::None;
    assert!(layout_decoder(&s, &view(), body()).lanes.is_empty());
}

#[test]
fn primitives_include_headers_values_and_error_marks() {
    let layout = layout_decoder(&uart_settings(true, false), &view(), body());
    let prims = layout.primitives(700.0, &CurveColors::default());
    let texts: Vec<&str> = prims.iter().filter_map(Primitive::text).collect();
    assert!(texts.contains(&"Tx[HEX]"));
    assert!(texts.contains(&"41"));
    assert_eq!(texts.iter().filter(|t| **t == "?").count(), 1);
}

#[test]
fn bit_strings_have_exact_width() {
    assert_eq!(to_binary_msb(0b1010, 4), "1010");
    assert_eq!(to_line_lsb(0b1010, 4), "0101");
    assert_eq!(to_binary_msb(1, 9), "000000001");
    assert_eq!(to_line_lsb(u32::MAX, 32).len(), 32);
    assert_eq!(format_value(0b1010, DisplayFormat::Binary, 4, 1), "1010");
    assert_eq!(format_value(0b1010, DisplayFormat::Line, 4, 1), "0101");
}

#[test]
fn bit_strings_parse_back() {
    assert_eq!(parse_binary_msb("1010"), Some(0b1010));
    assert_eq!(parse_line_lsb("0101"), Some(0b1010));
    assert_eq!(parse_binary_msb(&to_binary_msb(0xDEAD_BEEF, 32)), Some(0xDEAD_BEEF));
    assert_eq!(parse_binary_msb(""), None);
    assert_eq!(parse_binary_msb("10x1"), None);
}

#[test]
fn hex_and_decimal_formats() {
    assert_eq!(format_value(0x0A, DisplayFormat::Hex, 8, 1), "0A");
    assert_eq!(format_value(0x1234, DisplayFormat::Hex, 16, 3), "001234");
    assert_eq!(format_value(255, DisplayFormat::Decimal, 8, 1), "255");
}
