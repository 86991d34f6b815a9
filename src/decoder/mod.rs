//! Decoder lane layout.
//!
//! Turns the decoded symbol lists of the enabled lines into lane baselines,
//! cell boxes, formatted values and error indicators, all in plot-body
//! coordinates. Nothing is cached between frames.

pub mod format;
pub mod spi;
pub mod uart;

use std::ops::Range;

use egui::{Color32, Pos2, Rect};

use crate::color_scheme::CurveColors;
use crate::data::decode::{DecodeMode, DecodedSymbol, DisplayFormat, LineId};
use crate::data::scope::{DeviceSettings, ViewWindow};
use crate::error::DecoderResult;
use crate::mapper::SampleMapper;
use crate::scene::{rect_xywh, Primitive};

use self::format::format_value;
use self::spi::{SpiDecoder, SpiLines};
use self::uart::UartDecoder;

/// Height of a symbol cell, centered on its lane.
pub const CELL_HEIGHT: f32 = 26.0;

/// Offset of the second lane when both lines of a protocol are enabled.
const LANE_GAP_ABOVE: f64 = 5.0;
const LANE_GAP_BELOW: f64 = 45.0;

/// Geometry and text of one visible symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolCell {
    pub symbol: DecodedSymbol,
    /// Box drawn around the value.
    pub rect: Rect,
    /// Area the value text is centered in.
    pub text_rect: Rect,
    pub text: String,
    /// Where the "?" goes for symbols with the error flag set.
    pub error_rect: Option<Rect>,
}

/// One horizontal decoder lane.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeLane {
    pub line: LineId,
    /// Lane center row in body coordinates.
    pub baseline: f64,
    /// Header such as `Tx[HEX]`.
    pub header: String,
    pub cells: Vec<SymbolCell>,
}

impl DecodeLane {
    /// Area of the header label, above the lane on the left edge.
    pub fn header_rect(&self) -> Rect {
        let width = match self.line {
            LineId::Tx | LineId::Rx => 65.0,
            LineId::Mosi | LineId::Miso => 80.0,
        };
        rect_xywh(5.0, self.baseline as f32 - 35.0, width, 30.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecoderLayout {
    pub lanes: Vec<DecodeLane>,
}

impl DecoderLayout {
    pub fn lane(&self, line: LineId) -> Option<&DecodeLane> {
        self.lanes.iter().find(|l| l.line == line)
    }

    /// Flatten the layout into body primitives: baselines first, then cells,
    /// then all text on top.
    pub fn primitives(&self, body_width: f32, colors: &CurveColors) -> Vec<Primitive> {
        let mut out = Vec::new();
        for lane in &self.lanes {
            let y = lane.baseline as f32;
            out.push(Primitive::line(
                Pos2::new(0.0, y),
                Pos2::new(body_width, y),
                colors.decode_lane,
            ));
        }
        for cell in self.lanes.iter().flat_map(|l| &l.cells) {
            out.push(Primitive::Rect {
                rect: cell.rect,
                fill: Some(Color32::BLACK),
                stroke: Some(colors.decode_lane),
                rounding: 0.0,
            });
        }
        for lane in &self.lanes {
            out.push(Primitive::centered_text(
                lane.header_rect(),
                lane.header.clone(),
                Color32::WHITE,
            ));
            for cell in &lane.cells {
                out.push(Primitive::centered_text(
                    cell.text_rect,
                    cell.text.clone(),
                    Color32::WHITE,
                ));
                if let Some(r) = cell.error_rect {
                    out.push(Primitive::centered_text(r, "?", colors.error));
                }
            }
        }
        out
    }
}

/// Row of the primary decoder lane for a body of height `body_height`.
///
/// `position` runs over `0..=400` display units. Series 4 and 6 count it
/// upward from the vertical center, the others downward from the top edge.
pub fn base_line(model_series: u32, position: f64, body_height: f64) -> f64 {
    let unit = body_height / 400.0;
    match model_series {
        4 | 6 => body_height / 2.0 - unit * position,
        _ => unit * position,
    }
}

/// Index range of the symbols whose start lies in `view`.
///
/// Spans are matched by their start sample only: an SPI word that starts
/// before the window is not included even if it runs into it.
/// `symbols` must be in ascending start order; the range is found by binary
/// search.
pub fn visible_range(symbols: &[DecodedSymbol], view: &ViewWindow) -> Range<usize> {
    let lo = symbols.partition_point(|s| s.start < view.sample_start);
    let hi = lo + symbols[lo..].partition_point(|s| s.start < view.end());
    lo..hi
}

/// Symbols whose start lies in `view`, in list order.
///
/// Sorted lists use [`visible_range`]; anything else falls back to a linear
/// containment scan.
pub fn visible_symbols<'a>(
    symbols: &'a [DecodedSymbol],
    view: &ViewWindow,
) -> Vec<&'a DecodedSymbol> {
    if symbols.is_sorted_by_key(|s| s.start) {
        symbols[visible_range(symbols, view)].iter().collect()
    } else {
        log::debug!("decoder: symbol list out of order, scanning linearly");
        symbols.iter().filter(|s| view.contains(s.start)).collect()
    }
}

/// Lay out the decoder lanes of the active protocol.
///
/// Returns an empty layout when decoding is off or the view has no usable
/// horizontal scale.
pub fn layout_decoder(settings: &DeviceSettings, view: &ViewWindow, body: Rect) -> DecoderLayout {
    let decode = &settings.decode;
    let (first, second) = match decode.mode {
        DecodeMode::None => return DecoderLayout::default(),
        DecodeMode::Uart => (LineId::Tx, LineId::Rx),
        DecodeMode::Spi => (LineId::Mosi, LineId::Miso),
    };
    if !view.is_valid() {
        return DecoderLayout::default();
    }

    let dw = body.width() as f64;
    let dh = body.height() as f64;
    let mapper = SampleMapper::new(view, dw);
    let base = base_line(settings.model_series, decode.position, dh);

    let rows = match (decode.line_enabled(first), decode.line_enabled(second)) {
        (true, true) => vec![
            (first, base - LANE_GAP_ABOVE),
            (second, base + LANE_GAP_BELOW),
        ],
        (true, false) => vec![(first, base)],
        (false, true) => vec![(second, base)],
        (false, false) => Vec::new(),
    };

    let bit_width = decode.bit_width();
    let (chars, uart_cell) = match decode.mode {
        DecodeMode::Spi => (decode.spi.chars(), 0.0),
        _ => {
            let pixel_per_bit =
                (dw / settings.display.hor_divisions as f64 / settings.timebase.scale)
                    / decode.uart.baud;
            (1, pixel_per_bit * decode.uart.width as f64)
        }
    };

    let lanes = rows
        .into_iter()
        .map(|(line, baseline)| {
            let cells = visible_symbols(settings.decoded.line(line), view)
                .into_iter()
                .map(|s| {
                    let cell_w = match s.end {
                        Some(end) => mapper.width(end.saturating_sub(s.start) as f64),
                        None => uart_cell,
                    };
                    let cell_w = if cell_w.is_finite() { cell_w.max(0.0) } else { 0.0 };
                    symbol_cell(s, &mapper, baseline, cell_w as f32, decode.format, bit_width, chars)
                })
                .collect();
            DecodeLane {
                line,
                baseline,
                header: format!("{}[{}]", line.name(), decode.format.tag()),
                cells,
            }
        })
        .collect();
    DecoderLayout { lanes }
}

fn symbol_cell(
    symbol: &DecodedSymbol,
    mapper: &SampleMapper,
    baseline: f64,
    cell_w: f32,
    format: DisplayFormat,
    bit_width: u32,
    chars: usize,
) -> SymbolCell {
    let x = mapper.x(symbol.start) as f32;
    let top = baseline as f32 - CELL_HEIGHT / 2.0;
    SymbolCell {
        symbol: *symbol,
        rect: rect_xywh(x, top, cell_w, CELL_HEIGHT),
        text_rect: rect_xywh(x, top, cell_w, 30.0),
        text: format_value(symbol.value, format, bit_width, chars),
        error_rect: symbol
            .error
            .then(|| rect_xywh(x + cell_w, top, 25.0, 25.0)),
    }
}

/// Decode the UART lines enabled in `settings` from the given channels and
/// store the result in `settings.decoded`.
///
/// Disabled lines are cleared.
pub fn decode_uart_into(
    settings: &mut DeviceSettings,
    decoder: &UartDecoder,
    tx_channel: Option<usize>,
    rx_channel: Option<usize>,
) {
    for (line, channel) in [(LineId::Tx, tx_channel), (LineId::Rx, rx_channel)] {
        let symbols = match channel.and_then(|c| settings.buffers.get(c)) {
            Some(buf) if settings.decode.line_enabled(line) => decoder.decode(buf.as_slice()),
            _ => Vec::new(),
        };
        log::debug!("decoder: {} symbols on {}", symbols.len(), line.name());
        *settings.decoded.line_mut(line) = symbols;
    }
}

/// Decode the SPI lines enabled in `settings` and store the result in
/// `settings.decoded`.
pub fn decode_spi_into(
    settings: &mut DeviceSettings,
    decoder: &SpiDecoder,
    lines: SpiLines<'_>,
) -> DecoderResult<()> {
    let lines = SpiLines {
        mosi: lines.mosi.filter(|_| settings.decode.line_enabled(LineId::Mosi)),
        miso: lines.miso.filter(|_| settings.decode.line_enabled(LineId::Miso)),
        ..lines
    };
    if lines.mosi.is_none() && lines.miso.is_none() {
        settings.decoded.mosi.clear();
        settings.decoded.miso.clear();
        return Ok(());
    }
    let decoded = decoder.decode(&lines)?;
    log::debug!(
        "decoder: {} mosi / {} miso words",
        decoded.mosi.len(),
        decoded.miso.len()
    );
    settings.decoded.mosi = decoded.mosi;
    settings.decoded.miso = decoded.miso;
    Ok(())
}
