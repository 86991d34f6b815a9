use wavescope::data::decode::{DecodeMode, DecodedSymbol};
use wavescope::data::scope::DeviceSettings;
use wavescope::decoder::decode_spi_into;
use wavescope::decoder::spi::*;
use wavescope::decoder::uart::BitOrder;
use wavescope::DecoderError;

const HALF: usize = 5;
const HIGH: i16 = 100;
const LOW: i16 = -100;
const LEAD: usize = 10;

/// Mode-0 bus: clock idles low, data changes while the clock is low and is
/// sampled on the rising edge halfway through each bit period.
#[derive(Default)]
struct Bus {
    clock: Vec<i16>,
    mosi: Vec<i16>,
    miso: Vec<i16>,
    cs: Vec<i16>,
    /// Sample index of each rising clock edge.
    edges: Vec<usize>,
}

impl Bus {
    fn new() -> Self {
        let mut bus = Bus::default();
        bus.idle(LEAD, true);
        bus
    }

    fn level(b: bool) -> i16 {
        if b {
            HIGH
        } else {
            LOW
        }
    }

    fn idle(&mut self, samples: usize, selected: bool) {
        for _ in 0..samples {
            self.clock.push(LOW);
            self.mosi.push(LOW);
            self.miso.push(LOW);
            self.cs.push(Self::level(!selected));
        }
    }

    fn bit(&mut self, mosi: bool, miso: bool, selected: bool) {
        for k in 0..2 * HALF {
            if k == HALF {
                self.edges.push(self.clock.len());
            }
            self.clock.push(Self::level(k >= HALF));
            self.mosi.push(Self::level(mosi));
            self.miso.push(Self::level(miso));
            self.cs.push(Self::level(!selected));
        }
    }

    /// Clock out `width` bits of both words, MSB first.
    fn word(&mut self, mosi: u32, miso: u32, width: u32) {
        for j in (0..width).rev() {
            self.bit((mosi >> j) & 1 == 1, (miso >> j) & 1 == 1, true);
        }
    }

    fn lines(&self) -> SpiLines<'_> {
        SpiLines {
            clock: &self.clock,
            mosi: Some(self.mosi.as_slice()),
            miso: Some(self.miso.as_slice()),
            chip_select: None,
        }
    }
}

fn decoder(width: u32) -> SpiDecoder {
    SpiDecoder::new(SpiDecoderConfig {
        width,
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn mode0_transfer_decodes_both_lines() {
    let mut bus = Bus::new();
    bus.word(0xA5, 0x5A, 8);
    bus.word(0x3C, 0xC3, 8);
    bus.idle(20, true);

    let out = decoder(8).decode(&bus.lines()).unwrap();
    let e = &bus.edges;
    assert_eq!(
        out.mosi,
        vec![
            DecodedSymbol::span(e[0], e[7], 0xA5, false),
            DecodedSymbol::span(e[8], e[15], 0x3C, false),
        ]
    );
    assert_eq!(
        out.miso,
        vec![
            DecodedSymbol::span(e[0], e[7], 0x5A, false),
            DecodedSymbol::span(e[8], e[15], 0xC3, false),
        ]
    );
}

#[test]
fn spans_start_and_end_on_sampling_edges() {
    let mut bus = Bus::new();
    bus.word(0x1, 0x0, 4);
    let out = decoder(4).decode(&bus.lines()).unwrap();
    assert_eq!(out.mosi.len(), 1);
    assert_eq!(out.mosi[0].start, LEAD + HALF);
    assert_eq!(out.mosi[0].end, Some(LEAD + HALF + 3 * 2 * HALF));
}

#[test]
fn wide_words_and_lsb_first() {
    let mut bus = Bus::new();
    bus.word(0x0001_0203, 0, 24);
    let msb = decoder(24).decode(&bus.lines()).unwrap();
    assert_eq!(msb.mosi[0].value, 0x0001_0203);

    let mut bus = Bus::new();
    // 0x80 sent MSB first reads as 0x01 when the device shifts LSB first
    bus.word(0x80, 0, 8);
    let lsb = SpiDecoder::new(SpiDecoderConfig {
        width: 8,
        bit_order: BitOrder::LsbFirst,
        ..Default::default()
    })
    .unwrap()
    .decode(&bus.lines())
    .unwrap();
    assert_eq!(lsb.mosi[0].value, 0x01);
}

#[test]
fn falling_edge_sampling() {
    let mut bus = Bus::new();
    bus.word(0xF0, 0, 8);
    bus.idle(10, true);
    let out = SpiDecoder::new(SpiDecoderConfig {
        edge: ClockEdge::Falling,
        ..Default::default()
    })
    .unwrap()
    .decode(&bus.lines())
    .unwrap();
    // falling edges sit at the end of each bit period, where the next bit is
    // already on the line: the word shifts by one bit
    assert_eq!(out.mosi.len(), 1);
    assert_eq!(out.mosi[0].value, 0xE0);
}

#[test]
fn partial_word_at_buffer_end_is_dropped() {
    let mut bus = Bus::new();
    bus.word(0x11, 0x22, 8);
    bus.word(0x7, 0x7, 3);
    let out = decoder(8).decode(&bus.lines()).unwrap();
    assert_eq!(out.mosi.len(), 1);
    assert_eq!(out.miso.len(), 1);
}

#[test]
fn chip_select_release_discards_partial_word() {
    let mut bus = Bus::new();
    for j in (4..8).rev() {
        bus.bit((0xFF >> j) & 1 == 1, false, true);
    }
    // clock keeps running while deselected
    for _ in 0..4 {
        bus.bit(true, true, false);
    }
    bus.word(0x42, 0x24, 8);

    let lines = SpiLines {
        chip_select: Some(bus.cs.as_slice()),
        ..bus.lines()
    };
    let out = decoder(8).decode(&lines).unwrap();
    assert_eq!(out.mosi.len(), 1);
    assert_eq!(out.mosi[0].value, 0x42);
    assert_eq!(out.miso[0].value, 0x24);
    assert_eq!(out.mosi[0].start, bus.edges[8]);
}

#[test]
fn rejects_bad_input() {
    let bus = Bus::new();
    let no_data = SpiLines {
        mosi: None,
        miso: None,
        ..bus.lines()
    };
    assert_eq!(decoder(8).decode(&no_data), Err(DecoderError::NoDataLine));

    let short = [LOW; 3];
    let uneven = SpiLines {
        miso: Some(&short[..]),
        ..bus.lines()
    };
    assert_eq!(
        decoder(8).decode(&uneven),
        Err(DecoderError::LineLength(LEAD, 3))
    );

    let zero = SpiDecoder::new(SpiDecoderConfig {
        width: 0,
        ..Default::default()
    });
    assert!(matches!(zero, Err(DecoderError::WordWidth { .. })));
}

#[test]
fn decode_into_skips_disabled_lines() {
    let mut bus = Bus::new();
    bus.word(0x99, 0x66, 8);

    let mut settings = DeviceSettings::default();
    settings.decode.mode = DecodeMode::Spi;
    settings.decode.spi.mosi = true;
    settings.decode.spi.miso = false;
    settings.decoded.miso = vec![DecodedSymbol::span(0, 1, 7, false)];

    decode_spi_into(&mut settings, &decoder(8), bus.lines()).unwrap();
    assert_eq!(settings.decoded.mosi.len(), 1);
    assert_eq!(settings.decoded.mosi[0].value, 0x99);
    assert!(settings.decoded.miso.is_empty());
}
