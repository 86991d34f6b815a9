//! Bit-level SPI decoding from clock, data and optional chip-select lines.

use serde::{Deserialize, Serialize};

use crate::data::decode::DecodedSymbol;
use crate::decoder::uart::BitOrder;
use crate::error::{DecoderError, DecoderResult};

/// Clock edge on which data lines are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockEdge {
    #[default]
    Rising,
    Falling,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpiDecoderConfig {
    /// Bits per word, 1..=32.
    pub width: u32,
    pub edge: ClockEdge,
    pub bit_order: BitOrder,
    /// Raw sample count above which a line reads as high.
    pub threshold: i16,
    pub cs_active_low: bool,
}

impl Default for SpiDecoderConfig {
    fn default() -> Self {
        Self {
            width: 8,
            edge: ClockEdge::Rising,
            bit_order: BitOrder::MsbFirst,
            threshold: 0,
            cs_active_low: true,
        }
    }
}

/// Sample buffers of one SPI bus. All given lines must have the same length.
#[derive(Debug, Clone, Copy)]
pub struct SpiLines<'a> {
    pub clock: &'a [i16],
    pub mosi: Option<&'a [i16]>,
    pub miso: Option<&'a [i16]>,
    pub chip_select: Option<&'a [i16]>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpiDecoded {
    pub mosi: Vec<DecodedSymbol>,
    pub miso: Vec<DecodedSymbol>,
}

#[derive(Debug, Clone)]
pub struct SpiDecoder {
    config: SpiDecoderConfig,
}

/// Word being shifted in on one data line.
#[derive(Default)]
struct Shift {
    value: u32,
}

impl SpiDecoder {
    pub fn new(config: SpiDecoderConfig) -> DecoderResult<Self> {
        if !(1..=32).contains(&config.width) {
            return Err(DecoderError::WordWidth {
                protocol: "SPI",
                width: config.width,
                min: 1,
                max: 32,
            });
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &SpiDecoderConfig {
        &self.config
    }

    /// Decode all complete words on the bus.
    ///
    /// A word's span runs from its first sampling edge to the edge that
    /// completes it. Releasing chip select discards a partial word, as does
    /// reaching the end of the buffers.
    pub fn decode(&self, lines: &SpiLines<'_>) -> DecoderResult<SpiDecoded> {
        if lines.mosi.is_none() && lines.miso.is_none() {
            return Err(DecoderError::NoDataLine);
        }
        let len = lines.clock.len();
        for other in [lines.mosi, lines.miso, lines.chip_select].into_iter().flatten() {
            if other.len() != len {
                return Err(DecoderError::LineLength(len, other.len()));
            }
        }

        let mut out = SpiDecoded::default();
        let (mut mosi, mut miso) = (Shift::default(), Shift::default());
        let mut bits = 0u32;
        let mut word_start = 0usize;

        for i in 1..len {
            if !self.selected(lines.chip_select, i) {
                if bits > 0 {
                    log::trace!("spi: chip select released after {bits} bits at {i}");
                }
                bits = 0;
                continue;
            }
            if !self.sampling_edge(lines.clock[i - 1], lines.clock[i]) {
                continue;
            }
            if bits == 0 {
                word_start = i;
                mosi = Shift::default();
                miso = Shift::default();
            }
            if let Some(line) = lines.mosi {
                self.shift_in(&mut mosi, bits, self.high(line[i]));
            }
            if let Some(line) = lines.miso {
                self.shift_in(&mut miso, bits, self.high(line[i]));
            }
            bits += 1;
            #[cfg(feature = "bit_trace")]
            log::trace!("spi: bit {bits} at {i}");

            if bits == self.config.width {
                if lines.mosi.is_some() {
                    out.mosi
                        .push(DecodedSymbol::span(word_start, i, mosi.value, false));
                }
                if lines.miso.is_some() {
                    out.miso
                        .push(DecodedSymbol::span(word_start, i, miso.value, false));
                }
                bits = 0;
            }
        }
        if bits > 0 {
            log::trace!("spi: dropping {bits}-bit partial word at buffer end");
        }
        Ok(out)
    }

    fn high(&self, sample: i16) -> bool {
        sample > self.config.threshold
    }

    fn sampling_edge(&self, prev: i16, cur: i16) -> bool {
        let (prev, cur) = (self.high(prev), self.high(cur));
        match self.config.edge {
            ClockEdge::Rising => !prev && cur,
            ClockEdge::Falling => prev && !cur,
        }
    }

    fn selected(&self, chip_select: Option<&[i16]>, i: usize) -> bool {
        match chip_select {
            Some(cs) => self.high(cs[i]) != self.config.cs_active_low,
            None => true,
        }
    }

    fn shift_in(&self, shift: &mut Shift, index: u32, bit: bool) {
        match self.config.bit_order {
            BitOrder::MsbFirst => shift.value = (shift.value << 1) | bit as u32,
            BitOrder::LsbFirst => shift.value |= (bit as u32) << index,
        }
    }
}
