//! Bit-level UART decoding of a sampled line.
//!
//! A frame starts at an idle→active edge. The start bit is confirmed at its
//! center, data bits (and the optional parity bit) are sampled at their bit
//! centers and the stop bits are checked last. Parity mismatches and
//! missing stop bits keep the symbol but set its error flag. Frames running
//! past the end of the buffer are dropped.

use serde::{Deserialize, Serialize};

use crate::data::decode::DecodedSymbol;
use crate::error::{DecoderError, DecoderResult};

/// Fewer samples per bit cannot place a sample near the bit center.
pub const MIN_SAMPLES_PER_BIT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Parity {
    #[default]
    None,
    Odd,
    Even,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StopBits {
    #[default]
    One,
    OneAndHalf,
    Two,
}

impl StopBits {
    pub fn bits(&self) -> f64 {
        match self {
            StopBits::One => 1.0,
            StopBits::OneAndHalf => 1.5,
            StopBits::Two => 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BitOrder {
    #[default]
    LsbFirst,
    MsbFirst,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UartDecoderConfig {
    pub baud: f64,
    /// Data bits per frame, 5..=9.
    pub data_bits: u32,
    pub parity: Parity,
    pub stop_bits: StopBits,
    /// Idle low instead of idle high.
    pub inverted: bool,
    pub bit_order: BitOrder,
    /// Raw sample count above which the line reads as high.
    pub threshold: i16,
}

impl Default for UartDecoderConfig {
    fn default() -> Self {
        Self {
            baud: 9600.0,
            data_bits: 8,
            parity: Parity::None,
            stop_bits: StopBits::One,
            inverted: false,
            bit_order: BitOrder::LsbFirst,
            threshold: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UartDecoder {
    config: UartDecoderConfig,
    samples_per_bit: f64,
}

impl UartDecoder {
    pub fn new(config: UartDecoderConfig, samplerate: f64) -> DecoderResult<Self> {
        if !(config.baud.is_finite() && config.baud > 0.0) {
            return Err(DecoderError::BaudRate(config.baud));
        }
        if !(samplerate.is_finite() && samplerate > 0.0) {
            return Err(DecoderError::Samplerate(samplerate));
        }
        if !(5..=9).contains(&config.data_bits) {
            return Err(DecoderError::WordWidth {
                protocol: "UART",
                width: config.data_bits,
                min: 5,
                max: 9,
            });
        }
        let samples_per_bit = samplerate / config.baud;
        if samples_per_bit < MIN_SAMPLES_PER_BIT {
            return Err(DecoderError::Undersampled {
                samples_per_bit,
                min: MIN_SAMPLES_PER_BIT,
            });
        }
        Ok(Self {
            config,
            samples_per_bit,
        })
    }

    pub fn config(&self) -> &UartDecoderConfig {
        &self.config
    }

    pub fn samples_per_bit(&self) -> f64 {
        self.samples_per_bit
    }

    /// Decode every complete frame on `samples`, in ascending start order.
    pub fn decode(&self, samples: &[i16]) -> Vec<DecodedSymbol> {
        let mut out = Vec::new();
        if samples.len() < 2 {
            return out;
        }
        let parity_bits = if self.config.parity == Parity::None { 0.0 } else { 1.0 };
        let data_bits = self.config.data_bits as f64;

        let mut i = 1;
        while i < samples.len() {
            if !(self.idle(samples[i - 1]) && !self.idle(samples[i])) {
                i += 1;
                continue;
            }
            let start = i;
            // The start bit must still be active half a bit later.
            match self.level_at(samples, start, 0.5) {
                Some(false) => {}
                Some(true) => {
                    i += 1;
                    continue;
                }
                None => break,
            }

            let mut bits = Vec::with_capacity(self.config.data_bits as usize);
            let mut complete = true;
            for k in 0..self.config.data_bits {
                match self.level_at(samples, start, 1.5 + k as f64) {
                    Some(b) => bits.push(b),
                    None => {
                        complete = false;
                        break;
                    }
                }
            }
            let parity_ok = match self.config.parity {
                Parity::None => Some(true),
                parity => self
                    .level_at(samples, start, 1.5 + data_bits)
                    .map(|p| parity_matches(parity, &bits, p)),
            };
            let stop_center = 1.5 + data_bits + parity_bits;
            // With more than one stop bit the last one is checked as well.
            let last_stop = stop_center + (self.config.stop_bits.bits() - 1.0);
            let stop_ok = match self.level_at(samples, start, stop_center) {
                Some(true) if last_stop > stop_center => self.level_at(samples, start, last_stop),
                level => level,
            };
            let (Some(parity_ok), Some(stop_ok), true) = (parity_ok, stop_ok, complete) else {
                log::trace!("uart: frame at sample {start} runs past the buffer end");
                break;
            };

            let value = assemble(&bits, self.config.bit_order);
            let error = !parity_ok || !stop_ok;
            #[cfg(feature = "bit_trace")]
            log::trace!("uart: frame at {start}: bits {bits:?} value {value:#x} error {error}");
            if error {
                log::debug!(
                    "uart: frame at sample {start} has {} error",
                    if stop_ok { "parity" } else { "framing" }
                );
            }
            out.push(DecodedSymbol::point(start, value, error));

            // Resume from the middle of the last stop bit; a framing error leaves
            // the line active and the next edge search waits for it to go idle.
            i = self.sample_index(start, last_stop).max(start + 1);
        }
        out
    }

    fn idle(&self, sample: i16) -> bool {
        (sample > self.config.threshold) != self.config.inverted
    }

    /// Logic level (`true` = idle/mark) `bits` bit periods after `start`.
    fn level_at(&self, samples: &[i16], start: usize, bits: f64) -> Option<bool> {
        samples
            .get(self.sample_index(start, bits))
            .map(|&s| self.idle(s))
    }

    fn sample_index(&self, start: usize, bits: f64) -> usize {
        (start as f64 + bits * self.samples_per_bit).round() as usize
    }
}

fn parity_matches(parity: Parity, bits: &[bool], parity_bit: bool) -> bool {
    let ones = bits.iter().filter(|b| **b).count() + parity_bit as usize;
    match parity {
        Parity::None => true,
        Parity::Even => ones % 2 == 0,
        Parity::Odd => ones % 2 == 1,
    }
}

fn assemble(bits: &[bool], order: BitOrder) -> u32 {
    match order {
        BitOrder::LsbFirst => bits
            .iter()
            .enumerate()
            .fold(0, |acc, (j, &b)| acc | ((b as u32) << j)),
        BitOrder::MsbFirst => bits.iter().fold(0, |acc, &b| (acc << 1) | b as u32),
    }
}
