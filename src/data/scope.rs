//! Device settings snapshot consumed by a render pass.
//!
//! The aggregate is split into [`ChannelConfig`], [`TriggerConfig`],
//! [`DecodeConfig`], [`TimebaseConfig`] and [`DisplayConfig`]; components take
//! only the parts they need by reference.

use serde::{Deserialize, Serialize};

use crate::data::channels::ChannelConfig;
use crate::data::decode::{DecodeConfig, DecodeMode, DecodedLines, DecodedSymbol, LineId};
use crate::data::triggers::{TriggerConfig, TriggerSource};
use crate::error::{SettingsError, SettingsResult};

/// Maximum number of physical channels.
pub const MAX_CHANNELS: usize = 4;

/// Upper limit for the horizontal and vertical division counts.
pub const MAX_DIVISIONS: u32 = 100;

/// Buffers at or below this length are not drawn as traces.
pub const MIN_TRACE_SAMPLES: usize = 32;

/// Raw acquisition samples of one channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleBuffer {
    samples: Vec<i16>,
}

impl SampleBuffer {
    pub fn new(samples: Vec<i16>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<i16> {
        self.samples.get(index).copied()
    }

    pub fn as_slice(&self) -> &[i16] {
        &self.samples
    }
}

impl From<Vec<i16>> for SampleBuffer {
    fn from(samples: Vec<i16>) -> Self {
        Self::new(samples)
    }
}

/// Horizontal acquisition settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimebaseConfig {
    /// Samples per second.
    pub samplerate: f64,
    /// Seconds per horizontal division.
    pub scale: f64,
}

impl Default for TimebaseConfig {
    fn default() -> Self {
        Self {
            samplerate: 1_000_000.0,
            scale: 0.001,
        }
    }
}

impl TimebaseConfig {
    pub fn samples_per_division(&self) -> f64 {
        self.samplerate * self.scale
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GridMode {
    None,
    /// Only the horizontal and vertical center lines.
    Center,
    #[default]
    Full,
}

/// How samples are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TraceMode {
    #[default]
    Vectors,
    Dots,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub hor_divisions: u32,
    pub vert_divisions: u32,
    pub grid: GridMode,
    pub trace_mode: TraceMode,
    /// FFT shown in split view; the graticule collapses to the center cross.
    pub fft_split: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hor_divisions: 14,
            vert_divisions: 8,
            grid: GridMode::Full,
            trace_mode: TraceMode::Vectors,
            fft_split: false,
        }
    }
}

/// The visible sub-range of the sample buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    pub sample_start: usize,
    /// Samples actually available in view (limited by the buffer end).
    pub sample_count: usize,
    /// Samples spanning the full curve width (`hordivisions * samples_per_division`).
    pub samples_per_screen: f64,
}

impl ViewWindow {
    /// Compute the window starting at `sample_start` for the given timebase.
    pub fn new(
        sample_start: usize,
        hor_divisions: u32,
        timebase: &TimebaseConfig,
        buffer_len: usize,
    ) -> Self {
        let samples_per_screen = hor_divisions as f64 * timebase.samples_per_division();
        let wanted = if samples_per_screen.is_finite() && samples_per_screen > 0.0 {
            samples_per_screen as usize
        } else {
            0
        };
        let end = sample_start.saturating_add(wanted).min(buffer_len);
        Self {
            sample_start,
            sample_count: end.saturating_sub(sample_start),
            samples_per_screen,
        }
    }

    /// One past the last visible sample.
    pub fn end(&self) -> usize {
        self.sample_start + self.sample_count
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.sample_start && index < self.end()
    }

    /// Whether the window maps to a usable horizontal scale.
    pub fn is_valid(&self) -> bool {
        self.samples_per_screen.is_finite() && self.samples_per_screen > 0.0
    }
}

/// Everything a render pass reads about the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSettings {
    pub model_name: String,
    /// Model series; series 4 and 6 place decoder lanes relative to the center.
    pub model_series: u32,
    pub connected: bool,
    pub channels: Vec<ChannelConfig>,
    pub trigger: TriggerConfig,
    pub decode: DecodeConfig,
    #[serde(default)]
    pub decoded: DecodedLines,
    pub timebase: TimebaseConfig,
    pub display: DisplayConfig,
    /// Acquisition memory depth in samples; 0 means "auto".
    pub acquire_mem_depth: usize,
    /// First sample shown at the left edge.
    pub view_start: usize,
    #[serde(default)]
    pub buffers: Vec<SampleBuffer>,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            model_name: "DS1054".to_string(),
            model_series: 1,
            connected: false,
            channels: (0..MAX_CHANNELS).map(ChannelConfig::new).collect(),
            trigger: TriggerConfig::default(),
            decode: DecodeConfig::default(),
            decoded: DecodedLines::default(),
            timebase: TimebaseConfig::default(),
            display: DisplayConfig::default(),
            acquire_mem_depth: 0,
            view_start: 0,
            buffers: Vec::new(),
        }
    }
}

impl DeviceSettings {
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Length of the wave buffers (all channels share one length).
    pub fn buffer_len(&self) -> usize {
        self.buffers.iter().map(SampleBuffer::len).max().unwrap_or(0)
    }

    /// Duration of the acquisition memory in seconds.
    pub fn memory_duration(&self) -> f64 {
        self.acquire_mem_depth as f64 / self.timebase.samplerate
    }

    pub fn view_window(&self) -> ViewWindow {
        ViewWindow::new(
            self.view_start,
            self.display.hor_divisions,
            &self.timebase,
            self.buffer_len(),
        )
    }

    pub fn trigger_channel(&self) -> Option<&ChannelConfig> {
        self.trigger
            .source
            .channel()
            .and_then(|c| self.channels.get(c))
    }

    /// Check the snapshot for values the render pass can only skip over.
    ///
    /// Rendering never requires this; it is meant for settings coming from
    /// outside (e.g. a JSON snapshot) before they are handed to a renderer.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.channels.len() > MAX_CHANNELS {
            return Err(SettingsError::TooManyChannels(self.channels.len()));
        }
        if !self.buffers.is_empty() && self.buffers.len() != self.channels.len() {
            return Err(SettingsError::BufferCountMismatch {
                buffers: self.buffers.len(),
                channels: self.channels.len(),
            });
        }
        if self.acquire_mem_depth > 0 {
            for (channel, buf) in self.buffers.iter().enumerate() {
                if buf.len() > self.acquire_mem_depth {
                    return Err(SettingsError::BufferLength {
                        channel,
                        len: buf.len(),
                        depth: self.acquire_mem_depth,
                    });
                }
            }
        }
        positive("timebase.samplerate", self.timebase.samplerate)?;
        positive("timebase.scale", self.timebase.scale)?;
        divisions("display.hor_divisions", self.display.hor_divisions)?;
        divisions("display.vert_divisions", self.display.vert_divisions)?;
        for (i, ch) in self.channels.iter().enumerate() {
            positive(CHANNEL_SCALE_FIELDS[i], ch.scale)?;
        }
        if let TriggerSource::Channel(c) = self.trigger.source {
            if c as usize >= self.channels.len() {
                return Err(SettingsError::TriggerSource(c));
            }
        }
        self.validate_decode()
    }

    fn validate_decode(&self) -> SettingsResult<()> {
        match self.decode.mode {
            DecodeMode::None => return Ok(()),
            DecodeMode::Uart => {
                positive("decode.uart.baud", self.decode.uart.baud)?;
                bit_width("UART", self.decode.uart.width, 5, 9)?;
            }
            DecodeMode::Spi => bit_width("SPI", self.decode.spi.width, 1, 32)?,
        }
        let depth = if self.acquire_mem_depth > 0 {
            self.acquire_mem_depth
        } else {
            self.buffer_len()
        };
        for line in [LineId::Tx, LineId::Rx, LineId::Mosi, LineId::Miso] {
            check_symbols(line, self.decoded.line(line), depth)?;
        }
        Ok(())
    }
}

const CHANNEL_SCALE_FIELDS: [&str; MAX_CHANNELS] = [
    "channels[0].scale",
    "channels[1].scale",
    "channels[2].scale",
    "channels[3].scale",
];

fn positive(field: &'static str, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::NonPositive { field, value })
    }
}

fn divisions(field: &'static str, value: u32) -> SettingsResult<()> {
    if (1..=MAX_DIVISIONS).contains(&value) {
        Ok(())
    } else {
        Err(SettingsError::Divisions { field, value })
    }
}

fn bit_width(protocol: &'static str, width: u32, min: u32, max: u32) -> SettingsResult<()> {
    if (min..=max).contains(&width) {
        Ok(())
    } else {
        Err(SettingsError::BitWidth {
            protocol,
            width,
            min,
            max,
        })
    }
}

fn check_symbols(line: LineId, symbols: &[DecodedSymbol], depth: usize) -> SettingsResult<()> {
    if let Some(bad) = symbols.iter().find(|s| s.last_sample() >= depth) {
        return Err(SettingsError::SymbolOutOfRange {
            line: line.name(),
            position: bad.last_sample(),
            depth,
        });
    }
    if symbols.windows(2).any(|w| w[0].start > w[1].start) {
        return Err(SettingsError::SymbolsUnordered(line.name()));
    }
    Ok(())
}
