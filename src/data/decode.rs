//! Protocol decode settings and decoded symbol records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DecodeMode {
    #[default]
    None,
    Uart,
    Spi,
}

/// How decoded values are rendered inside their cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayFormat {
    #[default]
    Hex,
    Ascii,
    Decimal,
    /// MSB-first bit string.
    Binary,
    /// LSB-first bit string, i.e. the order bits appear on the wire.
    Line,
}

impl DisplayFormat {
    /// Short tag used in lane headers, e.g. `Tx[HEX]`.
    pub fn tag(&self) -> &'static str {
        match self {
            DisplayFormat::Hex => "HEX",
            DisplayFormat::Ascii => "ASC",
            DisplayFormat::Decimal => "DEC",
            DisplayFormat::Binary => "BIN",
            DisplayFormat::Line => "LINE",
        }
    }
}

/// One logical decode line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineId {
    Tx,
    Rx,
    Mosi,
    Miso,
}

impl LineId {
    pub fn name(&self) -> &'static str {
        match self {
            LineId::Tx => "Tx",
            LineId::Rx => "Rx",
            LineId::Mosi => "Mosi",
            LineId::Miso => "Miso",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UartSettings {
    pub baud: f64,
    /// Data bits per symbol.
    pub width: u32,
    pub tx: bool,
    pub rx: bool,
}

impl Default for UartSettings {
    fn default() -> Self {
        Self {
            baud: 9600.0,
            width: 8,
            tx: true,
            rx: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpiSettings {
    /// Bits per word, 1..=32.
    pub width: u32,
    pub mosi: bool,
    pub miso: bool,
}

impl Default for SpiSettings {
    fn default() -> Self {
        Self {
            width: 8,
            mosi: true,
            miso: false,
        }
    }
}

impl SpiSettings {
    /// Number of byte groups a word spans: `ceil(width / 8)` within `1..=4`.
    pub fn chars(&self) -> usize {
        (self.width.div_ceil(8)).clamp(1, 4) as usize
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecodeConfig {
    pub mode: DecodeMode,
    pub format: DisplayFormat,
    /// Whether decoder lanes are drawn at all.
    pub display: bool,
    /// Vertical lane position in display units (0..=400).
    pub position: f64,
    pub uart: UartSettings,
    pub spi: SpiSettings,
}

impl DecodeConfig {
    /// Whether `line` is enabled under the current mode.
    pub fn line_enabled(&self, line: LineId) -> bool {
        match (self.mode, line) {
            (DecodeMode::Uart, LineId::Tx) => self.uart.tx,
            (DecodeMode::Uart, LineId::Rx) => self.uart.rx,
            (DecodeMode::Spi, LineId::Mosi) => self.spi.mosi,
            (DecodeMode::Spi, LineId::Miso) => self.spi.miso,
            _ => false,
        }
    }

    /// Bit width of the active protocol.
    pub fn bit_width(&self) -> u32 {
        match self.mode {
            DecodeMode::Uart => self.uart.width,
            DecodeMode::Spi => self.spi.width,
            DecodeMode::None => 0,
        }
    }
}

/// One decoded protocol unit.
///
/// UART symbols are point events (`end` is `None`); SPI symbols carry the
/// sample index of the edge that completed the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedSymbol {
    pub start: usize,
    pub end: Option<usize>,
    pub value: u32,
    pub error: bool,
}

impl DecodedSymbol {
    pub fn point(start: usize, value: u32, error: bool) -> Self {
        Self {
            start,
            end: None,
            value,
            error,
        }
    }

    pub fn span(start: usize, end: usize, value: u32, error: bool) -> Self {
        Self {
            start,
            end: Some(end),
            value,
            error,
        }
    }

    /// Last sample index covered by the symbol.
    pub fn last_sample(&self) -> usize {
        self.end.unwrap_or(self.start)
    }
}

/// Symbol lists recorded per line, each in ascending sample order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecodedLines {
    pub tx: Vec<DecodedSymbol>,
    pub rx: Vec<DecodedSymbol>,
    pub mosi: Vec<DecodedSymbol>,
    pub miso: Vec<DecodedSymbol>,
}

impl DecodedLines {
    pub fn line(&self, line: LineId) -> &[DecodedSymbol] {
        match line {
            LineId::Tx => &self.tx,
            LineId::Rx => &self.rx,
            LineId::Mosi => &self.mosi,
            LineId::Miso => &self.miso,
        }
    }

    pub fn line_mut(&mut self, line: LineId) -> &mut Vec<DecodedSymbol> {
        match line {
            LineId::Tx => &mut self.tx,
            LineId::Rx => &mut self.rx,
            LineId::Mosi => &mut self.mosi,
            LineId::Miso => &mut self.miso,
        }
    }

    pub fn clear(&mut self) {
        self.tx.clear();
        self.rx.clear();
        self.mosi.clear();
        self.miso.clear();
    }
}
