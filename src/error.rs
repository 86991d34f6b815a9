use thiserror::Error;

pub type SettingsResult<T> = Result<T, SettingsError>;
pub type DecoderResult<T> = Result<T, DecoderError>;

/// Problems found while validating or parsing a [`crate::DeviceSettings`] snapshot.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings: {0} channels configured, at most {max} supported", max = crate::data::scope::MAX_CHANNELS)]
    TooManyChannels(usize),
    #[error("settings: {buffers} sample buffers for {channels} channels")]
    BufferCountMismatch { buffers: usize, channels: usize },
    #[error("settings: channel {channel} buffer holds {len} samples, memory depth is {depth}")]
    BufferLength {
        channel: usize,
        len: usize,
        depth: usize,
    },
    #[error("settings: {field} must be finite and positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("settings: {field} must be in 1..={max}, got {value}", max = crate::data::scope::MAX_DIVISIONS)]
    Divisions { field: &'static str, value: u32 },
    #[error("settings: trigger source channel {0} does not exist")]
    TriggerSource(u8),
    #[error("settings: {protocol} bit width {width} outside {min}..={max}")]
    BitWidth {
        protocol: &'static str,
        width: u32,
        min: u32,
        max: u32,
    },
    #[error("settings: {line} symbol at sample {position} outside 0..{depth}")]
    SymbolOutOfRange {
        line: &'static str,
        position: usize,
        depth: usize,
    },
    #[error("settings: {0} symbols are not in ascending sample order")]
    SymbolsUnordered(&'static str),
    #[error("settings: JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Invalid bit-level decoder configuration or input lines.
#[derive(Error, Debug, PartialEq)]
pub enum DecoderError {
    #[error("decoder: baud rate must be positive, got {0}")]
    BaudRate(f64),
    #[error("decoder: samplerate must be positive, got {0}")]
    Samplerate(f64),
    #[error("decoder: {samples_per_bit:.2} samples per bit, at least {min} required")]
    Undersampled { samples_per_bit: f64, min: f64 },
    #[error("decoder: {protocol} word width {width} outside {min}..={max}")]
    WordWidth {
        protocol: &'static str,
        width: u32,
        min: u32,
        max: u32,
    },
    #[error("decoder: line lengths differ ({0} vs {1} samples)")]
    LineLength(usize, usize),
    #[error("decoder: no data line supplied")]
    NoDataLine,
}
