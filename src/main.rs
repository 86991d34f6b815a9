//! Demo viewer: a synthetic UART transfer on channel 1 and a sine on channel 2.

use wavescope::data::decode::{DecodeMode, DisplayFormat};
use wavescope::data::scope::SampleBuffer;
use wavescope::decoder::decode_uart_into;
use wavescope::decoder::uart::{UartDecoder, UartDecoderConfig};
use wavescope::{run_wave_view, DeviceSettings, WaveViewConfig};

const SAMPLERATE: f64 = 1_000_000.0;
const BAUD: f64 = 19_200.0;
const MEM_DEPTH: usize = 60_000;
const MESSAGE: &[u8] = b"Hello, scope!\r\n";

/// 8N1 idle-high line, raw counts of +/-50.
fn uart_waveform(bytes: &[u8], len: usize) -> Vec<i16> {
    let spb = SAMPLERATE / BAUD;
    let mut bits = vec![true; 20];
    for &b in bytes {
        bits.push(false);
        bits.extend((0..8).map(|j| (b >> j) & 1 == 1));
        bits.extend([true, true]);
    }
    (0..len)
        .map(|i| {
            let bit = (i as f64 / spb) as usize;
            if bits.get(bit).copied().unwrap_or(true) {
                50
            } else {
                -50
            }
        })
        .collect()
}

fn sine(len: usize, freq: f64, amplitude: f64) -> Vec<i16> {
    (0..len)
        .map(|i| {
            let t = i as f64 / SAMPLERATE;
            (amplitude * (2.0 * std::f64::consts::PI * freq * t).sin()) as i16
        })
        .collect()
}

fn demo_settings() -> Result<DeviceSettings, Box<dyn std::error::Error>> {
    let mut settings = DeviceSettings {
        connected: true,
        acquire_mem_depth: MEM_DEPTH,
        ..Default::default()
    };
    settings.timebase.samplerate = SAMPLERATE;
    settings.timebase.scale = 5e-4;
    settings.channels[0].display = true;
    settings.channels[0].offset = 1.0;
    settings.channels[1].display = true;
    settings.channels[1].offset = -2.0;
    settings.buffers = vec![
        SampleBuffer::new(uart_waveform(MESSAGE, MEM_DEPTH)),
        SampleBuffer::new(sine(MEM_DEPTH, 2_000.0, 40.0)),
        SampleBuffer::new(vec![0; MEM_DEPTH]),
        SampleBuffer::new(vec![0; MEM_DEPTH]),
    ];

    settings.decode.mode = DecodeMode::Uart;
    settings.decode.format = DisplayFormat::Ascii;
    settings.decode.display = true;
    settings.decode.position = 100.0;
    settings.decode.uart.baud = BAUD;

    let decoder = UartDecoder::new(
        UartDecoderConfig {
            baud: BAUD,
            ..Default::default()
        },
        SAMPLERATE,
    )?;
    decode_uart_into(&mut settings, &decoder, Some(0), None);
    settings.validate()?;
    Ok(settings)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let settings = demo_settings()?;
    log::info!(
        "decoded {} UART symbols from {} samples",
        settings.decoded.tx.len(),
        settings.buffer_len()
    );
    run_wave_view(Some(settings), WaveViewConfig::default())?;
    Ok(())
}
