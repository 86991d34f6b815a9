use wavescope::data::decode::{DecodeMode, DecodedSymbol};
use wavescope::data::scope::{SampleBuffer, MAX_DIVISIONS};
use wavescope::data::triggers::TriggerSource;
use wavescope::{DeviceSettings, SettingsError};

fn sample_settings() -> DeviceSettings {
    let mut s = DeviceSettings::default();
    s.channels[1].display = true;
    s.channels[1].offset = -1.5;
    s.trigger.source = TriggerSource::Channel(1);
    s.decode.mode = DecodeMode::Uart;
    s.buffers = vec![SampleBuffer::new((0..64).collect()); 4];
    s.decoded.tx = vec![
        DecodedSymbol::point(3, 0x41, false),
        DecodedSymbol::point(40, 0x42, true),
    ];
    s
}

#[test]
fn snapshot_survives_json() {
    let settings = sample_settings();
    let json = settings.to_json().unwrap();
    let back = DeviceSettings::from_json(&json).unwrap();
    assert_eq!(back, settings);
}

#[test]
fn colors_are_stored_as_rgba_arrays() {
    let json = DeviceSettings::default().to_json().unwrap();
    assert!(json.contains(r#""color":[255,255,0,255]"#), "{json}");
}

#[test]
fn config_only_snapshot_drops_samples() {
    let json = sample_settings().to_json_config_only().unwrap();
    let back = DeviceSettings::from_json(&json).unwrap();
    assert!(back.buffers.is_empty());
    assert!(back.decoded.tx.is_empty());
    assert_eq!(back.channels[1].offset, -1.5);
    assert_eq!(back.trigger.source, TriggerSource::Channel(1));
}

#[test]
fn zero_scale_is_rejected() {
    let mut s = DeviceSettings::default();
    s.channels[2].scale = 0.0;
    let json = s.to_json().unwrap();
    match DeviceSettings::from_json(&json) {
        Err(SettingsError::NonPositive { field, value }) => {
            assert_eq!(field, "channels[2].scale");
            assert_eq!(value, 0.0);
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn too_many_channels_is_rejected() {
    let mut s = DeviceSettings::default();
    s.channels.push(s.channels[0].clone());
    assert!(matches!(
        s.validate(),
        Err(SettingsError::TooManyChannels(5))
    ));
}

#[test]
fn buffer_count_must_match_channels() {
    let mut s = DeviceSettings::default();
    s.buffers = vec![SampleBuffer::new(vec![0; 10]); 2];
    assert!(matches!(
        s.validate(),
        Err(SettingsError::BufferCountMismatch {
            buffers: 2,
            channels: 4
        })
    ));
}

#[test]
fn decoded_symbols_must_be_ordered_and_in_range() {
    let mut s = sample_settings();
    s.decoded.tx.reverse();
    assert!(matches!(
        s.validate(),
        Err(SettingsError::SymbolsUnordered("Tx"))
    ));

    let mut s = sample_settings();
    s.decoded.tx.push(DecodedSymbol::point(64, 0, false));
    assert!(matches!(
        s.validate(),
        Err(SettingsError::SymbolOutOfRange { position: 64, depth: 64, .. })
    ));
}

#[test]
fn trigger_source_must_exist() {
    let mut s = DeviceSettings::default();
    s.trigger.source = TriggerSource::Channel(4);
    assert!(matches!(s.validate(), Err(SettingsError::TriggerSource(4))));
}

#[test]
fn malformed_json_is_an_error() {
    let err = DeviceSettings::from_json("{\"model_name\": ").unwrap_err();
    assert!(matches!(err, SettingsError::Json(_)));
    assert!(err.to_string().starts_with("settings: JSON error"));
}

#[test]
fn division_counts_must_be_in_range() {
    let mut s = DeviceSettings::default();
    s.display.hor_divisions = 0;
    assert!(matches!(
        s.validate(),
        Err(SettingsError::Divisions {
            field: "display.hor_divisions",
            value: 0
        })
    ));

    s.display.hor_divisions = MAX_DIVISIONS;
    assert!(s.validate().is_ok());

    s.display.vert_divisions = 900_000_000;
    assert!(matches!(
        s.validate(),
        Err(SettingsError::Divisions {
            field: "display.vert_divisions",
            value: 900_000_000
        })
    ));
}
