//! Config file loading tests

use std::fs;
use std::path::PathBuf;

use pimorse::config::{Config, DEFAULT_PIN};
use pimorse::hal::PinNumbering;
use pimorse::MorseError;

fn write_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pimorse-{}-{}.json", name, std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_file() {
    let path = write_config("full", r#"{ "GPIO_PIN_OUT": 11, "DOT_DURATION": 0.2 }"#);

    let settings = Config::load(&path).unwrap().validate().unwrap();
    fs::remove_file(&path).unwrap();

    // Header pin 11 is GPIO 17
    assert_eq!(settings.bcm_pin, 17);
    assert_eq!(settings.timing.dot().as_millis(), 200);
}

#[test]
fn test_load_malformed_file_names_path() {
    let path = write_config("broken", "not json");

    let err = Config::load(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    match err {
        MorseError::InvalidConfiguration(detail) => assert!(detail.contains("pimorse-broken")),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_negative_duration_fails_validation() {
    let path = write_config("negative", r#"{ "DOT_DURATION": -0.5 }"#);

    let config = Config::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.gpio_pin_out, DEFAULT_PIN);
    assert_eq!(config.pin_numbering, PinNumbering::Board);
    assert!(matches!(config.validate(), Err(MorseError::InvalidConfiguration(_))));
}
