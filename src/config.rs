//! Module: config
//!
//! Purpose: Load `config.json` and validate it before any hardware is touched.
//!
//! ```json
//! { "GPIO_PIN_OUT": 40, "DOT_DURATION": 0.5, "PIN_NUMBERING": "BOARD" }
//! ```
//!
//! A missing file means defaults. Missing keys take their default too.

use std::io::ErrorKind;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::error::MorseError;
use crate::hal::{resolve_bcm, PinNumbering};
use crate::timing::TimingConfig;

/// Default config file, relative to the working directory.
pub const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_PIN: u8 = 40;
pub const DEFAULT_DOT_DURATION: f64 = 0.5;

/// Raw configuration as read from disk.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "GPIO_PIN_OUT")]
    pub gpio_pin_out: u8,

    /// Base unit in seconds.
    #[serde(rename = "DOT_DURATION")]
    pub dot_duration: f64,

    #[serde(rename = "PIN_NUMBERING")]
    pub pin_numbering: PinNumbering,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gpio_pin_out: DEFAULT_PIN,
            dot_duration: DEFAULT_DOT_DURATION,
            pin_numbering: PinNumbering::Board,
        }
    }
}

/// Validated configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// BCM GPIO number of the LED pin.
    pub bcm_pin: u8,
    pub timing: TimingConfig,
}

impl Config {
    /// Read `path`, falling back to defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MorseError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                debug!("loading {}", path.display());
                Self::from_json(&text).map_err(|e| match e {
                    MorseError::InvalidConfiguration(detail) => {
                        MorseError::InvalidConfiguration(format!("{}: {}", path.display(), detail))
                    }
                    other => other,
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("{} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(MorseError::InvalidConfiguration(format!(
                "{}: {}",
                path.display(),
                e
            ))),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, MorseError> {
        serde_json::from_str(text).map_err(|e| MorseError::InvalidConfiguration(e.to_string()))
    }

    /// Check every value and derive the timing.
    pub fn validate(&self) -> Result<Settings, MorseError> {
        let timing = TimingConfig::derive(self.dot_duration).map_err(|e| match e {
            MorseError::InvalidConfiguration(detail) => {
                MorseError::InvalidConfiguration(format!("DOT_DURATION: {}", detail))
            }
            other => other,
        })?;
        let bcm_pin = resolve_bcm(self.gpio_pin_out, self.pin_numbering)?;

        Ok(Settings { bcm_pin, timing })
    }
}
