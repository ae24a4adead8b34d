//! GPIO HAL for the LED output on a Raspberry Pi.

use log::info;
use rppal::gpio::{Gpio, OutputPin};
use rppal::hal::Delay;
use serde::Deserialize;

use crate::cancel::CancelFlag;
use crate::error::MorseError;
use crate::hal::LedOutput;

/// Output driver backed by the Pi's GPIO.
pub type RpiOutput = LedOutput<OutputPin, Delay>;

/// How `GPIO_PIN_OUT` is numbered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PinNumbering {
    /// Physical position on the 40-pin header.
    #[default]
    Board,
    /// Broadcom GPIO number.
    Bcm,
}

/// 40-pin header position -> BCM GPIO. Zero marks power and ground pins.
const BOARD_TO_BCM: [u8; 41] = [
    0, // unused
    0, 0, // 1: 3V3, 2: 5V
    2, 0, // 3, 4: 5V
    3, 0, // 5, 6: GND
    4, 14, // 7, 8
    0, 15, // 9: GND, 10
    17, 18, // 11, 12
    27, 0, // 13, 14: GND
    22, 23, // 15, 16
    0, 24, // 17: 3V3, 18
    10, 0, // 19, 20: GND
    9, 25, // 21, 22
    11, 8, // 23, 24
    0, 7, // 25: GND, 26
    0, 1, // 27: ID_SD, 28: ID_SC
    5, 0, // 29, 30: GND
    6, 12, // 31, 32
    13, 0, // 33, 34: GND
    19, 16, // 35, 36
    26, 20, // 37, 38
    0, 21, // 39: GND, 40
];

/// Translate a physical header pin to its BCM GPIO number.
///
/// Returns `None` for power, ground and out-of-range pins. Pins 27 and 28
/// (the HAT ID EEPROM bus) map to GPIO 0 and 1.
pub fn board_to_bcm(board_pin: u8) -> Option<u8> {
    match board_pin {
        27 => Some(0),
        28 => Some(1),
        p => BOARD_TO_BCM
            .get(p as usize)
            .copied()
            .filter(|bcm| *bcm != 0),
    }
}

/// BCM number of the configured pin.
pub fn resolve_bcm(pin: u8, numbering: PinNumbering) -> Result<u8, MorseError> {
    match numbering {
        PinNumbering::Board => board_to_bcm(pin).ok_or_else(|| {
            MorseError::InvalidConfiguration(format!("header pin {} is not a GPIO", pin))
        }),
        PinNumbering::Bcm if pin <= 27 => Ok(pin),
        PinNumbering::Bcm => Err(MorseError::InvalidConfiguration(format!(
            "BCM GPIO {} does not exist",
            pin
        ))),
    }
}

/// Claim `bcm` as an output, driven low right away.
///
/// The pin returns to its previous mode when the driver is dropped.
pub fn open_output(bcm: u8, cancel: CancelFlag) -> Result<RpiOutput, MorseError> {
    let gpio = Gpio::new().map_err(|e| MorseError::Output(format!("GPIO unavailable: {}", e)))?;
    let mut pin = gpio
        .get(bcm)
        .map_err(|e| MorseError::Output(format!("GPIO {}: {}", bcm, e)))?
        .into_output_low();
    pin.set_reset_on_drop(true);

    info!("GPIO {} ready", bcm);
    Ok(LedOutput::new(pin, Delay::new(), cancel))
}
