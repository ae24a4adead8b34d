//! # pimorse
//!
//! Blink a text message in International Morse code on one GPIO pin.
//!
//! ## Architecture
//!
//! ```text
//! text ──▶ Message ──▶ Sequencer ──▶ PulseSink
//!          (symbol)    (timing)      ├─ LedOutput<OutputPin, DelayNs>  (rppal / mock)
//!                                    └─ Vec<PulseEvent>                (timeline)
//! ```
//!
//! - Input is validated completely before the pin is touched
//! - The pin is low whenever [`Transmitter::transmit`] returns
//! - Hardware stays behind the embedded-hal traits, so everything runs on a host

pub mod cancel;
pub mod config;
pub mod error;
pub mod hal;
pub mod logging;
pub mod message;
pub mod pulse;
pub mod sequencer;
pub mod symbol;
pub mod timing;
pub mod transmitter;

pub use cancel::CancelFlag;
pub use config::{Config, Settings};
pub use error::MorseError;
pub use message::Message;
pub use pulse::{Level, PulseEvent};
pub use sequencer::{PulseSink, Sequencer};
pub use symbol::Symbol;
pub use timing::TimingConfig;
pub use transmitter::{Outcome, Transmitter};
