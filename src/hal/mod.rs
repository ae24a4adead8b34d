//! Hardware Abstraction Layer for pimorse.
//!
//! The output driver only needs the embedded-hal pin and delay traits.
//! `gpio` holds the Raspberry Pi backend, `mock` a recording fake for host tests.

pub mod gpio;
pub mod mock;
mod output;

pub use gpio::{board_to_bcm, open_output, resolve_bcm, PinNumbering, RpiOutput};
pub use mock::{MockDelay, MockPin, MockPinError};
pub use output::LedOutput;
