//! Pulse sink that drives a real (or mocked) output pin.

use core::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{debug, trace};

use crate::cancel::CancelFlag;
use crate::error::MorseError;
use crate::pulse::{Level, PulseEvent};
use crate::sequencer::PulseSink;

/// Longest single sleep. Waits are split into slices this long so an
/// interrupt is noticed quickly even during a long inter-word gap.
const WAIT_SLICE_NS: u64 = 20_000_000;

/// LED on a digital output pin, with blocking waits.
pub struct LedOutput<P, D> {
    pin: P,
    delay: D,
    cancel: CancelFlag,
    /// Last level written; `None` until the first write.
    level: Option<Level>,
}

impl<P: OutputPin, D: DelayNs> LedOutput<P, D> {
    pub fn new(pin: P, delay: D, cancel: CancelFlag) -> Self {
        Self {
            pin,
            delay,
            cancel,
            level: None,
        }
    }

    /// Current level as last written.
    pub fn level(&self) -> Option<Level> {
        self.level
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Drive the pin low regardless of the cached level.
    pub fn force_low(&mut self) -> Result<(), MorseError> {
        self.level = None;
        self.write(Level::Off)
    }

    fn write(&mut self, level: Level) -> Result<(), MorseError> {
        if self.level == Some(level) {
            return Ok(());
        }

        let result = match level {
            Level::On => self.pin.set_high(),
            Level::Off => self.pin.set_low(),
        };
        result.map_err(|e| MorseError::Output(format!("{:?}", e)))?;

        trace!("pin {:?}", level);
        self.level = Some(level);
        Ok(())
    }

    /// Block for `duration`, checking for cancellation between slices.
    fn wait(&mut self, duration: Duration) -> Result<(), MorseError> {
        let mut remaining = duration.as_nanos();

        while remaining > 0 {
            if self.cancel.is_cancelled() {
                return Err(MorseError::Cancelled);
            }
            let slice = remaining.min(WAIT_SLICE_NS as u128);
            self.delay.delay_ns(slice as u32);
            remaining -= slice;
        }
        Ok(())
    }
}

impl<P: OutputPin, D: DelayNs> PulseSink for LedOutput<P, D> {
    fn emit(&mut self, event: PulseEvent) -> Result<(), MorseError> {
        if self.cancel.is_cancelled() {
            debug!("cancelled before {:?}", event);
            return Err(MorseError::Cancelled);
        }
        self.write(event.level)?;
        self.wait(event.duration)
    }
}
