//! Module: transmitter
//!
//! Purpose: Send one message on an owned output pin.
//!
//! Whatever happens (completion, interrupt, driver failure) the pin is low
//! when [`Transmitter::transmit`] returns. Bad input is rejected before the
//! pin is written at all.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{info, warn};

use crate::error::MorseError;
use crate::hal::LedOutput;
use crate::message::Message;
use crate::pulse::total_duration;
use crate::sequencer::Sequencer;
use crate::timing::TimingConfig;

/// How a transmission ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every pulse was sent.
    Completed,
    /// The user interrupted; the pin was forced low.
    Cancelled,
}

/// Sequencer bound to an output.
pub struct Transmitter<P, D> {
    sequencer: Sequencer,
    output: LedOutput<P, D>,
}

impl<P: OutputPin, D: DelayNs> Transmitter<P, D> {
    pub fn new(timing: TimingConfig, output: LedOutput<P, D>) -> Self {
        Self {
            sequencer: Sequencer::new(timing),
            output,
        }
    }

    pub fn output(&self) -> &LedOutput<P, D> {
        &self.output
    }

    /// Parse `text` and send it.
    pub fn transmit(&mut self, text: &str) -> Result<Outcome, MorseError> {
        let message = Message::parse(text)?;
        self.send(&message)
    }

    /// Send an already parsed message.
    pub fn send(&mut self, message: &Message) -> Result<Outcome, MorseError> {
        let plan = total_duration(&self.sequencer.timeline(message));
        info!(
            "Sending {:?} ({} symbols, {:.1}s at {:.1} WPM)",
            message.text(),
            message.symbol_count(),
            plan.as_secs_f64(),
            self.sequencer.timing().wpm()
        );

        let result = self.sequencer.run(message, &mut self.output);

        if let Err(e) = self.output.force_low() {
            warn!("could not turn the LED off: {}", e);
            // A clean ending requires the LED to be off
            if matches!(result, Ok(()) | Err(MorseError::Cancelled)) {
                return Err(e);
            }
        }

        match result {
            Ok(()) => Ok(Outcome::Completed),
            Err(MorseError::Cancelled) => {
                info!("transmission interrupted");
                Ok(Outcome::Cancelled)
            }
            Err(e) => Err(e),
        }
    }
}
