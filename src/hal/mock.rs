//! In-memory pin and delay for host tests.
//!
//! Nothing sleeps: `MockDelay` only adds up the requested time.

use core::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error, ErrorKind, ErrorType, OutputPin};

use crate::cancel::CancelFlag;
use crate::pulse::Level;

/// Error returned by a [`MockPin`] set up to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Output pin that records every write.
#[derive(Debug, Default)]
pub struct MockPin {
    history: Vec<Level>,
    fail_after: Option<usize>,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin that accepts `writes` writes and fails all later ones.
    pub fn failing_after(writes: usize) -> Self {
        Self {
            history: Vec::new(),
            fail_after: Some(writes),
        }
    }

    /// Every level written, oldest first.
    pub fn history(&self) -> &[Level] {
        &self.history
    }

    /// Current level. Starts low, like a pin opened with `into_output_low`.
    pub fn level(&self) -> Level {
        self.history.last().copied().unwrap_or(Level::Off)
    }

    /// Number of high pulses (writes of `On`).
    pub fn pulse_count(&self) -> usize {
        self.history.iter().filter(|l| **l == Level::On).count()
    }

    fn record(&mut self, level: Level) -> Result<(), MockPinError> {
        if self.fail_after.is_some_and(|n| self.history.len() >= n) {
            return Err(MockPinError);
        }
        self.history.push(level);
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = MockPinError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.record(Level::Off)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record(Level::On)
    }
}

/// Delay that accumulates requested time instead of sleeping.
#[derive(Debug, Default)]
pub struct MockDelay {
    elapsed_ns: u64,
    calls: usize,
    cancel_at: Option<(u64, CancelFlag)>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate an interrupt: cancel `flag` once `at` has elapsed.
    pub fn cancel_at(mut self, at: Duration, flag: CancelFlag) -> Self {
        self.cancel_at = Some((at.as_nanos() as u64, flag));
        self
    }

    /// Total time waited.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns)
    }

    /// Number of individual delay calls.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += ns as u64;
        self.calls += 1;

        if let Some((at, flag)) = &self.cancel_at {
            if self.elapsed_ns >= *at {
                flag.cancel();
            }
        }
    }
}
