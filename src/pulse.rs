//! Module: pulse
//!
//! Purpose: Timed output instructions produced by the sequencer.
//!
//! Safety: Safe. Copy types only.

use core::time::Duration;

/// Output pin level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Pin high, LED lit.
    On,
    /// Pin low, LED dark.
    Off,
}

/// Drive the pin to `level`, then hold it for `duration`.
///
/// A symbol is `On(dot|dash)` followed by `Off(0)`; a gap is `Off(gap)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PulseEvent {
    pub level: Level,
    pub duration: Duration,
}

impl PulseEvent {
    #[inline]
    pub const fn on(duration: Duration) -> Self {
        Self { level: Level::On, duration }
    }

    /// Zero-duration transition back to low at the end of a symbol.
    #[inline]
    pub const fn release() -> Self {
        Self { level: Level::Off, duration: Duration::ZERO }
    }

    #[inline]
    pub const fn gap(duration: Duration) -> Self {
        Self { level: Level::Off, duration }
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.level == Level::On
    }
}

/// Sum of all event durations.
pub fn total_duration(events: &[PulseEvent]) -> Duration {
    events.iter().map(|e| e.duration).sum()
}
