//! Module: timing
//!
//! Purpose: Morse timing derived from a single base unit (the dot).
//!
//! ```text
//! dot              1 unit   (key down)
//! dash             3 units  (key down)
//! intra-letter gap 1 unit   (between symbols of one letter)
//! inter-letter gap 3 units  (between letters of one word)
//! inter-word gap   7 units  (between words)
//! ```
//!
//! Every derived duration is an integer multiple of the dot duration, so the
//! ratios hold exactly regardless of the base unit.

use core::time::Duration;

use crate::error::MorseError;

/// Dash length in units.
pub const DASH_UNITS: u32 = 3;
/// Gap between symbols of one letter, in units.
pub const INTRA_LETTER_UNITS: u32 = 1;
/// Gap between letters of one word, in units.
pub const INTER_LETTER_UNITS: u32 = 3;
/// Gap between words, in units.
pub const INTER_WORD_UNITS: u32 = 7;

/// PARIS timing: one word per minute is a 1.2 s dot.
const PARIS_DOT_SECS: f64 = 1.2;

/// Durations for one transmission. Read-only once derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingConfig {
    dot: Duration,
}

impl TimingConfig {
    /// Derive all durations from the base unit in seconds.
    ///
    /// Fails with [`MorseError::InvalidConfiguration`] unless the value is
    /// finite and strictly positive.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use pimorse::timing::TimingConfig;
    ///
    /// let timing = TimingConfig::derive(0.5).unwrap();
    /// assert_eq!(timing.dash(), Duration::from_millis(1500));
    /// assert_eq!(timing.inter_word_gap(), Duration::from_millis(3500));
    /// ```
    pub fn derive(base_unit_secs: f64) -> Result<Self, MorseError> {
        if !base_unit_secs.is_finite() || base_unit_secs <= 0.0 {
            return Err(MorseError::InvalidConfiguration(format!(
                "base unit must be a positive number of seconds, got {}",
                base_unit_secs
            )));
        }

        let dot = Duration::try_from_secs_f64(base_unit_secs)
            .map_err(|e| MorseError::InvalidConfiguration(format!("base unit {}: {}", base_unit_secs, e)))?;

        // Below 1ns
        if dot.is_zero() {
            return Err(MorseError::InvalidConfiguration(format!(
                "base unit {} s is too short",
                base_unit_secs
            )));
        }

        // Longest derived duration must fit too
        if dot.checked_mul(INTER_WORD_UNITS).is_none() {
            return Err(MorseError::InvalidConfiguration(format!(
                "base unit {} s is too long",
                base_unit_secs
            )));
        }

        Ok(Self { dot })
    }

    /// Derive durations from a speed in words per minute (PARIS timing).
    pub fn from_wpm(wpm: u32) -> Result<Self, MorseError> {
        if wpm == 0 {
            return Err(MorseError::InvalidConfiguration("speed must be at least 1 WPM".into()));
        }
        Self::derive(PARIS_DOT_SECS / wpm as f64)
    }

    /// Equivalent speed in words per minute.
    pub fn wpm(&self) -> f64 {
        PARIS_DOT_SECS / self.dot.as_secs_f64()
    }

    /// Base unit.
    #[inline]
    pub fn dot(&self) -> Duration {
        self.dot
    }

    #[inline]
    pub fn dash(&self) -> Duration {
        self.dot * DASH_UNITS
    }

    #[inline]
    pub fn intra_letter_gap(&self) -> Duration {
        self.dot * INTRA_LETTER_UNITS
    }

    #[inline]
    pub fn inter_letter_gap(&self) -> Duration {
        self.dot * INTER_LETTER_UNITS
    }

    #[inline]
    pub fn inter_word_gap(&self) -> Duration {
        self.dot * INTER_WORD_UNITS
    }
}
