//! User interrupt handling.
//!
//! Stopping mid-message is not a fault: the pin goes low and the program
//! says goodbye. The flag is the only state shared with the signal thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;
use simple_signal::Signal;

/// Shared cancellation flag.
///
/// Cloning gives another handle to the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Create a new flag (not cancelled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Cancel `flag` on SIGINT or SIGTERM.
pub fn install_interrupt_handler(flag: &CancelFlag) {
    let flag = flag.clone();
    simple_signal::set_handler(&[Signal::Int, Signal::Term], move |signals| {
        debug!("received {:?}", signals);
        flag.cancel();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let flag = CancelFlag::new();
        let other = flag.clone();

        assert!(!other.is_cancelled());
        flag.cancel();
        assert!(other.is_cancelled());
    }

    #[test]
    fn test_cancel_from_another_thread() {
        let flag = CancelFlag::new();
        let remote = flag.clone();

        std::thread::spawn(move || remote.cancel()).join().unwrap();

        assert!(flag.is_cancelled());
    }
}
