//! Module: sequencer
//!
//! Purpose: Walk message -> words -> letters -> symbols and emit timed pulse
//! events into a [`PulseSink`].
//!
//! Each level follows the same pattern: every item but the last is followed
//! by that level's gap, the last item by nothing. Nothing is emitted after
//! the final symbol of the message.
//!
//! ```text
//! "A B" @ 100ms
//!
//! ON  100 | OFF 0 | OFF 100 | ON 300 | OFF 0 | OFF 700 | ON 300 | OFF 0 | OFF 100 | ON 100 ...
//! └─ dot ───────┘  intra     └─ dash ──────┘  word      └─ dash ──────┘  intra
//! ```

use core::time::Duration;

use log::info;

use crate::error::MorseError;
use crate::message::{Letter, Message, Word};
use crate::pulse::PulseEvent;
use crate::symbol::Symbol;
use crate::timing::TimingConfig;

/// Destination of pulse events.
///
/// The trace hooks are called as each word and letter begins.
pub trait PulseSink {
    fn emit(&mut self, event: PulseEvent) -> Result<(), MorseError>;

    fn begin_word(&mut self, _word: &str) {}

    fn begin_letter(&mut self, _letter: char) {}
}

/// Recording sink, used to plan a transmission without hardware.
impl PulseSink for Vec<PulseEvent> {
    fn emit(&mut self, event: PulseEvent) -> Result<(), MorseError> {
        self.push(event);
        Ok(())
    }
}

/// Emit `items` with `gap` between consecutive items and none after the last.
fn emit_spaced<T, S, F>(items: &[T], gap: Duration, sink: &mut S, mut emit_item: F) -> Result<(), MorseError>
where
    S: PulseSink + ?Sized,
    F: FnMut(&T, &mut S) -> Result<(), MorseError>,
{
    let Some((last, init)) = items.split_last() else {
        return Ok(());
    };

    for item in init {
        emit_item(item, sink)?;
        sink.emit(PulseEvent::gap(gap))?;
    }
    emit_item(last, sink)
}

/// Converts messages into pulse events with fixed timing.
#[derive(Clone, Copy, Debug)]
pub struct Sequencer {
    timing: TimingConfig,
}

impl Sequencer {
    pub fn new(timing: TimingConfig) -> Self {
        Self { timing }
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Emit the whole message into `sink`.
    ///
    /// Stops at the first error the sink returns.
    pub fn run<S: PulseSink + ?Sized>(&self, message: &Message, sink: &mut S) -> Result<(), MorseError> {
        emit_spaced(message.words(), self.timing.inter_word_gap(), sink, |word, sink| {
            self.emit_word(word, sink)
        })
    }

    fn emit_word<S: PulseSink + ?Sized>(&self, word: &Word, sink: &mut S) -> Result<(), MorseError> {
        info!("Emitting word: {}", word.text);
        sink.begin_word(&word.text);

        emit_spaced(&word.letters, self.timing.inter_letter_gap(), sink, |letter, sink| {
            self.emit_letter(letter, sink)
        })
    }

    fn emit_letter<S: PulseSink + ?Sized>(&self, letter: &Letter, sink: &mut S) -> Result<(), MorseError> {
        info!("Emitting letter: {}", letter.character);
        sink.begin_letter(letter.character);

        emit_spaced(letter.symbols, self.timing.intra_letter_gap(), sink, |symbol, sink| {
            self.emit_symbol(*symbol, sink)
        })
    }

    fn emit_symbol<S: PulseSink + ?Sized>(&self, symbol: Symbol, sink: &mut S) -> Result<(), MorseError> {
        let on = match symbol {
            Symbol::Dot => self.timing.dot(),
            Symbol::Dash => self.timing.dash(),
        };
        sink.emit(PulseEvent::on(on))?;
        sink.emit(PulseEvent::release())
    }

    /// Full event list for `message`, without touching any hardware.
    pub fn timeline(&self, message: &Message) -> Vec<PulseEvent> {
        let mut events = Vec::with_capacity(message.symbol_count() * 3);
        self.run(message, &mut events)
            .expect("Vec<PulseEvent> sink never returns an error");
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailAfter {
        remaining: usize,
        seen: usize,
    }

    impl PulseSink for FailAfter {
        fn emit(&mut self, _event: PulseEvent) -> Result<(), MorseError> {
            if self.remaining == 0 {
                return Err(MorseError::Output("stuck".into()));
            }
            self.remaining -= 1;
            self.seen += 1;
            Ok(())
        }
    }

    #[test]
    fn test_emit_spaced_no_trailing_gap() {
        let mut events = Vec::new();
        let gap = Duration::from_millis(5);
        emit_spaced(&[1u64, 2, 3], gap, &mut events, |n, sink| {
            sink.emit(PulseEvent::on(Duration::from_millis(*n)))
        })
        .unwrap();

        assert_eq!(
            events,
            vec![
                PulseEvent::on(Duration::from_millis(1)),
                PulseEvent::gap(gap),
                PulseEvent::on(Duration::from_millis(2)),
                PulseEvent::gap(gap),
                PulseEvent::on(Duration::from_millis(3)),
            ]
        );
    }

    #[test]
    fn test_emit_spaced_single_and_empty() {
        let gap = Duration::from_millis(5);

        let mut events = Vec::new();
        emit_spaced(&[7u64], gap, &mut events, |n, sink| {
            sink.emit(PulseEvent::on(Duration::from_millis(*n)))
        })
        .unwrap();
        assert_eq!(events, vec![PulseEvent::on(Duration::from_millis(7))]);

        let mut events = Vec::new();
        emit_spaced::<u64, _, _>(&[], gap, &mut events, |_, _| unreachable!()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_sink_error_stops_run() {
        let seq = Sequencer::new(TimingConfig::derive(0.01).unwrap());
        let msg = Message::parse("HELLO WORLD").unwrap();
        let mut sink = FailAfter { remaining: 4, seen: 0 };

        assert_eq!(seq.run(&msg, &mut sink), Err(MorseError::Output("stuck".into())));
        assert_eq!(sink.seen, 4);
    }
}
