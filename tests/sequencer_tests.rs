//! Sequencer timeline tests
//!
//! Timelines are recorded into a Vec, no hardware involved.

use core::time::Duration;

use pimorse::pulse::total_duration;
use pimorse::{Message, PulseEvent, Sequencer, TimingConfig};

fn sequencer(unit_secs: f64) -> Sequencer {
    Sequencer::new(TimingConfig::derive(unit_secs).unwrap())
}

fn timeline(text: &str) -> Vec<PulseEvent> {
    sequencer(0.1).timeline(&Message::parse(text).unwrap())
}

fn on(ms: u64) -> PulseEvent {
    PulseEvent::on(Duration::from_millis(ms))
}

fn gap(ms: u64) -> PulseEvent {
    PulseEvent::gap(Duration::from_millis(ms))
}

fn off() -> PulseEvent {
    PulseEvent::release()
}

#[test]
fn test_sos_timeline() {
    let expected = vec![
        // S
        on(100), off(), gap(100), on(100), off(), gap(100), on(100), off(),
        gap(300),
        // O
        on(300), off(), gap(100), on(300), off(), gap(100), on(300), off(),
        gap(300),
        // S
        on(100), off(), gap(100), on(100), off(), gap(100), on(100), off(),
    ];

    let events = timeline("SOS");

    assert_eq!(events, expected);
    assert_eq!(events.iter().filter(|e| e.is_on()).count(), 9);
    // 27 units
    assert_eq!(total_duration(&events), Duration::from_millis(2700));
}

#[test]
fn test_two_single_letter_words() {
    let expected = vec![
        // A .-
        on(100), off(), gap(100), on(300), off(),
        gap(700),
        // B -...
        on(300), off(), gap(100), on(100), off(), gap(100), on(100), off(), gap(100), on(100), off(),
    ];

    assert_eq!(timeline("A B"), expected);
}

#[test]
fn test_no_trailing_gap() {
    for text in ["E", "SOS", "HELLO WORLD", "73 DE N0CALL"] {
        let events = timeline(text);
        assert_eq!(events.last(), Some(&off()), "{}", text);
        assert!(events[events.len() - 2].is_on(), "{}", text);
    }
}

#[test]
fn test_gap_kinds_at_each_boundary() {
    let events = timeline("EE E");

    // E . E . E
    assert_eq!(events, vec![on(100), off(), gap(300), on(100), off(), gap(700), on(100), off()]);
}

#[test]
fn test_extra_whitespace_is_one_word_gap() {
    assert_eq!(timeline("A   \t B"), timeline("A B"));
}

#[test]
fn test_case_insensitive() {
    assert_eq!(timeline("sos"), timeline("SOS"));
    assert_eq!(timeline("Hello World 42"), timeline("HELLO WORLD 42"));
}

#[test]
fn test_paris_is_fifty_units() {
    // "PARIS " is 50 units including the trailing word gap
    let seq = sequencer(0.06);
    let events = seq.timeline(&Message::parse("PARIS").unwrap());
    let expected = seq.timing().dot() * 43;

    assert_eq!(total_duration(&events), expected);
}

#[test]
fn test_timeline_scales_with_unit() {
    let msg = Message::parse("CQ CQ").unwrap();
    let slow = total_duration(&sequencer(0.2).timeline(&msg));
    let fast = total_duration(&sequencer(0.1).timeline(&msg));

    assert_eq!(slow, fast * 2);
}
