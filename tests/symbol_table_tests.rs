//! Morse table tests

use pimorse::symbol::{lookup, supported, Symbol};
use pimorse::MorseError;

const CANONICAL: [(char, &str); 36] = [
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."), ('E', "."),
    ('F', "..-."), ('G', "--."), ('H', "...."), ('I', ".."), ('J', ".---"),
    ('K', "-.-"), ('L', ".-.."), ('M', "--"), ('N', "-."), ('O', "---"),
    ('P', ".--."), ('Q', "--.-"), ('R', ".-."), ('S', "..."), ('T', "-"),
    ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"), ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"), ('1', ".----"), ('2', "..---"), ('3', "...--"), ('4', "....-"),
    ('5', "....."), ('6', "-...."), ('7', "--..."), ('8', "---.."), ('9', "----."),
];

fn to_dots(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(|s| match s {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        })
        .collect()
}

#[test]
fn test_matches_international_morse() {
    for (c, code) in CANONICAL {
        assert_eq!(to_dots(lookup(c).unwrap()), code, "code for {}", c);
    }
}

#[test]
fn test_single_symbol_letters() {
    assert_eq!(lookup('E').unwrap(), &[Symbol::Dot]);
    assert_eq!(lookup('T').unwrap(), &[Symbol::Dash]);
    assert_eq!(lookup('O').unwrap(), &[Symbol::Dash, Symbol::Dash, Symbol::Dash]);
}

#[test]
fn test_lowercase_same_as_uppercase() {
    for c in 'a'..='z' {
        assert_eq!(lookup(c).unwrap(), lookup(c.to_ascii_uppercase()).unwrap());
    }
}

#[test]
fn test_supported_covers_table() {
    assert_eq!(supported().count(), 36);
    assert!(supported().all(|c| lookup(c).is_ok()));
}

#[test]
fn test_unsupported_characters() {
    for c in ['!', '?', '.', ' ', 'É', 'é', 'ß', '\u{0}'] {
        assert_eq!(lookup(c), Err(MorseError::UnsupportedCharacter(c)));
    }
}
