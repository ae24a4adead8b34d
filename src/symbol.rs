//! Module: symbol
//!
//! Purpose: International Morse code table for letters A-Z and digits 0-9.
//!
//! Safety: Safe. Static data only.

use crate::error::MorseError;

/// One element of a Morse character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    /// Short element, one unit on.
    Dot,
    /// Long element, three units on.
    Dash,
}

use Symbol::{Dash as L, Dot as S};

const LETTERS: [&[Symbol]; 26] = [
    &[S, L],       // A
    &[L, S, S, S], // B
    &[L, S, L, S], // C
    &[L, S, S],    // D
    &[S],          // E
    &[S, S, L, S], // F
    &[L, L, S],    // G
    &[S, S, S, S], // H
    &[S, S],       // I
    &[S, L, L, L], // J
    &[L, S, L],    // K
    &[S, L, S, S], // L
    &[L, L],       // M
    &[L, S],       // N
    &[L, L, L],    // O
    &[S, L, L, S], // P
    &[L, L, S, L], // Q
    &[S, L, S],    // R
    &[S, S, S],    // S
    &[L],          // T
    &[S, S, L],    // U
    &[S, S, S, L], // V
    &[S, L, L],    // W
    &[L, S, S, L], // X
    &[L, S, L, L], // Y
    &[L, L, S, S], // Z
];

const DIGITS: [&[Symbol]; 10] = [
    &[L, L, L, L, L], // 0
    &[S, L, L, L, L], // 1
    &[S, S, L, L, L], // 2
    &[S, S, S, L, L], // 3
    &[S, S, S, S, L], // 4
    &[S, S, S, S, S], // 5
    &[L, S, S, S, S], // 6
    &[L, L, S, S, S], // 7
    &[L, L, L, S, S], // 8
    &[L, L, L, L, S], // 9
];

/// Look up the Morse code of a character.
///
/// Lowercase ASCII letters are accepted and treated as uppercase.
/// Anything outside `A-Z` and `0-9` fails with
/// [`MorseError::UnsupportedCharacter`] carrying the original character.
///
/// # Example
///
/// ```
/// use pimorse::symbol::{lookup, Symbol};
///
/// assert_eq!(lookup('e').unwrap(), &[Symbol::Dot]);
/// assert!(lookup('!').is_err());
/// ```
pub fn lookup(c: char) -> Result<&'static [Symbol], MorseError> {
    match c.to_ascii_uppercase() {
        u @ 'A'..='Z' => Ok(LETTERS[(u as u8 - b'A') as usize]),
        d @ '0'..='9' => Ok(DIGITS[(d as u8 - b'0') as usize]),
        _ => Err(MorseError::UnsupportedCharacter(c)),
    }
}

/// All characters with a Morse code, letters first.
pub fn supported() -> impl Iterator<Item = char> {
    ('A'..='Z').chain('0'..='9')
}
