//! Module: message
//!
//! Purpose: Normalize and tokenize the text to transmit.
//!
//! The whole message is validated up front: every character is looked up
//! while parsing, so an unsupported character is reported before the output
//! pin is ever driven.

use crate::error::MorseError;
use crate::symbol::{self, Symbol};

/// One character of a word together with its Morse code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Letter {
    pub character: char,
    pub symbols: &'static [Symbol],
}

/// Whitespace-free run of letters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub letters: Vec<Letter>,
}

/// Uppercased message split into words. Always holds at least one word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    words: Vec<Word>,
}

impl Message {
    /// Parse a message.
    ///
    /// Fails with [`MorseError::EmptyMessage`] if the text has no words and
    /// with [`MorseError::UnsupportedCharacter`] on the first character that
    /// has no Morse code.
    pub fn parse(text: &str) -> Result<Self, MorseError> {
        let words = text
            .split_whitespace()
            .map(Self::parse_word)
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(MorseError::EmptyMessage);
        }

        Ok(Self { words })
    }

    fn parse_word(raw: &str) -> Result<Word, MorseError> {
        let letters = raw
            .chars()
            .map(|c| -> Result<Letter, MorseError> {
                Ok(Letter {
                    character: c.to_ascii_uppercase(),
                    symbols: symbol::lookup(c)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Word {
            text: raw.to_ascii_uppercase(),
            letters,
        })
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Normalized text, words joined by single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of dots and dashes in the whole message.
    pub fn symbol_count(&self) -> usize {
        self.words
            .iter()
            .flat_map(|w| &w.letters)
            .map(|l| l.symbols.len())
            .sum()
    }
}
