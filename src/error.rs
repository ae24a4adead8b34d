//! Error types for pimorse.

/// Everything that can stop a transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MorseError {
    /// E01: Wrong command line usage
    Usage,
    /// E02: Base duration, pin or config file rejected
    InvalidConfiguration(String),
    /// E03: Message has no words
    EmptyMessage,
    /// E04: Character has no Morse code
    UnsupportedCharacter(char),
    /// E05: Output pin driver failed
    Output(String),
    /// Interrupted by the user. Not a failure; the transmitter turns it
    /// into [`Outcome::Cancelled`](crate::transmitter::Outcome::Cancelled).
    Cancelled,
}

impl MorseError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usage => "E01",
            Self::InvalidConfiguration(_) => "E02",
            Self::EmptyMessage => "E03",
            Self::UnsupportedCharacter(_) => "E04",
            Self::Output(_) => "E05",
            Self::Cancelled => "E00",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::Usage => "wrong usage",
            Self::InvalidConfiguration(_) => "invalid configuration",
            Self::EmptyMessage => "empty message",
            Self::UnsupportedCharacter(_) => "unsupported character",
            Self::Output(_) => "output pin failure",
            Self::Cancelled => "cancelled",
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Cancelled => 0,
            Self::Usage => 1,
            Self::InvalidConfiguration(_) => 2,
            Self::EmptyMessage | Self::UnsupportedCharacter(_) => 3,
            Self::Output(_) => 4,
        }
    }
}

impl core::fmt::Display for MorseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())?;
        match self {
            Self::InvalidConfiguration(detail) | Self::Output(detail) => write!(f, " ({})", detail),
            Self::UnsupportedCharacter(c) => write!(f, " {:?}", c),
            _ => Ok(()),
        }
    }
}

impl std::error::Error for MorseError {}
