//! Crate-level error types.

use std::fmt;

/// Errors produced by the bloch crate.
#[derive(Debug)]
pub enum BlochError {
    /// A gate token did not name a known gate.
    UnknownGate(String),
    /// A parameterized gate token could not be parsed.
    InvalidGate {
        /// The offending token as written.
        token: String,
        /// What was wrong with it.
        reason: String,
    },
    /// A sequencer phase was entered from an unexpected animation state.
    InvalidState(&'static str),
    /// A rendered frame could not be parsed back as SVG.
    Svg(String),
    /// Frame encoding (GIF) failure.
    Encode(String),
    /// External video encoder failure.
    Video(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for BlochError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownGate(name) => {
                write!(f, "unknown gate name \"{name}\"")
            }
            Self::InvalidGate { token, reason } => {
                write!(f, "invalid gate \"{token}\": {reason}")
            }
            Self::InvalidState(msg) => {
                write!(f, "unexpected animation state: {msg}")
            }
            Self::Svg(msg) => write!(f, "SVG error: {msg}"),
            Self::Encode(msg) => write!(f, "encode error: {msg}"),
            Self::Video(msg) => write!(f, "video error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for BlochError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BlochError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
