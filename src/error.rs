//! Error type shared by the key table, transmitter and invocation pipeline

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which half of a press/release cycle a write belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    KeyDown,
    KeyUp,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::KeyDown => write!(f, "key-down"),
            Phase::KeyUp => write!(f, "key-up"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Requested name is not in the key table
    #[error("unknown key '{name}', must be one of ({valid})")]
    UnknownKey { name: String, valid: String },

    /// Missing key argument or empty device path
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The gadget device could not be opened
    #[error("failed to open HID device {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A report write did not complete
    #[error("failed to write {phase} report: {source}")]
    Write {
        phase: Phase,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// True for errors raised before any device I/O
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::UnknownKey { .. } | Error::InvalidConfiguration(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
