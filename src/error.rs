//! Unified error types for the KettleBridge firmware.
//!
//! Subsystem errors convert into [`Error`] so the binary's top level can
//! report any of them uniformly.  Inside the control loop nothing here is
//! fatal: failures are logged and the next tick carries on.

use core::fmt;

use crate::app::ports::{ConfigError, StoreError};

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The remote document store failed.
    Store(StoreError),
    /// A fetched command document could not be interpreted.
    Command(CommandError),
    /// Configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(e) => write!(f, "store: {e}"),
            Self::Command(e) => write!(f, "command: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Self::Command(e)
    }
}

// ---------------------------------------------------------------------------
// Command document errors
// ---------------------------------------------------------------------------

/// Why a command document was not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The document is not a JSON object.
    NotAnObject,
    /// None of `off`, `on` or `temp` is present.
    NoRecognizedKey,
    /// `temp` is present but `temp.value` is missing or not an integer.
    TempNotInteger,
    /// `temp.value` is an integer outside `0..=255`.
    TempOutOfRange(i64),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "document is not an object"),
            Self::NoRecognizedKey => write!(f, "no recognized key"),
            Self::TempNotInteger => write!(f, "temp.value missing or not an integer"),
            Self::TempOutOfRange(v) => write!(f, "temp.value {v} out of range"),
        }
    }
}

impl std::error::Error for CommandError {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
