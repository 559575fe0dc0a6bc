//! Crate-level error types.

use std::fmt;

/// Errors produced by the portico crate.
///
/// The coordinator itself never fails; only loading configuration and
/// scenarios from disk can.
#[derive(Debug)]
pub enum PorticoError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Scenario file parsing/serialization failure.
    ScenarioParse(String),
}

impl fmt::Display for PorticoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ScenarioParse(msg) => {
                write!(f, "scenario parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for PorticoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PorticoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
