//! Crate-level error types.

use std::fmt;

/// Errors produced by the camrig crate.
///
/// Camera motion never errors; only preset file I/O does.
#[derive(Debug)]
pub enum RigError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML preset parsing/serialization failure.
    PresetParse(String),
}

impl fmt::Display for RigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::PresetParse(msg) => {
                write!(f, "preset parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for RigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::PresetParse(_) => None,
        }
    }
}

impl From<std::io::Error> for RigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
