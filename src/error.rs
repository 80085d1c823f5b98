//! Crate-level error types.

use std::fmt;

use crate::gesture::code::CodeError;

/// Errors produced by the orbitpad crate.
///
/// None of these ever surface from the per-event input path; they only come
/// from explicit settings I/O and from strict code decoding.
#[derive(Debug)]
pub enum OrbitpadError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML settings parsing/serialization failure.
    SettingsParse(String),
    /// A persisted control code could not be decoded.
    InvalidCode(CodeError),
    /// A replay trace could not be parsed.
    TraceParse(String),
}

impl fmt::Display for OrbitpadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::SettingsParse(msg) => {
                write!(f, "settings parse error: {msg}")
            }
            Self::InvalidCode(e) => write!(f, "invalid control code: {e}"),
            Self::TraceParse(msg) => write!(f, "trace parse error: {msg}"),
        }
    }
}

impl std::error::Error for OrbitpadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidCode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrbitpadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<CodeError> for OrbitpadError {
    fn from(e: CodeError) -> Self {
        Self::InvalidCode(e)
    }
}
