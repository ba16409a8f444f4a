//! Crate-level error types.

use std::fmt;

/// Errors produced by the drift crate.
///
/// None of these are fatal to a running [`Stage`](crate::engine::Stage):
/// the worst outcome is that a single illustration is not drawn or not
/// animated.
#[derive(Debug)]
pub enum DriftError {
    /// A config entry lacks a field its type requires (e.g. `raw` without
    /// `path`).
    MissingField {
        /// The missing field.
        field: &'static str,
        /// Logical name of the offending entry (empty when unnamed).
        name: String,
    },
    /// A host-supplied collaborator (shape or atom registry) is absent.
    MissingCollaborator(String),
    /// No constructor is registered for the requested shape type.
    UnknownShape(String),
    /// The graphics surface rejected an operation.
    Surface(String),
    /// Config parsing/serialization failure.
    ConfigParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for DriftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field, name } => {
                write!(f, "entry '{name}' is missing required field '{field}'")
            }
            Self::MissingCollaborator(what) => {
                write!(f, "missing collaborator: {what}")
            }
            Self::UnknownShape(kind) => {
                write!(f, "no constructor registered for type '{kind}'")
            }
            Self::Surface(msg) => write!(f, "surface error: {msg}"),
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for DriftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DriftError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for DriftError {
    fn from(e: serde_json::Error) -> Self {
        Self::ConfigParse(e.to_string())
    }
}
