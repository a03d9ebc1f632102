//! Error types for the omh_core library.

use std::fmt;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for omh_core operations
///
/// Field names are dotted JSON property paths (for example
/// `effective_time_frame.time_interval.duration`) so they can be shown to a
/// user as-is.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required value was not supplied
    #[error("{field} must be provided")]
    AbsentValue { field: String },

    /// A supplied value breaks a domain rule
    #[error("{field} {reason}")]
    InvalidArgument { field: String, reason: String },

    /// An enumerated property carries a string outside its vocabulary
    #[error("{field} has unrecognised value \"{value}\"")]
    UnknownSchemaValue { field: String, value: String },

    /// A property that the measure does not define (strict decoding only)
    #[error("unrecognised property \"{field}\"")]
    UnknownField { field: String },

    /// Document shape does not match any known layout
    #[error("malformed document: {0}")]
    Structural(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Coarse classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AbsentValue,
    InvalidArgument,
    Structural,
    Environment,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::AbsentValue => "absent value",
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::Structural => "structural",
            ErrorKind::Environment => "environment",
        })
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AbsentValue { .. } => ErrorKind::AbsentValue,
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::UnknownSchemaValue { .. }
            | Error::UnknownField { .. }
            | Error::Structural(_)
            | Error::Json(_) => ErrorKind::Structural,
            Error::Io(_) | Error::Toml(_) | Error::Config(_) | Error::Other(_) => {
                ErrorKind::Environment
            }
        }
    }

    pub(crate) fn absent(field: impl Into<String>) -> Self {
        Error::AbsentValue {
            field: field.into(),
        }
    }

    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Unwrap an optional document property or report it as absent
pub(crate) fn require<T>(field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::absent(field))
}
