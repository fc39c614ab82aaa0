#![forbid(unsafe_code)]

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodecError>;

/// Why a rule-table document could not be read or written.
///
/// Structural variants carry the dotted JSON path of the offending value,
/// e.g. `QtGtk3Palettes.SystemPalette.Window[0].SourceData.Lighter`.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path}: missing key {key:?}")]
    MissingKey { path: String, key: String },

    #[error("{path}: expected {expected}")]
    WrongType { path: String, expected: &'static str },

    #[error("{path}: unknown {kind} {name:?}")]
    UnknownName {
        path: String,
        kind: &'static str,
        name: String,
    },

    #[error("{path}: invalid color {value:?}")]
    InvalidColor { path: String, value: String },

    #[error("{path}: value {value} out of range")]
    OutOfRange { path: String, value: i64 },

    #[error("{path}: empty")]
    Empty { path: String },
}

impl CodecError {
    pub(crate) fn missing(path: &str, key: &str) -> Self {
        Self::MissingKey {
            path: path.to_owned(),
            key: key.to_owned(),
        }
    }

    pub(crate) fn wrong_type(path: &str, expected: &'static str) -> Self {
        Self::WrongType {
            path: path.to_owned(),
            expected,
        }
    }

    /// Whether the error is about document content rather than I/O.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
