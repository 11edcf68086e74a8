//! Centralized error types for mailcase.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors produced by the mailcase library.
///
/// Encoding problems are deliberately absent here: a malformed
/// quoted-printable payload degrades to an identity copy and is only
/// logged (see [`crate::decompose::encoding::QuotedPrintableError`]).
#[derive(Error, Debug)]
pub enum CaseError {
    /// I/O error with the associated file path.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The specified email file does not exist.
    #[error("No such email file: {0}")]
    FileNotFound(PathBuf),

    /// The file could not be parsed as an email message.
    #[error("Not a parsable email message: {0}")]
    MessageParse(PathBuf),

    /// The message body is neither a text payload nor an ordered part
    /// sequence. Aborts decomposition before any artifact is written.
    #[error("Message body is neither text nor a part sequence: {0}")]
    MalformedBody(String),

    /// Writing an artifact into the case directory failed. Fatal to the
    /// whole run; a partial case directory is misleading to a reviewer.
    #[error("Failed to write artifact '{path}': {source}")]
    ArtifactWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias for `Result<T, CaseError>`.
pub type Result<T> = std::result::Result<T, CaseError>;

impl CaseError {
    /// Create an `Io` variant from a path and an `io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Allow `?` on `std::io::Error` inside functions returning `CaseError`
/// when no path context is available (rare — prefer `CaseError::io`).
impl From<std::io::Error> for CaseError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            path: PathBuf::from("<unknown>"),
            source,
        }
    }
}
