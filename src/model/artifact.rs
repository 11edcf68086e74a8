//! Artifact records: one entry per file persisted into a case directory.

use std::path::PathBuf;

/// What kind of file an artifact is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// Verbatim copy of the original source file.
    OriginalCopy,
    /// The message in portable `.eml` form.
    Eml,
    /// A payload part prior to transfer decoding.
    PartRaw,
    /// A payload part after transfer decoding.
    PartDecoded,
    /// The flushed audit log.
    CaseLog,
}

/// One file written into the case directory.
///
/// Created once per pipeline run, never mutated and never deleted by the
/// pipeline. `path` is relative to the case directory.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub bytes_written: u64,
}
