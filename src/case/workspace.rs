//! A self-contained case directory and its artifact ledger.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{CaseError, Result};
use crate::model::artifact::{Artifact, ArtifactKind};

/// One investigation workspace: a directory owning every artifact written
/// during a single run.
///
/// Lifecycle: created before the pipeline starts, written to throughout,
/// never reopened. One case = one run.
pub struct CaseWorkspace {
    id: String,
    directory: PathBuf,
    created_at: DateTime<Utc>,
    artifacts: Vec<Artifact>,
}

impl CaseWorkspace {
    /// Create a case directory under `cases_root`.
    ///
    /// The id is taken as given or generated (v4 UUID). Returns the
    /// workspace and whether the directory already existed — pre-existing
    /// contents may be overwritten, and the caller is expected to warn.
    pub fn create(cases_root: &Path, id: Option<String>) -> Result<(Self, bool)> {
        let id = match id {
            Some(id) => sanitize_component(&id),
            None => uuid::Uuid::new_v4().to_string(),
        };
        let directory = cases_root.join(&id);

        let already_existed = directory.exists();
        std::fs::create_dir_all(&directory).map_err(|e| CaseError::io(&directory, e))?;
        debug!(case_id = %id, directory = %directory.display(), "Case directory ready");

        Ok((
            Self {
                id,
                directory,
                created_at: Utc::now(),
                artifacts: Vec::new(),
            },
            already_existed,
        ))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Every artifact written so far, in write order.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Total bytes written across all artifacts.
    pub fn bytes_written(&self) -> u64 {
        self.artifacts.iter().map(|a| a.bytes_written).sum()
    }

    /// Write one artifact under the case directory.
    ///
    /// `name` is sanitized so that a filename taken verbatim from message
    /// metadata can never escape the case directory. Returns the recorded
    /// [`Artifact`] with its case-relative path.
    ///
    /// # Errors
    ///
    /// [`CaseError::ArtifactWrite`] on any storage failure — fatal to the
    /// run by contract.
    pub fn write_artifact(
        &mut self,
        kind: ArtifactKind,
        name: &str,
        bytes: &[u8],
    ) -> Result<Artifact> {
        let safe_name = sanitize_component(name);
        let path = self.directory.join(&safe_name);

        std::fs::write(&path, bytes).map_err(|e| CaseError::ArtifactWrite {
            path: path.clone(),
            source: e,
        })?;

        let artifact = Artifact {
            kind,
            path: PathBuf::from(safe_name),
            bytes_written: bytes.len() as u64,
        };
        self.artifacts.push(artifact.clone());
        Ok(artifact)
    }

    /// Copy an external file into the case directory as an artifact.
    pub fn copy_into(&mut self, kind: ArtifactKind, name: &str, source: &Path) -> Result<Artifact> {
        let safe_name = sanitize_component(name);
        let path = self.directory.join(&safe_name);

        let bytes_written =
            std::fs::copy(source, &path).map_err(|e| CaseError::ArtifactWrite {
                path: path.clone(),
                source: e,
            })?;

        let artifact = Artifact {
            kind,
            path: PathBuf::from(safe_name),
            bytes_written,
        };
        self.artifacts.push(artifact.clone());
        Ok(artifact)
    }
}

/// Sanitize a single path component.
///
/// Path separators, parent references, and control characters are
/// replaced with `_`; everything else (including spaces and non-ASCII) is
/// kept so artifact names stay recognizable.
fn sanitize_component(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // ".." as a full component would still walk upward
    let trimmed = replaced.trim();
    if trimmed.is_empty() || trimmed.chars().all(|c| c == '.') {
        "unnamed".to_string()
    } else {
        trimmed.to_string()
    }
}
