//! Verbatim copy of the source message file into the case directory.

use std::path::Path;

use crate::case::{AuditLog, CaseWorkspace};
use crate::error::Result;
use crate::model::artifact::{Artifact, ArtifactKind};

/// Prefix marking the untouched original inside a case directory.
const ORIGINAL_PREFIX: &str = "_orig__";

/// Copy the original message file into the case as `_orig__{basename}`.
pub fn copy_original(
    workspace: &mut CaseWorkspace,
    source: &Path,
    audit: &mut AuditLog,
) -> Result<Artifact> {
    let basename = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "message".to_string());

    let artifact = workspace.copy_into(
        ArtifactKind::OriginalCopy,
        &format!("{ORIGINAL_PREFIX}{basename}"),
        source,
    )?;
    audit.info(format!("Original email saved to: {}", artifact.path.display()));
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_original_uses_prefixed_basename() {
        let root = tempfile::tempdir().unwrap();
        let source = root.path().join("evidence.eml");
        std::fs::write(&source, b"raw message").unwrap();

        let (mut ws, _) = CaseWorkspace::create(root.path(), Some("c".into())).unwrap();
        let mut audit = AuditLog::new();

        let artifact = copy_original(&mut ws, &source, &mut audit).unwrap();
        assert_eq!(artifact.path.to_str(), Some("_orig__evidence.eml"));
        assert_eq!(
            std::fs::read(ws.directory().join("_orig__evidence.eml")).unwrap(),
            b"raw message"
        );
        assert!(audit.lines()[0].contains("Original email saved to"));
    }
}
