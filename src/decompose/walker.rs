//! The decomposition walk: raw and decoded artifacts for every part.

use tracing::debug;

use crate::case::{AuditLog, CaseWorkspace};
use crate::decompose::{encoding, naming, normalize};
use crate::error::Result;
use crate::model::artifact::ArtifactKind;
use crate::model::message::Message;

/// Outcome of one decomposition run.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct DecompositionReport {
    /// Parts detected in the message body.
    pub part_count: usize,
    /// Payload artifacts written (two per part on the success path).
    pub artifacts_written: usize,
}

/// Decompose a message body into raw and decoded payload artifacts.
///
/// Parts are processed strictly in index order. For each part the raw
/// content is persisted verbatim, then decoded according to the resolved
/// strategy and persisted again. A malformed quoted-printable payload
/// degrades to its raw bytes with a warning; an I/O failure aborts the
/// whole run.
pub fn decompose(
    message: &Message,
    workspace: &mut CaseWorkspace,
    audit: &mut AuditLog,
) -> Result<DecompositionReport> {
    let parts = normalize::normalize(&message.body)?;
    audit.info(format!("Detected payloads: {}", parts.len()));

    let mut artifacts_written = 0;

    for part in &parts {
        let raw = workspace.write_artifact(
            ArtifactKind::PartRaw,
            &naming::raw_name(part),
            &part.raw_content,
        )?;
        audit.info(format!("Saving raw payload to: {}", raw.path.display()));
        artifacts_written += 1;

        let strategy = encoding::resolve(part);
        debug!(index = part.index, ?strategy, "Resolved decode strategy");

        let decoded = match strategy.apply(&part.raw_content) {
            Ok(bytes) => bytes,
            Err(e) => {
                audit.warn(format!(
                    "Payload {} is not valid quoted-printable ({e}); keeping raw bytes",
                    part.index
                ));
                part.raw_content.clone()
            }
        };

        let dec = workspace.write_artifact(
            ArtifactKind::PartDecoded,
            &naming::decoded_name(part),
            &decoded,
        )?;
        audit.info(format!("Saving decoded payload to: {}", dec.path.display()));
        artifacts_written += 1;
    }

    Ok(DecompositionReport {
        part_count: parts.len(),
        artifacts_written,
    })
}
