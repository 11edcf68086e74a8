//! The message in portable `.eml` form.

use crate::case::{AuditLog, CaseWorkspace};
use crate::error::Result;
use crate::model::artifact::{Artifact, ArtifactKind};
use crate::model::message::Message;

/// File name of the portable copy inside the case directory.
pub const EML_FILE_NAME: &str = "email.eml";

/// Write the message's byte serialization as `email.eml`.
pub fn save_eml(
    workspace: &mut CaseWorkspace,
    message: &Message,
    audit: &mut AuditLog,
) -> Result<Artifact> {
    let artifact = workspace.write_artifact(ArtifactKind::Eml, EML_FILE_NAME, message.as_bytes())?;
    audit.info(format!(
        "Email in the eml format saved to: {}",
        artifact.path.display()
    ));
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::headers::Headers;
    use crate::model::message::MessageBody;

    #[test]
    fn test_save_eml_writes_raw_serialization() {
        let root = tempfile::tempdir().unwrap();
        let (mut ws, _) = CaseWorkspace::create(root.path(), Some("c".into())).unwrap();
        let mut audit = AuditLog::new();

        let raw = b"Subject: x\r\n\r\nbody\r\n".to_vec();
        let message = Message::new(
            Headers::empty(),
            MessageBody::BareText("body".into()),
            raw.clone(),
        );

        let artifact = save_eml(&mut ws, &message, &mut audit).unwrap();
        assert_eq!(artifact.kind, ArtifactKind::Eml);
        assert_eq!(std::fs::read(ws.directory().join(EML_FILE_NAME)).unwrap(), raw);
    }
}
