//! Append-only audit log for one case run.
//!
//! An explicit value passed through the pipeline and flushed once by the
//! caller — there is no ambient log state. Lines are mirrored to
//! `tracing` as they are recorded.

use tracing::{error, info, warn};

use crate::case::workspace::CaseWorkspace;
use crate::error::Result;
use crate::model::artifact::{Artifact, ArtifactKind};

/// File name of the flushed log inside the case directory.
pub const LOG_FILE_NAME: &str = "output.txt";

/// Ordered trace of every significant action in a case run.
///
/// One writer, no synchronization. Each line is rendered CRLF-terminated
/// on flush.
#[derive(Debug, Default)]
pub struct AuditLog {
    lines: Vec<String>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an informational action.
    pub fn info(&mut self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        info!("{msg}");
        self.lines.push(format!("[i] {msg}"));
    }

    /// Record a recoverable problem (e.g. a soft decode failure).
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        warn!("{msg}");
        self.lines.push(format!("[!] {msg}"));
    }

    /// Record a fatal condition on its way out.
    pub fn error(&mut self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        error!("{msg}");
        self.lines.push(format!("[-] {msg}"));
    }

    /// Record a line verbatim, without a severity prefix. Used for
    /// report blocks such as the header listing.
    pub fn note(&mut self, msg: impl Into<String>) {
        self.lines.push(msg.into());
    }

    /// All recorded lines, in order, without terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render the log with every line CRLF-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push_str("\r\n");
        }
        out
    }

    /// Flush the log into the case directory as the case-log artifact.
    pub fn flush_to(&self, workspace: &mut CaseWorkspace) -> Result<Artifact> {
        workspace.write_artifact(ArtifactKind::CaseLog, LOG_FILE_NAME, self.render().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_prefixed_and_ordered() {
        let mut audit = AuditLog::new();
        audit.info("Detected payloads: 2");
        audit.warn("Payload 1 is not valid quoted-printable");
        audit.error("run failed");
        audit.note("Subject:\t Hello");

        assert_eq!(
            audit.lines(),
            &[
                "[i] Detected payloads: 2".to_string(),
                "[!] Payload 1 is not valid quoted-printable".to_string(),
                "[-] run failed".to_string(),
                "Subject:\t Hello".to_string(),
            ]
        );
    }

    #[test]
    fn test_render_terminates_every_line_with_crlf() {
        let mut audit = AuditLog::new();
        audit.info("one");
        audit.info("two");
        assert_eq!(audit.render(), "[i] one\r\n[i] two\r\n");
    }

    #[test]
    fn test_flush_writes_case_log_artifact() {
        let root = tempfile::tempdir().unwrap();
        let (mut ws, _) = CaseWorkspace::create(root.path(), Some("c".into())).unwrap();

        let mut audit = AuditLog::new();
        audit.info("analysis completed");
        let artifact = audit.flush_to(&mut ws).unwrap();

        assert_eq!(artifact.kind, ArtifactKind::CaseLog);
        let contents = std::fs::read_to_string(ws.directory().join(LOG_FILE_NAME)).unwrap();
        assert_eq!(contents, "[i] analysis completed\r\n");
    }
}
