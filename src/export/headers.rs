//! Header report: all header pairs rendered into the audit log.

use crate::case::AuditLog;
use crate::model::message::Message;

/// Append every `(name, value)` header pair to the audit log, verbatim
/// and in original order, tab-aligned like the rest of the report.
pub fn log_headers(message: &Message, audit: &mut AuditLog) {
    audit.info("Printing email headers:");
    for (name, value) in message.headers.iter() {
        audit.note(format!("{name}:\t {value}"));
    }
}
