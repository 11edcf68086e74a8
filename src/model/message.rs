//! The portable message representation produced by a loader.

use super::headers::Headers;
use super::part::PartSource;

/// One parsed email message, immutable once produced by a loader and
/// scoped to a single case run.
#[derive(Debug, Clone)]
pub struct Message {
    /// Top-level headers, verbatim and in original order.
    pub headers: Headers,

    /// The message body, resolved into its shape exactly once at the
    /// loader boundary.
    pub body: MessageBody,

    /// The raw byte serialization of the whole message, used for the
    /// portable `.eml` artifact.
    raw: Vec<u8>,
}

/// The shape of a message body.
///
/// A body is either a single text payload or an ordered sequence of
/// part-like objects. Anything else the container hands us is carried as
/// `Unsupported` so the normalizer can reject it explicitly instead of
/// each consumer re-checking the shape.
#[derive(Debug, Clone)]
pub enum MessageBody {
    /// A single text payload with no part structure.
    BareText(String),

    /// An ordered sequence of part-like objects.
    Parts(Vec<PartSource>),

    /// A body shape outside the model (e.g. a nested `message/rfc822`
    /// root). The string names the offending content kind.
    Unsupported(String),
}

impl Message {
    pub fn new(headers: Headers, body: MessageBody, raw: Vec<u8>) -> Self {
        Self { headers, body, raw }
    }

    /// Byte serialization of the message for the `.eml` artifact.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }
}
