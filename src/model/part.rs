//! Body parts: the unit the decomposition pipeline operates on.

use super::headers::Headers;

/// One part-like object as delivered by a loader, prior to indexing.
///
/// `raw_content` is the part's serialized representation exactly as it
/// appears in the source message — still transfer-encoded. Decoding
/// happens later, in the decomposition pipeline.
#[derive(Debug, Clone)]
pub struct PartSource {
    /// The part's own header block, verbatim and in original order.
    pub headers: Headers,

    /// Content bytes prior to any transfer decoding.
    pub raw_content: Vec<u8>,

    /// Original filename from the part metadata, if any.
    pub filename: Option<String>,
}

/// One indexed part of a message body.
///
/// `index` is the 0-based position within the body sequence. It is unique
/// within a message and matches output ordering exactly; artifact naming
/// depends on it.
#[derive(Debug, Clone)]
pub struct Part {
    pub index: usize,
    pub headers: Headers,
    pub raw_content: Vec<u8>,
    pub filename: Option<String>,

    /// True if the part carries its own header/filename metadata, false
    /// if it stands in for a bare text body.
    pub is_attachment_like: bool,
}

impl Part {
    /// Build the single part representing a bare text body.
    pub fn bare(text: &str) -> Self {
        Self {
            index: 0,
            headers: Headers::empty(),
            raw_content: text.as_bytes().to_vec(),
            filename: None,
            is_attachment_like: false,
        }
    }

    /// Build an attachment-like part from a loader source at `index`.
    pub fn from_source(index: usize, source: &PartSource) -> Self {
        Self {
            index,
            headers: source.headers.clone(),
            raw_content: source.raw_content.clone(),
            filename: source.filename.clone(),
            is_attachment_like: true,
        }
    }
}
