//! Body normalization: one uniform sequence-of-parts view.

use crate::error::{CaseError, Result};
use crate::model::message::MessageBody;
use crate::model::part::Part;

/// Normalize a message body into an ordered part sequence.
///
/// A bare text body becomes exactly one non-attachment part at index 0.
/// A part sequence is mapped one to one, in original order, with `index`
/// assigned from position. Never reorders, filters, or merges.
///
/// # Errors
///
/// Returns [`CaseError::MalformedBody`] for a body shape outside the
/// model. Nothing has been written at that point.
pub fn normalize(body: &MessageBody) -> Result<Vec<Part>> {
    match body {
        MessageBody::BareText(text) => Ok(vec![Part::bare(text)]),
        MessageBody::Parts(sources) => Ok(sources
            .iter()
            .enumerate()
            .map(|(index, source)| Part::from_source(index, source))
            .collect()),
        MessageBody::Unsupported(kind) => Err(CaseError::MalformedBody(kind.clone())),
    }
}
