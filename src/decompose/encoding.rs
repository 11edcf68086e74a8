//! Transfer-encoding resolution and quoted-printable decoding (RFC 2045).

use thiserror::Error;

use crate::model::part::Part;

/// Header name checked for a declared transfer encoding.
pub const TRANSFER_ENCODING_HEADER: &str = "Content-Transfer-Encoding";

/// The only encoding token this pipeline decodes.
pub const QUOTED_PRINTABLE_TOKEN: &str = "quoted-printable";

/// A malformed quoted-printable sequence.
///
/// This error is always soft: the walker recovers by keeping the raw
/// bytes and logging a warning. It never aborts a run.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuotedPrintableError {
    /// `=` at end of input with fewer than two bytes following.
    #[error("truncated escape sequence at byte {0}")]
    TruncatedEscape(usize),

    /// `=XY` where `XY` are not two hex digits (and not a soft break).
    #[error("invalid hex escape '={0}' at byte {1}")]
    InvalidHex(String, usize),
}

/// How a part's content is turned into decoded bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStrategy {
    /// Write content unchanged.
    Identity,
    /// Decode quoted-printable per RFC 2045.
    QuotedPrintable,
}

impl DecodeStrategy {
    /// Apply the strategy to raw content.
    ///
    /// Identity is infallible; only quoted-printable can fail, and that
    /// failure is recoverable by the caller (fall back to the raw bytes).
    pub fn apply(self, raw: &[u8]) -> Result<Vec<u8>, QuotedPrintableError> {
        match self {
            Self::Identity => Ok(raw.to_vec()),
            Self::QuotedPrintable => decode_quoted_printable(raw),
        }
    }
}

/// Select the decode strategy for a part.
///
/// A bare text payload carries no transfer-encoding header in this model,
/// so it always gets an optimistic quoted-printable attempt. An
/// attachment-like part is decoded only on an exact
/// `(Content-Transfer-Encoding, quoted-printable)` header match — the
/// lookup is case-sensitive on both name and value.
///
/// Any other declared encoding (base64, 8bit, binary) falls back to
/// Identity: not a semantically correct decode, but it preserves the
/// original bytes losslessly for manual follow-up. Never fails.
pub fn resolve(part: &Part) -> DecodeStrategy {
    if !part.is_attachment_like {
        return DecodeStrategy::QuotedPrintable;
    }
    if part
        .headers
        .has_exact(TRANSFER_ENCODING_HEADER, QUOTED_PRINTABLE_TOKEN)
    {
        DecodeStrategy::QuotedPrintable
    } else {
        DecodeStrategy::Identity
    }
}

/// Decode quoted-printable content.
///
/// Handles `=XX` hex escapes and the soft line breaks `=\r\n` and `=\n`.
/// Output is bytes, not text: the decoded content may be binary.
pub fn decode_quoted_printable(input: &[u8]) -> Result<Vec<u8>, QuotedPrintableError> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        let b = input[i];
        if b != b'=' {
            out.push(b);
            i += 1;
            continue;
        }

        // Soft line break: =CRLF or =LF
        if input.get(i + 1) == Some(&b'\r') && input.get(i + 2) == Some(&b'\n') {
            i += 3;
            continue;
        }
        if input.get(i + 1) == Some(&b'\n') {
            i += 2;
            continue;
        }

        match (input.get(i + 1), input.get(i + 2)) {
            (Some(&hi), Some(&lo)) => match (hex_value(hi), hex_value(lo)) {
                (Some(h), Some(l)) => {
                    out.push((h << 4) | l);
                    i += 3;
                }
                _ => {
                    let escape = String::from_utf8_lossy(&input[i + 1..i + 3]).into_owned();
                    return Err(QuotedPrintableError::InvalidHex(escape, i));
                }
            },
            _ => return Err(QuotedPrintableError::TruncatedEscape(i)),
        }
    }

    Ok(out)
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'A'..=b'F' => Some(b - b'A' + 10),
        b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}
