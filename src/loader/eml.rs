//! Loader for `.eml` files (RFC 5322 messages).
//!
//! Uses `mail-parser` for structure detection and part metadata, but
//! keeps every payload verbatim: part content is sliced out of the raw
//! bytes still transfer-encoded, and header pairs are re-read from the
//! raw header block so names and values stay exactly as written.

use std::path::Path;

use mail_parser::{MessageParser, MimeHeaders, PartType};

use crate::error::{CaseError, Result};
use crate::model::headers::Headers;
use crate::model::message::{Message, MessageBody};
use crate::model::part::PartSource;

/// Load and parse a single `.eml` file.
pub fn load_eml(path: impl AsRef<Path>) -> Result<Message> {
    let path = path.as_ref();
    let raw = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CaseError::FileNotFound(path.to_path_buf())
        } else {
            CaseError::io(path, e)
        }
    })?;

    parse_eml_bytes(&raw).ok_or_else(|| CaseError::MessageParse(path.to_path_buf()))
}

/// Parse raw message bytes into the portable model.
///
/// Returns `None` if the bytes do not form a parsable message.
pub fn parse_eml_bytes(raw: &[u8]) -> Option<Message> {
    let parser = MessageParser::default();
    let parsed = parser.parse(raw)?;
    let root = parsed.parts.first()?;

    let headers = unfold_header_block(&raw[root.offset_header..root.offset_body]);

    let body = match &root.body {
        PartType::Multipart(children) => {
            let mut sources = Vec::with_capacity(children.len());
            for &child in children {
                let part = parsed.parts.get(child)?;
                sources.push(PartSource {
                    headers: unfold_header_block(&raw[part.offset_header..part.offset_body]),
                    raw_content: raw[part.offset_body..part.offset_end].to_vec(),
                    filename: part.attachment_name().map(String::from),
                });
            }
            MessageBody::Parts(sources)
        }
        // A nested message root is outside the one-level model; carried
        // as-is so the normalizer can reject it explicitly.
        PartType::Message(_) => MessageBody::Unsupported("message/rfc822".to_string()),
        PartType::Text(_) | PartType::Html(_) | PartType::Binary(_) | PartType::InlineBinary(_) => {
            MessageBody::BareText(decode_text_bytes(&raw[root.offset_body..root.offset_end]))
        }
    };

    Some(Message::new(headers, body, raw.to_vec()))
}

/// Decode raw bytes to a string.
///
/// Tries UTF-8 first, then falls back to Windows-1252 (which accepts
/// every byte).
fn decode_text_bytes(bytes: &[u8]) -> String {
    // Strip BOM if present
    let bytes = if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        &bytes[3..]
    } else {
        bytes
    };

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

/// Unfold a raw header block into ordered `(name, value)` pairs.
///
/// Continuation lines (starting with space or tab) are joined with the
/// previous header. Names keep their original case — downstream lookups
/// are case-sensitive by contract.
fn unfold_header_block(block: &[u8]) -> Headers {
    let text = decode_text_bytes(block);
    let mut result: Vec<(String, String)> = Vec::new();

    for line in text.lines() {
        if line.starts_with(' ') || line.starts_with('\t') {
            if let Some(last) = result.last_mut() {
                last.1.push(' ');
                last.1.push_str(line.trim());
            }
        } else if let Some(colon_pos) = line.find(':') {
            let name = line[..colon_pos].trim().to_string();
            let value = line[colon_pos + 1..].trim().to_string();
            result.push((name, value));
        }
        // Lines without a colon and not a continuation are silently skipped
    }

    Headers::new(result)
}
