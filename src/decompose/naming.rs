//! Deterministic artifact file names.
//!
//! Names are a pure function of `(index, filename, is_attachment_like)`
//! and unique within one run because the index is unique. The original
//! filename is used verbatim here; separator sanitization is owned by the
//! case workspace at write time.

use crate::model::part::Part;

/// File name for a part's raw (still-encoded) artifact.
pub fn raw_name(part: &Part) -> String {
    match (&part.filename, part.is_attachment_like) {
        (Some(name), _) => format!("payload_{}_raw__{}.txt", part.index, name),
        (None, true) => format!("payload_{}_raw.txt", part.index),
        (None, false) => format!("payload_{}_rawstr.txt", part.index),
    }
}

/// File name for a part's decoded artifact.
///
/// A present filename is preserved with its original extension so the
/// decoded attachment opens with the right tooling.
pub fn decoded_name(part: &Part) -> String {
    match (&part.filename, part.is_attachment_like) {
        (Some(name), _) => format!("payload_{}_decoded__{}", part.index, name),
        (None, true) => format!("payload_{}_decoded.txt", part.index),
        (None, false) => format!("payload_{}_decoded_quopri.txt", part.index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::headers::Headers;

    fn part(index: usize, filename: Option<&str>, attachment_like: bool) -> Part {
        Part {
            index,
            headers: Headers::empty(),
            raw_content: Vec::new(),
            filename: filename.map(String::from),
            is_attachment_like: attachment_like,
        }
    }

    #[test]
    fn test_names_with_filename() {
        let p = part(2, Some("invoice.pdf"), true);
        assert_eq!(raw_name(&p), "payload_2_raw__invoice.pdf.txt");
        assert_eq!(decoded_name(&p), "payload_2_decoded__invoice.pdf");
    }

    #[test]
    fn test_names_attachment_without_filename() {
        let p = part(1, None, true);
        assert_eq!(raw_name(&p), "payload_1_raw.txt");
        assert_eq!(decoded_name(&p), "payload_1_decoded.txt");
    }

    #[test]
    fn test_names_bare_payload() {
        let p = part(0, None, false);
        assert_eq!(raw_name(&p), "payload_0_rawstr.txt");
        assert_eq!(decoded_name(&p), "payload_0_decoded_quopri.txt");
    }

    #[test]
    fn test_names_are_deterministic() {
        let p = part(3, Some("a b.txt"), true);
        assert_eq!(raw_name(&p), raw_name(&p));
        assert_eq!(decoded_name(&p), "payload_3_decoded__a b.txt");
    }
}
