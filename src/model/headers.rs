//! Ordered header list with an explicit exact-match lookup.

/// An ordered list of `(name, value)` header pairs.
///
/// Duplicates are permitted and order is preserved. Names and values are
/// stored verbatim as they appear in the source message; every lookup on
/// this type is case-SENSITIVE on both name and value. Callers that need
/// case-insensitive matching must normalize before constructing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    /// Wrap an ordered list of header pairs.
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// An empty header list (bare payloads carry no headers).
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// True if some pair matches `name` and `value` exactly,
    /// byte for byte.
    pub fn has_exact(&self, name: &str, value: &str) -> bool {
        self.0.iter().any(|(n, v)| n == name && v == value)
    }

    /// First value for an exact header name, if any.
    pub fn get_exact(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over the pairs in original order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Headers {
        Headers::new(vec![
            ("Content-Type".into(), "text/plain".into()),
            ("Content-Transfer-Encoding".into(), "quoted-printable".into()),
            ("Content-Type".into(), "text/html".into()),
        ])
    }

    #[test]
    fn test_has_exact_matches_verbatim() {
        let h = sample();
        assert!(h.has_exact("Content-Transfer-Encoding", "quoted-printable"));
        assert!(!h.has_exact("content-transfer-encoding", "quoted-printable"));
        assert!(!h.has_exact("Content-Transfer-Encoding", "Quoted-Printable"));
    }

    #[test]
    fn test_duplicates_preserved_in_order() {
        let h = sample();
        let types: Vec<&str> = h
            .iter()
            .filter(|(n, _)| n == "Content-Type")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(types, vec!["text/plain", "text/html"]);
        assert_eq!(h.get_exact("Content-Type"), Some("text/plain"));
    }
}
