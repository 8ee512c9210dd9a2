//! URL fragment handling.
//!
//! The OAuth implicit flow returns its response parameters in the fragment
//! (`#access_token=...&token_type=bearer`). Fragments never reach a server,
//! so everything here works on the string read from the browser location.

use std::fmt;

/// The body of a non-empty URL fragment, without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    /// Normalizes a raw `location.hash` value.
    ///
    /// Accepts the value with or without its leading `#`. Returns `None` when
    /// there is no fragment body at all (`""` or `"#"`).
    #[must_use]
    pub fn from_hash(raw: &str) -> Option<Self> {
        let body = raw.strip_prefix('#').unwrap_or(raw);
        if body.is_empty() {
            None
        } else {
            Some(Self(body.to_string()))
        }
    }

    /// Returns the fragment body.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the fragment with its leading `#`, exactly as it appeared in
    /// the location.
    #[must_use]
    pub fn to_hash(&self) -> String {
        format!("#{}", self.0)
    }

    /// Returns true if the literal substring `needle` occurs in the body.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    /// Parses the body as urlencoded parameters.
    #[must_use]
    pub fn parameters(&self) -> FragmentParameters {
        FragmentParameters::parse(&self.0)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Name/value pairs parsed from a fragment body.
///
/// Parsing is `application/x-www-form-urlencoded`, the same rules the
/// browser's `URLSearchParams` applies: `+` decodes to a space, percent
/// escapes are decoded, a pair without `=` has an empty value, and empty
/// pairs are skipped. Duplicate names are kept in order and [`get`] returns
/// the first one.
///
/// [`get`]: FragmentParameters::get
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentParameters {
    pairs: Vec<(String, String)>,
}

impl FragmentParameters {
    /// Parses a fragment body (without the leading `#`).
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let pairs = form_urlencoded::parse(body.as_bytes())
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Returns the first value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if any pair is named `name`, whatever its value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(n, _)| n == name)
    }

    /// Number of pairs, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hash_strips_leading_hash() {
        let fragment = Fragment::from_hash("#access_token=abc").expect("fragment");
        assert_eq!(fragment.as_str(), "access_token=abc");
        assert_eq!(fragment.to_hash(), "#access_token=abc");
    }

    #[test]
    fn from_hash_accepts_bare_body() {
        let fragment = Fragment::from_hash("foo=bar").expect("fragment");
        assert_eq!(fragment.as_str(), "foo=bar");
    }

    #[test]
    fn from_hash_empty_is_none() {
        assert!(Fragment::from_hash("").is_none());
        assert!(Fragment::from_hash("#").is_none());
    }

    #[test]
    fn only_one_hash_is_stripped() {
        let fragment = Fragment::from_hash("##x").expect("fragment");
        assert_eq!(fragment.as_str(), "#x");
    }

    #[test]
    fn display_includes_hash() {
        let fragment = Fragment::from_hash("a=1").expect("fragment");
        assert_eq!(fragment.to_string(), "#a=1");
    }

    #[test]
    fn parse_decodes_plus_and_percent() {
        let params = FragmentParameters::parse("error_description=user+cancelled%21");
        assert_eq!(params.get("error_description"), Some("user cancelled!"));
    }

    #[test]
    fn parse_pair_without_equals_has_empty_value() {
        let params = FragmentParameters::parse("error&state=xyz");
        assert!(params.contains("error"));
        assert_eq!(params.get("error"), Some(""));
        assert_eq!(params.get("state"), Some("xyz"));
    }

    #[test]
    fn parse_skips_empty_pairs() {
        let params = FragmentParameters::parse("&&a=1&&");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("a"), Some("1"));
    }

    #[test]
    fn get_returns_first_duplicate() {
        let params = FragmentParameters::parse("error=first&error=second");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("error"), Some("first"));
    }

    #[test]
    fn empty_body_has_no_pairs() {
        let params = FragmentParameters::parse("");
        assert!(params.is_empty());
        assert_eq!(params.get("error"), None);
    }

    #[test]
    fn iter_preserves_order() {
        let params = FragmentParameters::parse("b=2&a=1");
        let names: Vec<_> = params.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
