use std::fmt;

/// Outcome categories the diagnostic can land on. Any other key is still
/// syntactically valid but resolves to the not-found view.
pub const KNOWN_KEYS: [&str; 5] = [
    "filtering-failure",
    "premature-disqualification",
    "interview-drift",
    "conversion-breakdown",
    "search-exhaustion",
];

/// Identifier of one content variant, always made of `[a-z0-9-]` and never
/// empty. Build one through [`ContentKey::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentKey(String);

impl ContentKey {
    /// Trims, lowercases and drops every character outside `[a-z0-9-]`.
    /// Returns `None` when nothing survives.
    pub fn normalize(raw: &str) -> Option<Self> {
        let safe: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
            .collect();

        if safe.is_empty() {
            None
        } else {
            Some(Self(safe))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        KNOWN_KEYS.contains(&self.0.as_str())
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_case_and_punctuation() {
        let key = ContentKey::normalize("  Interview-Drift!! ").unwrap();
        assert_eq!(key.as_str(), "interview-drift");
        assert!(key.is_known());
    }

    #[test]
    fn empty_after_normalizing_is_none() {
        assert!(ContentKey::normalize("").is_none());
        assert!(ContentKey::normalize("   ").is_none());
        assert!(ContentKey::normalize("../?%").is_none());
    }

    #[test]
    fn path_characters_do_not_survive() {
        let key = ContentKey::normalize("../../etc/passwd?x=1").unwrap();
        assert_eq!(key.as_str(), "etcpasswdx1");
        assert!(!key.is_known());
    }

    #[test]
    fn every_known_key_is_already_normal() {
        for raw in KNOWN_KEYS {
            assert_eq!(ContentKey::normalize(raw).unwrap().as_str(), raw);
        }
    }
}
