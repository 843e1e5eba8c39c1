//! Name value object.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{collapse_whitespace, non_whitespace_len, FieldError};

/// Alphanumeric runs joined by single interior separators. A separator never
/// opens or closes a name and never doubles up.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+(?:[ '/@-][A-Za-z0-9]+)*$").expect("valid name regex"));

const MAX_LEN: usize = 150;

/// A client's name, normalized at construction.
///
/// Normalization collapses whitespace runs and lowercases the relationship
/// tokens `s/o` and `d/o` wherever they appear as a word, so `"Ramesh  S/O
/// Ravichandran"` and `"Ramesh s/o Ravichandran"` are the same name. The
/// grammar allows letters and digits joined by single spaces, apostrophes,
/// hyphens, slashes or at-signs, up to 150 non-whitespace characters.
///
/// # Example
///
/// ```
/// use clientele::fields::Name;
///
/// let name = Name::new("  Alex   Yeoh ").unwrap();
/// assert_eq!(name.as_str(), "Alex Yeoh");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    /// Normalizes and validates a raw name.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidName` carrying the raw input when the
    /// normalized form is empty, too long, or breaks the grammar.
    pub fn new(raw: impl Into<String>) -> Result<Self, FieldError> {
        let raw = raw.into();
        let normalized = normalize(&raw);

        if !is_valid_normalized(&normalized) {
            return Err(FieldError::InvalidName(raw));
        }

        Ok(Self(normalized))
    }

    /// Whether `raw` would be accepted by [`Name::new`].
    pub fn is_valid(raw: &str) -> bool {
        is_valid_normalized(&normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn normalize(raw: &str) -> String {
    collapse_whitespace(raw)
        .split(' ')
        .map(|word| {
            if word.eq_ignore_ascii_case("s/o") || word.eq_ignore_ascii_case("d/o") {
                word.to_ascii_lowercase()
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_valid_normalized(name: &str) -> bool {
    NAME_RE.is_match(name) && non_whitespace_len(name) <= MAX_LEN
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert!(Name::is_valid("Alex Yeoh"));
        assert!(Name::is_valid("Capital Tan"));
        assert!(Name::is_valid("O'Brien"));
        assert!(Name::is_valid("Jean-Luc"));
        assert!(Name::is_valid("12345"));
        assert!(Name::is_valid("David Roger Jackson Ray Jr 2nd"));
        assert!(Name::is_valid("a"));
    }

    #[test]
    fn accepts_relationship_and_handle_separators() {
        assert!(Name::is_valid("Ramesh s/o Ravichandran"));
        assert!(Name::is_valid("Priya d/o Kumar"));
        assert!(Name::is_valid("John@Doe"));
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert!(!Name::is_valid(""));
        assert!(!Name::is_valid("   "));
    }

    #[test]
    fn rejects_bad_separator_placement() {
        assert!(!Name::is_valid("-John"));
        assert!(!Name::is_valid("John-"));
        assert!(!Name::is_valid("John--Doe"));
        assert!(!Name::is_valid("John @ Doe"));
        assert!(!Name::is_valid("@John"));
        assert!(!Name::is_valid("'"));
    }

    #[test]
    fn rejects_characters_outside_the_grammar() {
        assert!(!Name::is_valid("peter*"));
        assert!(!Name::is_valid("ravi^kumar"));
        assert!(!Name::is_valid("tan_wei"));
    }

    #[test]
    fn collapses_whitespace() {
        let name = Name::new("  John \t  Doe  ").unwrap();
        assert_eq!(name.as_str(), "John Doe");
    }

    #[test]
    fn lowercases_relationship_tokens_only() {
        let name = Name::new("Ramesh S/O Ravichandran").unwrap();
        assert_eq!(name.as_str(), "Ramesh s/o Ravichandran");

        let name = Name::new("Priya D/o Kumar").unwrap();
        assert_eq!(name.as_str(), "Priya d/o Kumar");

        // Other tokens keep their casing.
        let name = Name::new("SOphia Tan").unwrap();
        assert_eq!(name.as_str(), "SOphia Tan");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["  John   Doe ", "Ramesh S/O Ravichandran", "O'Brien"] {
            let once = Name::new(raw).unwrap();
            let twice = Name::new(once.as_str()).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn enforces_length_limit_ignoring_whitespace() {
        let exactly = "a".repeat(150);
        assert!(Name::is_valid(&exactly));

        let split = format!("{} {}", "a".repeat(100), "b".repeat(50));
        assert!(Name::is_valid(&split));

        let over = "a".repeat(151);
        assert!(!Name::is_valid(&over));
    }

    #[test]
    fn error_carries_raw_input() {
        let err = Name::new("peter*").unwrap_err();
        assert_eq!(err, FieldError::InvalidName("peter*".to_string()));
    }

    #[test]
    fn serde_round_trip_and_rejection() {
        let name = Name::new("Alex Yeoh").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Alex Yeoh\"");

        let back: Name = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);

        let bad: Result<Name, _> = serde_json::from_str("\"peter*\"");
        assert!(bad.is_err());
    }
}
