//! Policy tag value object.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{collapse_whitespace, non_whitespace_len, FieldError};

static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[A-Za-z0-9 .,'~*@%_!?+$\[\]()"-]+$"#).expect("valid tag regex")
});

const MAX_LEN: usize = 150;

/// Canonical text of the priority marker.
const PRIORITY_TEXT: &str = "Priority";

/// Whether a tag is an ordinary policy label or the priority marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagKind {
    Plain,
    Priority,
}

/// A policy label attached to a client.
///
/// Tags allow letters, digits and a small punctuation set, up to 150
/// non-whitespace characters. Normalization collapses whitespace and
/// title-cases each word, so `"life insurance"` becomes `"Life Insurance"`.
///
/// One tag text is special: anything that spells `priority` once casing and
/// whitespace are ignored comes out as the single canonical priority tag,
/// distinguished by [`TagKind::Priority`]. Code that treats the priority
/// marker differently (the add and policy commands do) checks the kind, not
/// the text.
///
/// # Example
///
/// ```
/// use clientele::fields::Tag;
///
/// let tag = Tag::new("life insurance").unwrap();
/// assert_eq!(tag.text(), "Life Insurance");
/// assert!(!tag.is_priority());
///
/// assert_eq!(Tag::new("PRIORITY").unwrap(), Tag::priority());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag {
    text: String,
    kind: TagKind,
}

impl Tag {
    /// Normalizes and validates a raw tag, routing `priority` spellings to
    /// the canonical priority tag.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidTag` carrying the raw input.
    pub fn new(raw: impl Into<String>) -> Result<Self, FieldError> {
        let raw = raw.into();

        if spells_priority(&raw) {
            return Ok(Self::priority());
        }

        let normalized = normalize(&raw);
        if !is_valid_normalized(&normalized) {
            return Err(FieldError::InvalidTag(raw));
        }

        Ok(Self {
            text: normalized,
            kind: TagKind::Plain,
        })
    }

    /// The canonical priority tag.
    pub fn priority() -> Self {
        Self {
            text: PRIORITY_TEXT.to_string(),
            kind: TagKind::Priority,
        }
    }

    /// Whether `raw` would be accepted by [`Tag::new`].
    pub fn is_valid(raw: &str) -> bool {
        spells_priority(raw) || is_valid_normalized(&normalize(raw))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn is_priority(&self) -> bool {
        self.kind == TagKind::Priority
    }
}

/// Case- and whitespace-insensitive test for the reserved priority spelling.
fn spells_priority(raw: &str) -> bool {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .eq("priority".chars())
}

fn normalize(raw: &str) -> String {
    collapse_whitespace(raw)
        .split(' ')
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

fn is_valid_normalized(tag: &str) -> bool {
    !tag.is_empty() && TAG_RE.is_match(tag) && non_whitespace_len(tag) <= MAX_LEN
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.text.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tag::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn title_cases_each_word() {
        assert_eq!(Tag::new("life insurance").unwrap().text(), "Life Insurance");
        assert_eq!(Tag::new("LIFE").unwrap().text(), "Life");
        assert_eq!(Tag::new("heaLTH plan 2024").unwrap().text(), "Health Plan 2024");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(Tag::new("  life   insurance ").unwrap().text(), "Life Insurance");
    }

    #[test]
    fn accepts_the_allowed_punctuation() {
        for raw in ["50%", "a+b", "Plan (2024)", "\"quoted\"", "[bracketed]", "why?!", "x~y", "me@work"] {
            assert!(Tag::is_valid(raw), "expected `{}` to be a valid tag", raw);
        }
    }

    #[test]
    fn rejects_characters_outside_the_set() {
        assert!(!Tag::is_valid("#hash"));
        assert!(!Tag::is_valid("a/b"));
        assert!(!Tag::is_valid("semi;colon"));
        assert!(!Tag::is_valid(""));
        assert!(!Tag::is_valid("   "));
    }

    #[test]
    fn enforces_length_limit_ignoring_whitespace() {
        assert!(Tag::is_valid(&"a".repeat(150)));
        assert!(!Tag::is_valid(&"a".repeat(151)));
    }

    #[test]
    fn priority_spellings_collapse_to_the_canonical_tag() {
        for raw in ["priority", "PRIORITY", "PrIoRiTy", " priority ", "prio rity"] {
            let tag = Tag::new(raw).unwrap();
            assert_eq!(tag, Tag::priority(), "from `{}`", raw);
            assert_eq!(tag.text(), "Priority");
            assert_eq!(tag.kind(), TagKind::Priority);
            assert!(tag.is_priority());
        }
    }

    #[test]
    fn plain_tags_are_not_priority() {
        let tag = Tag::new("priorities").unwrap();
        assert_eq!(tag.kind(), TagKind::Plain);
        assert!(!tag.is_priority());
        assert_eq!(tag.text(), "Priorities");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["life insurance", "PRIORITY", "Plan (2024)"] {
            let once = Tag::new(raw).unwrap();
            let twice = Tag::new(once.text()).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn displays_in_brackets() {
        assert_eq!(Tag::new("health").unwrap().to_string(), "[Health]");
    }

    #[test]
    fn orders_by_text_in_sets() {
        let mut tags = BTreeSet::new();
        tags.insert(Tag::new("zeta").unwrap());
        tags.insert(Tag::new("alpha").unwrap());
        tags.insert(Tag::priority());

        let texts: Vec<_> = tags.iter().map(Tag::text).collect();
        assert_eq!(texts, vec!["Alpha", "Priority", "Zeta"]);
    }

    #[test]
    fn error_carries_raw_input() {
        let err = Tag::new("#hash").unwrap_err();
        assert_eq!(err, FieldError::InvalidTag("#hash".to_string()));
    }

    #[test]
    fn serde_round_trip_preserves_kind() {
        let tag = Tag::priority();
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, "\"Priority\"");

        let back: Tag = serde_json::from_str(&json).unwrap();
        assert!(back.is_priority());

        let plain: Tag = serde_json::from_str("\"Health\"").unwrap();
        assert!(!plain.is_priority());

        let bad: Result<Tag, _> = serde_json::from_str("\"#hash\"");
        assert!(bad.is_err());
    }
}
