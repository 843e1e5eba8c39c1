//! Email value object.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::FieldError;

/// Local part: alphanumeric runs joined by single `+`, `_`, `.` or `-`.
/// Domain: dot-separated labels of alphanumeric runs joined by single
/// hyphens. The final-label length rule lives outside the regex.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+(?:[+_.-][A-Za-z0-9]+)*@[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*(?:\.[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*)*$",
    )
    .expect("valid email regex")
});

/// Marks an email address the user does not know.
const UNKNOWN: &str = "-";

/// A client's email address, or the `-` sentinel for "unknown".
///
/// Normalization only trims surrounding whitespace; the interior must
/// already be well-formed. The last domain label must be at least two
/// characters, so `a@bc` passes and `a@b` does not.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Email(String);

impl Email {
    /// Trims and validates a raw email address.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidEmail` carrying the raw input.
    pub fn new(raw: impl Into<String>) -> Result<Self, FieldError> {
        let raw = raw.into();
        let normalized = raw.trim().to_string();

        if !is_valid_normalized(&normalized) {
            return Err(FieldError::InvalidEmail(raw));
        }

        Ok(Self(normalized))
    }

    /// The sentinel value for an address the user does not know.
    pub fn unknown() -> Self {
        Self(UNKNOWN.to_string())
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN
    }

    /// Whether `raw` would be accepted by [`Email::new`].
    pub fn is_valid(raw: &str) -> bool {
        is_valid_normalized(raw.trim())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_valid_normalized(email: &str) -> bool {
    if email == UNKNOWN {
        return true;
    }
    if !EMAIL_RE.is_match(email) {
        return false;
    }

    // The regex guarantees exactly one '@'; the final label carries the
    // two-character minimum.
    let domain = email.rsplit('@').next().unwrap_or_default();
    let last_label = domain.rsplit('.').next().unwrap_or_default();
    last_label.len() >= 2
}

impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Email::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
