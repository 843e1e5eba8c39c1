//! Phone value object.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::FieldError;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+\d{1,3} \d{3,13}$").expect("valid phone regex"));

/// Prefix assumed when the caller supplies a bare local number.
const DEFAULT_PREFIX: &str = "+65";

/// Marks a phone number the user does not know.
const UNKNOWN: &str = "-";

/// A client's phone number in canonical `+<prefix> <digits>` form, or the
/// `-` sentinel for "unknown".
///
/// An explicit international prefix must be written `+` followed by 1-3
/// digits and separated from the rest by whitespace; a number without one is
/// taken to be local and gets `+65` prepended. Whitespace inside the local
/// part is dropped, which must leave 3 to 13 digits.
///
/// # Example
///
/// ```
/// use clientele::fields::Phone;
///
/// assert_eq!(Phone::new("9123 4567").unwrap().as_str(), "+65 91234567");
/// assert_eq!(Phone::new("+44 20 7946 0958").unwrap().as_str(), "+44 2079460958");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Phone(String);

impl Phone {
    /// Normalizes and validates a raw phone number.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidPhone` carrying the raw input when the
    /// canonical form does not come out as `+<1-3 digits> <3-13 digits>`.
    pub fn new(raw: impl Into<String>) -> Result<Self, FieldError> {
        let raw = raw.into();
        let normalized = normalize(&raw);

        if !is_valid_normalized(&normalized) {
            return Err(FieldError::InvalidPhone(raw));
        }

        Ok(Self(normalized))
    }

    /// The sentinel value for a number the user does not know.
    pub fn unknown() -> Self {
        Self(UNKNOWN.to_string())
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN
    }

    /// Whether `raw` would be accepted by [`Phone::new`].
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
    let trimmed = raw.trim();
    if trimmed == UNKNOWN {
        return UNKNOWN.to_string();
    }

    match trimmed.strip_prefix('+') {
        Some(rest) => match rest.split_once(char::is_whitespace) {
            Some((prefix, local)) => {
                let local: String = local.chars().filter(|c| !c.is_whitespace()).collect();
                format!("+{} {}", prefix, local)
            }
            // No separator after the prefix; leave it for validation to reject.
            None => trimmed.to_string(),
        },
        None => {
            let local: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
            format!("{} {}", DEFAULT_PREFIX, local)
        }
    }
}

fn is_valid_normalized(phone: &str) -> bool {
    phone == UNKNOWN || PHONE_RE.is_match(phone)
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
