//! Address value object.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{collapse_whitespace, non_whitespace_len, FieldError};

const MAX_LEN: usize = 150;

/// A client's postal address. Any non-empty text up to 150 non-whitespace
/// characters; normalization collapses whitespace runs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(String);

impl Address {
    pub fn new(raw: impl Into<String>) -> Result<Self, FieldError> {
        let raw = raw.into();
        let normalized = collapse_whitespace(&raw);

        if !is_valid_normalized(&normalized) {
            return Err(FieldError::InvalidAddress(raw));
        }

        Ok(Self(normalized))
    }

    /// Whether `raw` would be accepted by [`Address::new`].
    pub fn is_valid(raw: &str) -> bool {
        is_valid_normalized(&collapse_whitespace(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_valid_normalized(address: &str) -> bool {
    !address.is_empty() && non_whitespace_len(address) <= MAX_LEN
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
