//! Self-validating field types.
//!
//! Every field a [`Client`](crate::model::Client) carries is one of these
//! newtypes. Construction is the only gate: `new` normalizes the raw input
//! (whitespace, casing, canonical punctuation) and then validates the
//! normalized form, so a value that exists is always well-formed and always
//! already normalized. Normalization is idempotent: feeding a field's own
//! string back through `new` yields an equal value.
//!
//! Each type also exposes `is_valid` for callers that want to probe input
//! without constructing, and serializes as its plain string form, with
//! deserialization running back through the validating constructor.

mod address;
mod email;
mod name;
mod phone;
mod tag;

pub use address::Address;
pub use email::Email;
pub use name::Name;
pub use phone::Phone;
pub use tag::{Tag, TagKind};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("invalid name `{0}`: letters and digits, joined by single spaces, apostrophes, hyphens, slashes or at-signs, at most 150 characters")]
    InvalidName(String),

    #[error("invalid phone `{0}`: an optional `+<1-3 digit>` prefix separated by a space, then 3 to 13 digits, or `-` for unknown")]
    InvalidPhone(String),

    #[error("invalid email `{0}`: expected local-part@domain, or `-` for unknown")]
    InvalidEmail(String),

    #[error("invalid address `{0}`: must be non-empty and at most 150 characters")]
    InvalidAddress(String),

    #[error("invalid tag `{0}`: letters, digits and limited punctuation, at most 150 characters")]
    InvalidTag(String),
}

/// Trims and squeezes every whitespace run down to a single space.
pub(crate) fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Character count ignoring whitespace, the unit the length limits use.
pub(crate) fn non_whitespace_len(s: &str) -> usize {
    s.chars().filter(|c| !c.is_whitespace()).count()
}
