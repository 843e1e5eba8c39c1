use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fields::{Address, Email, Name, Phone, Tag};

/// An immutable client record.
///
/// Fields arrive pre-validated (they can only exist as field types) and
/// never change afterwards; an edit builds a new `Client` through one of the
/// `with_*` rebuilders. Tags sit in a `BTreeSet` keyed by tag text, so
/// iteration and display order are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Client {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl Client {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// The registry's identity rule: same normalized name and phone.
    ///
    /// Weaker than `==`, which compares every field. Two records for "the
    /// same client" may disagree on email, address or tags, and the registry
    /// will still refuse to hold both.
    pub fn is_same_client(&self, other: &Client) -> bool {
        self.name == other.name && self.phone == other.phone
    }

    /// Whether the priority marker is among this client's tags.
    pub fn has_priority(&self) -> bool {
        self.tags.iter().any(Tag::is_priority)
    }

    pub fn with_phone(&self, phone: Phone) -> Client {
        Client {
            phone,
            ..self.clone()
        }
    }

    pub fn with_email(&self, email: Email) -> Client {
        Client {
            email,
            ..self.clone()
        }
    }

    pub fn with_address(&self, address: Address) -> Client {
        Client {
            address,
            ..self.clone()
        }
    }

    pub fn with_tags(&self, tags: BTreeSet<Tag>) -> Client {
        Client {
            tags,
            ..self.clone()
        }
    }
}

/// The one-line form used in command feedback:
/// `NAME; Phone: P; Email: E; Address: A; Tags: [T1][T2]`.
impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Tags: ",
            self.name, self.phone, self.email, self.address
        )?;
        for tag in &self.tags {
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}
