use std::fmt;
use std::str::FromStr;

/// A one-based position into the currently visible client list.
///
/// Commands take these rather than raw offsets so that "the 1st client" in
/// user feedback and "the 1st client" in a request can never drift apart.
/// The zero-based form is only ever produced on the way into a slice lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(usize);

impl Index {
    /// Builds an index from the user-facing one-based form.
    ///
    /// Returns `None` for zero, which has no one-based meaning.
    pub fn from_one_based(value: usize) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Index(value))
        }
    }

    /// Builds an index from a zero-based offset.
    pub fn from_zero_based(value: usize) -> Self {
        Index(value + 1)
    }

    pub fn one_based(&self) -> usize {
        self.0
    }

    pub fn zero_based(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Index {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n) => Index::from_one_based(n)
                .ok_or_else(|| "Index must be a positive number".to_string()),
            Err(_) => Err(format!("Invalid index: {}", s)),
        }
    }
}
