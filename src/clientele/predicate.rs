//! Keyword search predicates.

use serde::{Deserialize, Serialize};

use crate::model::Client;

/// A keyword test over a client's name and tags.
///
/// Keywords arrive pre-split (tokenizing is the caller's job) and match
/// **whole words** only, case-insensitively: `yeoh` matches `Alex Yeoh`,
/// `yeo` does not. A keyword counts as matched when it appears in the name
/// or in any tag's text.
///
/// `Any` is the OR form, `All` the AND form. An empty keyword list matches
/// nothing under either; there is no "match everything" predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientPredicate {
    Any(Vec<String>),
    All(Vec<String>),
}

impl ClientPredicate {
    pub fn any<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Any(keywords.into_iter().map(Into::into).collect())
    }

    pub fn all<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::All(keywords.into_iter().map(Into::into).collect())
    }

    pub fn keywords(&self) -> &[String] {
        match self {
            Self::Any(keywords) | Self::All(keywords) => keywords,
        }
    }

    pub fn matches(&self, client: &Client) -> bool {
        match self {
            Self::Any(keywords) => {
                !keywords.is_empty() && keywords.iter().any(|k| keyword_matches(client, k))
            }
            Self::All(keywords) => {
                !keywords.is_empty() && keywords.iter().all(|k| keyword_matches(client, k))
            }
        }
    }
}

fn keyword_matches(client: &Client, keyword: &str) -> bool {
    contains_word_ignore_case(client.name().as_str(), keyword)
        || client
            .tags()
            .iter()
            .any(|tag| contains_word_ignore_case(tag.text(), keyword))
}

/// Whole-word, case-insensitive containment. The field grammars are ASCII,
/// so ASCII folding is all the casing this needs.
fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim();
    if word.is_empty() {
        return false;
    }
    sentence
        .split_whitespace()
        .any(|candidate| candidate.eq_ignore_ascii_case(word))
}
