//! Commit record for Tagscribe.
//!
//! The host hands commits to the renderers already classified. Only
//! [`Commit::subject`] ends up in rendered output.

use serde::{Deserialize, Serialize};

/// A commit as supplied by the changelog host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit hash (SHA), if the host knows it.
    #[serde(default)]
    pub hash: String,

    /// The conventional-commit type keyword (feat, fix, docs, etc.).
    #[serde(default)]
    pub r#type: String,

    /// The single-line commit subject.
    pub subject: String,
}

impl Commit {
    /// Creates a commit with the given type keyword and subject.
    #[must_use]
    pub fn new(r#type: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            hash: String::new(),
            r#type: r#type.into(),
            subject: subject.into(),
        }
    }

    /// Sets the hash.
    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_hash(&self) -> &str {
        self.hash
            .char_indices()
            .nth(7)
            .map_or(self.hash.as_str(), |(idx, _)| &self.hash[..idx])
    }
}
