//! Configuration schema.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builtin::{self, CATCH_ALL_TYPE};
use crate::{ConfigError, ConfigResult};

/// Maps a set of commit type keywords onto one changelog section label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRule {
    /// Type keywords (case-sensitive) grouped under this rule.
    pub types: Vec<String>,

    /// Section heading shown in the changelog.
    pub label: String,
}

impl TypeRule {
    /// Creates a new rule.
    #[must_use]
    pub fn new<I, S>(types: I, label: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            label: label.into(),
        }
    }

    /// Returns the grouping key (the first alias).
    #[must_use]
    pub fn key(&self) -> &str {
        self.types.first().map_or("", String::as_str)
    }

    /// Returns true if `keyword` is one of this rule's aliases.
    #[must_use]
    pub fn matches(&self, keyword: &str) -> bool {
        self.types.iter().any(|alias| alias == keyword)
    }
}

/// The type table and exclusion list handed to the changelog host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// Keys of groups left out of the rendered changelog.
    #[serde(default = "builtin::default_exclude_types", alias = "excludeTypes")]
    pub exclude_types: Vec<String>,

    /// Ordered type rules. Order is display order.
    #[serde(default = "builtin::default_types")]
    pub types: Vec<TypeRule>,
}

impl ChangelogConfig {
    /// Creates a config from explicit rules and exclusions.
    #[must_use]
    pub fn new(types: Vec<TypeRule>, exclude_types: Vec<String>) -> Self {
        Self {
            exclude_types,
            types,
        }
    }

    /// Returns the built-in configuration.
    #[must_use]
    pub fn builtin() -> &'static Self {
        builtin::builtin()
    }

    /// Returns the first rule listing `keyword` as an alias.
    #[must_use]
    pub fn classify(&self, keyword: &str) -> Option<&TypeRule> {
        self.types.iter().find(|rule| rule.matches(keyword))
    }

    /// Returns the catch-all rule, if the table has one.
    #[must_use]
    pub fn catch_all(&self) -> Option<&TypeRule> {
        self.classify(CATCH_ALL_TYPE)
    }

    /// Returns the index of the rule `keyword` is grouped under, filing
    /// unknown keywords under the catch-all rule.
    #[must_use]
    pub fn rule_index(&self, keyword: &str) -> Option<usize> {
        self.types
            .iter()
            .position(|rule| rule.matches(keyword))
            .or_else(|| {
                debug!(keyword, "unknown commit type, using catch-all rule");
                self.types
                    .iter()
                    .position(|rule| rule.matches(CATCH_ALL_TYPE))
            })
    }

    /// Like [`classify`](Self::classify), but files unknown keywords under
    /// the catch-all rule.
    #[must_use]
    pub fn rule_for(&self, keyword: &str) -> Option<&TypeRule> {
        self.rule_index(keyword).map(|index| &self.types[index])
    }

    /// Returns true if the rule's key is in the exclusion list.
    #[must_use]
    pub fn is_excluded(&self, rule: &TypeRule) -> bool {
        self.exclude_types
            .iter()
            .any(|excluded| excluded == rule.key())
    }

    /// Checks the table for empty rules and aliases claimed twice.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut owners: HashMap<&str, &str> = HashMap::new();

        for (index, rule) in self.types.iter().enumerate() {
            if rule.types.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "type rule #{} (`{}`) has no types",
                    index + 1,
                    rule.label
                )));
            }

            if rule.label.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "type rule `{}` has an empty label",
                    rule.key()
                )));
            }

            for alias in &rule.types {
                if let Some(owner) = owners.insert(alias, &rule.label) {
                    return Err(ConfigError::Invalid(format!(
                        "type `{alias}` is listed by both `{owner}` and `{}`",
                        rule.label
                    )));
                }
            }
        }

        Ok(())
    }

    /// Serializes the config as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
