//! Built-in type table.

use std::sync::LazyLock;

use crate::{ChangelogConfig, TypeRule};

/// Grouping key of the catch-all rule that collects unrecognised types.
pub const CATCH_ALL_TYPE: &str = "other";

/// Aliases and label of each built-in rule, in display order.
const BUILTIN_TYPES: &[(&[&str], &str)] = &[
    (&["feat", "feature", "added"], "🎉 New Features"),
    (&["fix", "bugfix", "fixed"], "🐛 Bugfixes"),
    (&["improvements", "enhancement"], "🔨 Improvements"),
    (&["perf"], "🏎️ Performance Improvements"),
    (&["build", "ci"], "🏗️ Build System"),
    (&["refactor", "refactoring"], "🪚 Refactoring"),
    (&["doc", "docs", "document"], "📚 Documentation Changes"),
    (&["test", "tests"], "🔍 Tests"),
    (&["style"], "💅 Code Style Changes"),
    (&["chore"], "🧹 Chores"),
    (&[CATCH_ALL_TYPE], "Other Changes"),
];

static BUILTIN: LazyLock<ChangelogConfig> = LazyLock::new(|| ChangelogConfig {
    exclude_types: default_exclude_types(),
    types: default_types(),
});

/// Returns the process-wide built-in configuration.
pub(crate) fn builtin() -> &'static ChangelogConfig {
    &BUILTIN
}

pub(crate) fn default_types() -> Vec<TypeRule> {
    BUILTIN_TYPES
        .iter()
        .map(|(aliases, label)| TypeRule::new(aliases.iter().copied(), *label))
        .collect()
}

pub(crate) fn default_exclude_types() -> Vec<String> {
    vec![CATCH_ALL_TYPE.to_string()]
}
