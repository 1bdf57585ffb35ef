//! Changelog renderer trait.

use tagscribe_commit::Commit;
use tagscribe_config::{ChangelogConfig, TypeRule};

use super::Plugin;

/// The configuration a changelog host consumes: the type table, the
/// exclusion list and the two Markdown render callbacks.
///
/// Both render methods are total. They never validate their input and
/// never escape Markdown in labels or subjects.
pub trait ChangelogRenderer: Plugin {
    /// Returns the type table and exclusion list.
    fn config(&self) -> &ChangelogConfig;

    /// Ordered type rules used to classify and group commits.
    fn types(&self) -> &[TypeRule] {
        &self.config().types
    }

    /// Group keys to leave out of the changelog.
    fn exclude_types(&self) -> &[String] {
        &self.config().exclude_types
    }

    /// Renders one labelled section from the commits grouped under it.
    fn render_type_section(&self, label: &str, commits: &[Commit]) -> String;

    /// Wraps the concatenated section output in a dated release header.
    fn render_changelog(&self, release: &str, changes: &str) -> String;
}
