//! Tag changelog renderer plugin.

use std::fmt::Write;

use tagscribe_commit::Commit;
use tagscribe_config::ChangelogConfig;
use tagscribe_plugin::{ChangelogRenderer, Clock, Plugin, SystemClock};

/// Renders emoji-labelled `##` sections under a dated `#` release header.
///
/// ```text
/// # v1.2.0 - 2024-03-05
///
/// ## 🎉 New Features
/// - add widget
/// ```
pub struct TagChangelogRenderer {
    config: ChangelogConfig,
    clock: Box<dyn Clock>,
}

impl TagChangelogRenderer {
    /// Creates a renderer over the built-in type table, dated by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ChangelogConfig::default())
    }

    /// Creates a renderer over the given type table.
    #[must_use]
    pub fn with_config(config: ChangelogConfig) -> Self {
        Self {
            config,
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the date source used by the release header.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }
}

impl Default for TagChangelogRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for TagChangelogRenderer {
    fn name(&self) -> &'static str {
        "tag-changelog"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Renders emoji-labelled sections under a dated release header"
    }
}

impl ChangelogRenderer for TagChangelogRenderer {
    fn config(&self) -> &ChangelogConfig {
        &self.config
    }

    fn render_type_section(&self, label: &str, commits: &[Commit]) -> String {
        let mut text = format!("\n## {label}\n");

        for commit in commits {
            _ = writeln!(text, "- {}", commit.subject);
        }

        text
    }

    fn render_changelog(&self, release: &str, changes: &str) -> String {
        let date = self.clock.today().format("%Y-%m-%d");
        format!("# {release} - {date}\n{changes}\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use tagscribe_config::TypeRule;
    use tagscribe_plugin::FixedClock;

    fn fixed(year: i32, month: u32, day: u32) -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    fn commits(subjects: &[&str]) -> Vec<Commit> {
        subjects.iter().map(|s| Commit::new("fix", *s)).collect()
    }

    #[test]
    fn test_plugin_metadata() {
        let renderer = TagChangelogRenderer::new();
        assert_eq!(renderer.name(), "tag-changelog");
        assert_eq!(renderer.version(), env!("CARGO_PKG_VERSION"));
        assert!(!renderer.description().is_empty());
    }

    #[test]
    fn test_default_uses_builtin_table() {
        let renderer = TagChangelogRenderer::default();
        assert_eq!(renderer.types().len(), 11);
        assert_eq!(renderer.exclude_types(), ["other".to_string()]);
        assert_eq!(renderer.config(), ChangelogConfig::builtin());
    }

    #[test]
    fn test_custom_config() {
        let config = ChangelogConfig::new(vec![TypeRule::new(["feat"], "Features")], vec![]);
        let renderer = TagChangelogRenderer::with_config(config);
        assert_eq!(renderer.types().len(), 1);
        assert!(renderer.exclude_types().is_empty());
    }

    #[test]
    fn test_render_type_section() {
        let renderer = TagChangelogRenderer::new();
        let output =
            renderer.render_type_section("🐛 Bugfixes", &commits(&["fix null pointer", "fix race"]));
        assert_eq!(output, "\n## 🐛 Bugfixes\n- fix null pointer\n- fix race\n");
    }

    #[test]
    fn test_render_type_section_empty() {
        let renderer = TagChangelogRenderer::new();
        assert_eq!(renderer.render_type_section("🧹 Chores", &[]), "\n## 🧹 Chores\n");
    }

    #[test]
    fn test_render_type_section_preserves_order() {
        let renderer = TagChangelogRenderer::new();
        let output = renderer.render_type_section("L", &commits(&["c", "a", "b"]));
        let bullets: Vec<&str> = output.lines().filter(|l| l.starts_with("- ")).collect();
        assert_eq!(bullets, vec!["- c", "- a", "- b"]);
    }

    #[test]
    fn test_render_type_section_no_escaping() {
        let renderer = TagChangelogRenderer::new();
        let output =
            renderer.render_type_section("*bold* _label_", &commits(&["use `code` and [link](x)"]));
        assert_eq!(output, "\n## *bold* _label_\n- use `code` and [link](x)\n");
    }

    #[test]
    fn test_render_type_section_reads_subject_only() {
        let renderer = TagChangelogRenderer::new();
        let commit = Commit::new("feat", "add widget").with_hash("deadbeefcafe");
        let output = renderer.render_type_section("Features", &[commit]);
        assert_eq!(output, "\n## Features\n- add widget\n");
    }

    #[test]
    fn test_render_changelog() {
        let renderer = TagChangelogRenderer::new().with_clock(fixed(2024, 3, 5));
        let output = renderer.render_changelog("v1.2.0", "\n## 🎉 New Features\n- add widget\n");
        assert_eq!(
            output,
            "# v1.2.0 - 2024-03-05\n\n## 🎉 New Features\n- add widget\n\n\n"
        );
    }

    #[test]
    fn test_render_changelog_empty_changes() {
        let renderer = TagChangelogRenderer::new().with_clock(fixed(2023, 11, 20));
        assert_eq!(renderer.render_changelog("1.0.0", ""), "# 1.0.0 - 2023-11-20\n\n\n");
    }

    #[test]
    fn test_render_changelog_zero_pads_date() {
        let renderer = TagChangelogRenderer::new().with_clock(fixed(987, 1, 9));
        assert!(renderer.render_changelog("r", "").starts_with("# r - 0987-01-09\n"));
    }

    #[test]
    fn test_render_changelog_system_clock() {
        let renderer = TagChangelogRenderer::new();
        let before = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        let output = renderer.render_changelog("v0.1.0", "changes");
        let after = Utc::now().date_naive().format("%Y-%m-%d").to_string();

        let date = &output["# v0.1.0 - ".len()..][..10];
        assert!(date == before || date == after);
        assert!(output.ends_with("\nchanges\n\n"));
    }

    #[test]
    fn test_sections_feed_changelog() {
        let renderer = TagChangelogRenderer::new().with_clock(fixed(2024, 3, 5));
        let mut changes = renderer.render_type_section("🎉 New Features", &commits(&["add widget"]));
        changes.push_str(&renderer.render_type_section("🐛 Bugfixes", &commits(&["fix race"])));

        let output = renderer.render_changelog("v1.2.0", &changes);
        assert_eq!(
            output,
            "# v1.2.0 - 2024-03-05\n\n## 🎉 New Features\n- add widget\n\n## 🐛 Bugfixes\n- fix race\n\n\n"
        );
    }

    #[test]
    fn test_usable_as_trait_object() {
        let renderer: Box<dyn ChangelogRenderer> =
            Box::new(TagChangelogRenderer::new().with_clock(fixed(2024, 1, 1)));
        assert_eq!(renderer.render_type_section("X", &[]), "\n## X\n");
        assert_eq!(renderer.render_changelog("v1", "y"), "# v1 - 2024-01-01\ny\n\n");
    }
}
