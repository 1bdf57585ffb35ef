//! Render pass over a set of commits.

use tagscribe_commit::Commit;
use tagscribe_config::TypeRule;
use tagscribe_plugin::ChangelogRenderer;
use tracing::{debug, info};

/// Commits grouped under one type rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// The rule the commits were classified under.
    pub rule: &'a TypeRule,

    /// Commits in input order.
    pub commits: Vec<Commit>,
}

impl Section<'_> {
    /// Returns the section heading.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.rule.label
    }
}

/// Orchestrates one changelog render pass.
pub struct Pipeline {
    renderer: Box<dyn ChangelogRenderer>,
}

impl Pipeline {
    /// Creates a new pipeline around the given renderer.
    #[must_use]
    pub fn new(renderer: Box<dyn ChangelogRenderer>) -> Self {
        Self { renderer }
    }

    /// Returns a reference to the renderer.
    pub fn renderer(&self) -> &dyn ChangelogRenderer {
        self.renderer.as_ref()
    }

    /// Groups commits by the first matching rule.
    ///
    /// Sections come out in table order. Excluded and empty groups are
    /// skipped, as are commits with an unknown type when the table has no
    /// catch-all rule.
    pub fn group(&self, commits: &[Commit]) -> Vec<Section<'_>> {
        let config = self.renderer.config();
        let mut buckets: Vec<Vec<Commit>> = vec![Vec::new(); config.types.len()];

        for commit in commits {
            let Some(index) = config.rule_index(&commit.r#type) else {
                debug!(
                    hash = %commit.short_hash(),
                    kind = %commit.r#type,
                    subject = %commit.subject,
                    "skipping commit with unknown type"
                );
                continue;
            };
            buckets[index].push(commit.clone());
        }

        config
            .types
            .iter()
            .zip(buckets)
            .filter(|(rule, bucket)| {
                if bucket.is_empty() {
                    return false;
                }
                if config.is_excluded(rule) {
                    debug!(key = rule.key(), commits = bucket.len(), "excluding group");
                    return false;
                }
                true
            })
            .map(|(rule, commits)| Section { rule, commits })
            .collect()
    }

    /// Renders every non-excluded section and concatenates the output.
    pub fn render_changes(&self, commits: &[Commit]) -> String {
        self.group(commits)
            .iter()
            .map(|section| {
                self.renderer
                    .render_type_section(section.label(), &section.commits)
            })
            .collect()
    }

    /// Renders a full changelog entry for `release`.
    pub fn render(&self, release: &str, commits: &[Commit]) -> String {
        let changes = self.render_changes(commits);
        let changelog = self.renderer.render_changelog(release, &changes);

        info!(
            release,
            commits = commits.len(),
            renderer = self.renderer.name(),
            "rendered changelog entry"
        );
        changelog
    }
}
