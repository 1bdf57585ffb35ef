//! Section command.

use clap::Args;
use tagscribe_commit::Commit;
use tagscribe_plugin::ChangelogRenderer;
use tagscribe_renderer_tag_changelog::TagChangelogRenderer;

/// Arguments for the section command.
#[derive(Debug, Args)]
pub struct SectionArgs {
    /// Section heading
    pub label: String,

    /// Commit subjects, one bullet each
    pub subjects: Vec<String>,
}

/// Runs the section command.
pub fn run(args: SectionArgs) {
    let commits: Vec<Commit> = args
        .subjects
        .into_iter()
        .map(|subject| Commit {
            subject,
            ..Commit::default()
        })
        .collect();

    let renderer = TagChangelogRenderer::new();
    print!("{}", renderer.render_type_section(&args.label, &commits));
}
