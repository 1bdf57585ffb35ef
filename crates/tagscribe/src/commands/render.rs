//! Render command.

use chrono::NaiveDate;
use clap::Args;
use tagscribe_commit::Commit;
use tagscribe_config::ChangelogConfig;
use tagscribe_core::Pipeline;
use tagscribe_plugin::FixedClock;
use tagscribe_renderer_tag_changelog::TagChangelogRenderer;

/// Arguments for the render command.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Release identifier (e.g. v1.2.0)
    pub release: String,

    /// A commit as TYPE=SUBJECT (repeatable, order is kept)
    #[arg(long = "commit", value_name = "TYPE=SUBJECT", value_parser = parse_commit)]
    pub commits: Vec<Commit>,

    /// Date for the release header instead of today (UTC)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

fn parse_commit(value: &str) -> Result<Commit, String> {
    let (kind, subject) = value
        .split_once('=')
        .ok_or_else(|| format!("expected TYPE=SUBJECT, got `{value}`"))?;
    Ok(Commit::new(kind.trim(), subject))
}

/// Runs the render command.
pub fn run(args: RenderArgs, config: ChangelogConfig) {
    let mut renderer = TagChangelogRenderer::with_config(config);
    if let Some(date) = args.date {
        renderer = renderer.with_clock(FixedClock(date));
    }

    let pipeline = Pipeline::new(Box::new(renderer));
    print!("{}", pipeline.render(&args.release, &args.commits));
}
