//! Types command.

use tagscribe_config::ChangelogConfig;

/// Prints one line per rule: `label: alias, alias`.
pub fn run(config: &ChangelogConfig) {
    for rule in &config.types {
        let suffix = if config.is_excluded(rule) {
            " (excluded)"
        } else {
            ""
        };
        println!("{}: {}{suffix}", rule.label, rule.types.join(", "));
    }
}
