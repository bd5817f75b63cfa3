//! CLI output formatting.
//!
//! Every user-facing line has a pure `format_*` function (testable, no I/O)
//! and a `print_*` wrapper that writes it to stdout. Diagnostics for
//! tolerated conditions (unreadable entries, skipped clones) go through the
//! `log` facade instead, so they can be silenced or redirected independently
//! of the progress output.

use crate::config::Config;
use crate::filter;
use crate::github::RepoRef;
use crate::site::BuildSummary;
use std::path::Path;

/// `Configuration [domain=example.com, user=alice]`
pub fn format_config(config: &Config) -> String {
    format!(
        "Configuration [domain={}, user={}]",
        config.domain, config.owner
    )
}

/// `Generating the site at ./out`, announced before any work happens.
pub fn format_generating(config: &Config) -> String {
    format!("Generating the site at {}", config.output_dir.display())
}

/// `Found 12 repositories for alice.`
pub fn format_repo_count(owner: &str, count: usize) -> String {
    format!("Found {count} repositories for {owner}.")
}

/// `> Found a Go repository "mylib". Generating paths...`
pub fn format_repo_found(name: &str) -> String {
    format!("> Found a Go repository \"{name}\". Generating paths...")
}

/// `> Skipping "notes".`
pub fn format_repo_skipped(name: &str) -> String {
    format!("> Skipping \"{name}\".")
}

/// `  + mylib/cmd/tool.html`
pub fn format_page_written(rel_path: &Path) -> String {
    format!("  + {}", rel_path.display())
}

/// One line per listed repository with its metadata and verdict:
///
/// ```text
///   mylib                    Go           public   eligible
///   notes                    Python       public   skipped
///   secret                   Go           private  skipped
/// ```
pub fn format_listing(repos: &[RepoRef]) -> Vec<String> {
    repos
        .iter()
        .map(|repo| {
            let verdict = if filter::is_eligible(repo) {
                "eligible"
            } else {
                "skipped"
            };
            let language = repo.language.as_deref().unwrap_or("-");
            let visibility = match repo.private {
                Some(true) => "private",
                Some(false) => "public",
                None => "-",
            };
            format!(
                "  {:<24} {:<12} {:<8} {verdict}",
                repo.name, language, visibility
            )
        })
        .collect()
}

/// `Done in 1.42s! 3 repositories generated, 17 pages written (2 skipped).`
pub fn format_summary(summary: &BuildSummary) -> String {
    format!(
        "Done in {:.2?}! {} repositories generated, {} pages written ({} skipped).",
        summary.elapsed, summary.repos_generated, summary.pages_written, summary.repos_skipped
    )
}

pub fn print_config(config: &Config) {
    println!("{}", format_config(config));
}

pub fn print_generating(config: &Config) {
    println!("{}", format_generating(config));
}

pub fn print_repo_count(owner: &str, count: usize) {
    println!("{}", format_repo_count(owner, count));
}

pub fn print_repo_found(name: &str) {
    println!("{}", format_repo_found(name));
}

pub fn print_repo_skipped(name: &str) {
    println!("{}", format_repo_skipped(name));
}

pub fn print_page_written(rel_path: &Path) {
    println!("{}", format_page_written(rel_path));
}

pub fn print_listing(owner: &str, repos: &[RepoRef]) {
    println!("{}", format_repo_count(owner, repos.len()));
    for line in format_listing(repos) {
        println!("{line}");
    }
}

pub fn print_summary(summary: &BuildSummary) {
    println!("{}", format_summary(summary));
}
