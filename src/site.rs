//! Site building.
//!
//! Top-level orchestration of a run: ensure the output root, write the index
//! artifact, fetch the repository listing, then run the per-repository
//! pipeline (clone → collect → plan → write) in listing order.
//!
//! ## Recoverable vs fatal
//!
//! The batch-level steps are all-or-nothing: a missing output root, a failed
//! index write, or an incomplete listing aborts the run. Within a repository,
//! a failed clone skips just that repository and unreadable directory entries
//! are tolerated by the collector, but an artifact write failure is fatal to
//! the whole run. Every artifact that was written before a fatal error stays
//! on disk; there is no rollback.

use crate::clone::{CloneError, ScratchClone};
use crate::config::Config;
use crate::filter;
use crate::github::{self, ListError, RepoRef};
use crate::output;
use crate::paths;
use crate::plan::{self, RedirectPage};
use crate::render;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors that terminate a run.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    List(#[from] ListError),
}

/// Per-repository failure, split by how the batch reacts to it.
enum RepoError {
    /// The working tree never materialized; the repository is skipped.
    Clone(CloneError),
    /// Artifact output failed; the run aborts.
    Fatal(BuildError),
}

/// Counters reported at the end of a run.
#[derive(Debug, Default)]
pub struct BuildSummary {
    pub repos_seen: usize,
    pub repos_generated: usize,
    pub repos_skipped: usize,
    pub pages_written: usize,
    pub elapsed: Duration,
}

/// Run the whole pipeline against the live listing.
pub fn build(config: &Config) -> Result<BuildSummary, BuildError> {
    let start = Instant::now();

    prepare_output(config)?;

    let repos = github::list_repositories(config)?;
    output::print_repo_count(&config.owner, repos.len());

    let mut summary = generate_repositories(config, &repos)?;
    summary.elapsed = start.elapsed();
    Ok(summary)
}

/// Ensure the output root exists and write the index artifact. Both are
/// preconditions for everything else; failure here is fatal.
pub fn prepare_output(config: &Config) -> Result<(), BuildError> {
    fs::create_dir_all(&config.output_dir)?;

    let index = render::render_index(&config.owner);
    fs::write(config.output_dir.join("index.html"), index.into_string())?;
    output::print_page_written(Path::new("index.html"));

    Ok(())
}

/// The per-repository pipeline, in listing order.
///
/// Ineligible repositories and failed clones are skipped with a diagnostic;
/// anything else that goes wrong aborts the batch.
pub fn generate_repositories(
    config: &Config,
    repos: &[RepoRef],
) -> Result<BuildSummary, BuildError> {
    let mut summary = BuildSummary {
        repos_seen: repos.len(),
        ..BuildSummary::default()
    };

    for repo in repos {
        if !filter::is_eligible(repo) {
            output::print_repo_skipped(&repo.name);
            summary.repos_skipped += 1;
            continue;
        }

        output::print_repo_found(&repo.name);
        match generate_repository(config, repo) {
            Ok(pages) => {
                summary.repos_generated += 1;
                summary.pages_written += pages;
            }
            Err(RepoError::Clone(err)) => {
                log::warn!("skipping \"{}\": clone failed: {err}", repo.name);
                summary.repos_skipped += 1;
            }
            Err(RepoError::Fatal(err)) => return Err(err),
        }
    }

    // The per-repository scratch directories are gone by now; prune the
    // scratch root itself if nothing is left in it.
    let _ = fs::remove_dir(config.scratch_root());

    Ok(summary)
}

/// Clone one repository, collect its paths, and write one page per path.
/// The scratch working tree is removed when this returns, on every path.
fn generate_repository(config: &Config, repo: &RepoRef) -> Result<usize, RepoError> {
    let dest = config.scratch_root().join(&repo.name);
    let clone = ScratchClone::create(&repo.clone_url, &dest).map_err(RepoError::Clone)?;

    let collected = paths::collect_paths(clone.path());
    let pages = plan::plan(config, repo, &collected);
    write_pages(config, &pages).map_err(RepoError::Fatal)
}

/// Write every page under the output root, creating parent directories as
/// needed. Returns the number of pages written.
fn write_pages(config: &Config, pages: &[RedirectPage]) -> Result<usize, BuildError> {
    for page in pages {
        let rel = page.output_rel_path();
        let path = config.output_dir.join(&rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, render::render_redirect(page).into_string())?;
        output::print_page_written(&rel);
    }
    Ok(pages.len())
}
