//! Import-path discovery.
//!
//! Walks a cloned working tree and produces the relative directory paths that
//! qualify as redirect targets. Every non-metadata directory is a candidate;
//! whether it actually holds an importable package is the consumer's problem,
//! not ours.
//!
//! Paths are forward-slash strings relative to the walk root. The root itself
//! is represented as the empty string (the repository's own top-level import
//! path), never as a lone separator.

use std::path::Path;
use walkdir::WalkDir;

/// Substring that marks version-control metadata. The check is a substring
/// test against the whole relative path, so a nested `.git` (or a directory
/// merely containing the marker in its name, like `foo.github`) excludes the
/// entry and its entire subtree.
const GIT_MARKER: &str = ".git";

/// Collect every candidate import directory under `root`.
///
/// Entries are visited depth-first with siblings sorted by file name, so the
/// result is reproducible for a fixed tree. Callers must not rely on lexical
/// order of the flat list beyond that determinism.
///
/// Unreadable entries (permission errors, broken symlinks) are logged and
/// skipped; a partial result for one repository beats failing the whole run.
pub fn collect_paths(root: &Path) -> Vec<String> {
    let mut dirs = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !relative_path(root, entry.path()).contains(GIT_MARKER));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        dirs.push(relative_path(root, entry.path()));
    }

    dirs
}

/// Root-relative path with forward-slash separators; the root maps to `""`.
/// Non-UTF-8 segments are converted lossily rather than failing the walk.
fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
