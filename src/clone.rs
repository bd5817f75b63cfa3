//! Scratch working trees.
//!
//! Each eligible repository is cloned into its own scratch directory under
//! the output root for the duration of path collection. Removal is tied to
//! `Drop`, so the working tree disappears on every exit path: after a clean
//! run, after a traversal error, and while an artifact-write failure is
//! unwinding the build.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("git clone failed: {0}")]
    Git(#[from] git2::Error),
}

/// An on-disk clone that removes itself when dropped.
pub struct ScratchClone {
    path: PathBuf,
}

impl ScratchClone {
    /// Clone `url` into `dest`. A leftover directory from a crashed earlier
    /// run is replaced; a half-written clone from a failed attempt is removed
    /// before the error is returned.
    pub fn create(url: &str, dest: &Path) -> Result<Self, CloneError> {
        if dest.exists() {
            fs::remove_dir_all(dest)?;
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if let Err(err) = git2::Repository::clone(url, dest) {
            let _ = fs::remove_dir_all(dest);
            return Err(err.into());
        }

        Ok(Self {
            path: dest.to_path_buf(),
        })
    }

    /// Root of the checked-out working tree.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchClone {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_dir_all(&self.path) {
            log::warn!(
                "failed to remove scratch clone {}: {err}",
                self.path.display()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Build a commit-bearing local repository git2 can clone from a plain
    /// path, avoiding the network entirely.
    fn init_source_repo(dir: &Path) {
        let repo = git2::Repository::init(dir).unwrap();
        fs::write(dir.join("main.go"), "package main\n").unwrap();

        let mut index = repo.index().unwrap();
        index
            .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
            .unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = git2::Signature::now("test", "test@example.com").unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "init", &tree, &[])
            .unwrap();
    }

    #[test]
    fn clone_materializes_the_working_tree() {
        let source = TempDir::new().unwrap();
        init_source_repo(source.path());
        let scratch = TempDir::new().unwrap();
        let dest = scratch.path().join("repo");

        let clone = ScratchClone::create(source.path().to_str().unwrap(), &dest).unwrap();
        assert!(clone.path().join("main.go").is_file());
    }

    #[test]
    fn working_tree_removed_on_drop() {
        let source = TempDir::new().unwrap();
        init_source_repo(source.path());
        let scratch = TempDir::new().unwrap();
        let dest = scratch.path().join("repo");

        let clone = ScratchClone::create(source.path().to_str().unwrap(), &dest).unwrap();
        assert!(dest.is_dir());
        drop(clone);
        assert!(!dest.exists());
    }

    #[test]
    fn failed_clone_leaves_no_directory_behind() {
        let scratch = TempDir::new().unwrap();
        let dest = scratch.path().join("repo");

        let missing = scratch.path().join("no-such-source");
        let result = ScratchClone::create(missing.to_str().unwrap(), &dest);
        assert!(result.is_err());
        assert!(!dest.exists());
    }

    #[test]
    fn leftover_destination_is_replaced() {
        let source = TempDir::new().unwrap();
        init_source_repo(source.path());
        let scratch = TempDir::new().unwrap();
        let dest = scratch.path().join("repo");
        fs::create_dir_all(dest.join("stale")).unwrap();

        let clone = ScratchClone::create(source.path().to_str().unwrap(), &dest).unwrap();
        assert!(!clone.path().join("stale").exists());
        assert!(clone.path().join("main.go").is_file());
    }
}
