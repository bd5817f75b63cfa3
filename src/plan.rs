//! Redirect planning.
//!
//! Pure transformation from repository identity plus collected paths to one
//! page descriptor per path. Eligibility was decided upstream and traversal
//! already happened; nothing here touches the filesystem or the network.

use crate::config::Config;
use crate::github::RepoRef;
use std::path::PathBuf;

/// Everything needed to render and place one redirect page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectPage {
    pub domain: String,
    pub repo_name: String,
    pub owner: String,
    pub clone_url: String,
    /// Directory path inside the repository; empty for the repository root.
    pub rel_path: String,
}

impl RedirectPage {
    /// The vanity import path the `go-import` meta tag declares:
    /// `domain/name` for the repository root, `domain/name/rel` otherwise.
    /// The path segment is omitted entirely when empty, never rendered as a
    /// trailing slash.
    pub fn import_path(&self) -> String {
        if self.rel_path.is_empty() {
            format!("{}/{}", self.domain, self.repo_name)
        } else {
            format!("{}/{}/{}", self.domain, self.repo_name, self.rel_path)
        }
    }

    /// The repository home page the human-readable redirect targets.
    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo_name)
    }

    /// Artifact location relative to the output root. The repository-root
    /// page sits beside the repository's directory, not inside it:
    /// `name.html`, `name/cmd.html`, `name/cmd/tool.html`.
    pub fn output_rel_path(&self) -> PathBuf {
        if self.rel_path.is_empty() {
            PathBuf::from(format!("{}.html", self.repo_name))
        } else {
            PathBuf::from(format!("{}/{}.html", self.repo_name, self.rel_path))
        }
    }
}

/// One descriptor per collected path, preserving input order.
pub fn plan(config: &Config, repo: &RepoRef, paths: &[String]) -> Vec<RedirectPage> {
    paths
        .iter()
        .map(|rel_path| RedirectPage {
            domain: config.domain.clone(),
            repo_name: repo.name.clone(),
            owner: config.owner.clone(),
            clone_url: repo.clone_url.clone(),
            rel_path: rel_path.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::new(
            Some("example.com".to_string()),
            Some("alice".to_string()),
            PathBuf::from("./out"),
            crate::config::DEFAULT_API_ROOT.to_string(),
        )
        .unwrap()
    }

    fn test_repo() -> RepoRef {
        RepoRef {
            name: "mylib".to_string(),
            clone_url: "https://github.com/alice/mylib.git".to_string(),
            language: Some("Go".to_string()),
            private: Some(false),
        }
    }

    #[test]
    fn one_page_per_path_in_input_order() {
        let paths = vec![
            String::new(),
            "cmd".to_string(),
            "cmd/tool".to_string(),
        ];
        let pages = plan(&test_config(), &test_repo(), &paths);

        assert_eq!(pages.len(), 3);
        let rels: Vec<&str> = pages.iter().map(|p| p.rel_path.as_str()).collect();
        assert_eq!(rels, vec!["", "cmd", "cmd/tool"]);
    }

    #[test]
    fn root_import_path_has_no_trailing_slash() {
        let pages = plan(&test_config(), &test_repo(), &[String::new()]);
        assert_eq!(pages[0].import_path(), "example.com/mylib");
    }

    #[test]
    fn nested_import_path() {
        let pages = plan(&test_config(), &test_repo(), &["internal/util".to_string()]);
        assert_eq!(pages[0].import_path(), "example.com/mylib/internal/util");
    }

    #[test]
    fn repo_url_points_at_github() {
        let pages = plan(&test_config(), &test_repo(), &[String::new()]);
        assert_eq!(pages[0].repo_url(), "https://github.com/alice/mylib");
    }

    #[test]
    fn root_artifact_sits_beside_the_repository_directory() {
        let pages = plan(&test_config(), &test_repo(), &[String::new()]);
        assert_eq!(pages[0].output_rel_path(), PathBuf::from("mylib.html"));
    }

    #[test]
    fn nested_artifact_mirrors_the_directory_tree() {
        let pages = plan(&test_config(), &test_repo(), &["cmd/tool".to_string()]);
        assert_eq!(
            pages[0].output_rel_path(),
            PathBuf::from("mylib/cmd/tool.html")
        );
    }

    #[test]
    fn descriptors_carry_the_clone_url() {
        let pages = plan(&test_config(), &test_repo(), &[String::new()]);
        assert_eq!(pages[0].clone_url, "https://github.com/alice/mylib.git");
    }
}
