//! Runtime configuration.
//!
//! Everything a run needs is resolved exactly once in `main` (CLI flags with
//! environment-variable fallbacks), validated, and passed by reference into
//! the components that need it. No component reads flags or ambient
//! environment state directly.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("domain name must be specified via --domain or the DOMAIN_NAME env variable")]
    MissingDomain,
    #[error("GitHub username must be specified via --gh-user or the GITHUB_ACTOR env variable")]
    MissingOwner,
}

/// Default GitHub API root. Overridable for GitHub Enterprise hosts.
pub const DEFAULT_API_ROOT: &str = "https://api.github.com";

/// Repositories fetched per listing page.
pub const LISTING_PAGE_SIZE: u32 = 10;

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Vanity domain the import paths hang off (e.g. `example.com`).
    pub domain: String,
    /// GitHub username whose repositories are listed.
    pub owner: String,
    /// Root of the generated site.
    pub output_dir: PathBuf,
    /// GitHub API root, without a trailing slash.
    pub api_root: String,
}

impl Config {
    /// Validate and assemble a config. Missing or blank domain/username is a
    /// startup error; the run produces no output at all in that case.
    pub fn new(
        domain: Option<String>,
        owner: Option<String>,
        output_dir: PathBuf,
        api_root: String,
    ) -> Result<Self, ConfigError> {
        let domain = domain
            .filter(|d| !d.trim().is_empty())
            .ok_or(ConfigError::MissingDomain)?;
        let owner = owner
            .filter(|o| !o.trim().is_empty())
            .ok_or(ConfigError::MissingOwner)?;

        Ok(Self {
            domain,
            owner,
            output_dir,
            api_root: api_root.trim_end_matches('/').to_string(),
        })
    }

    /// Scratch area for working-tree clones, kept under the output root so a
    /// single directory owns everything a run touches.
    pub fn scratch_root(&self) -> PathBuf {
        self.output_dir.join("tmp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Result<Config, ConfigError> {
        Config::new(
            Some("example.com".to_string()),
            Some("alice".to_string()),
            PathBuf::from("./out"),
            DEFAULT_API_ROOT.to_string(),
        )
    }

    #[test]
    fn valid_config_accepted() {
        let config = valid().unwrap();
        assert_eq!(config.domain, "example.com");
        assert_eq!(config.owner, "alice");
        assert_eq!(config.output_dir, PathBuf::from("./out"));
    }

    #[test]
    fn missing_domain_rejected() {
        let result = Config::new(
            None,
            Some("alice".to_string()),
            PathBuf::from("./out"),
            DEFAULT_API_ROOT.to_string(),
        );
        assert!(matches!(result, Err(ConfigError::MissingDomain)));
    }

    #[test]
    fn blank_domain_rejected() {
        let result = Config::new(
            Some("   ".to_string()),
            Some("alice".to_string()),
            PathBuf::from("./out"),
            DEFAULT_API_ROOT.to_string(),
        );
        assert!(matches!(result, Err(ConfigError::MissingDomain)));
    }

    #[test]
    fn missing_owner_rejected() {
        let result = Config::new(
            Some("example.com".to_string()),
            None,
            PathBuf::from("./out"),
            DEFAULT_API_ROOT.to_string(),
        );
        assert!(matches!(result, Err(ConfigError::MissingOwner)));
    }

    #[test]
    fn empty_owner_rejected() {
        let result = Config::new(
            Some("example.com".to_string()),
            Some(String::new()),
            PathBuf::from("./out"),
            DEFAULT_API_ROOT.to_string(),
        );
        assert!(matches!(result, Err(ConfigError::MissingOwner)));
    }

    #[test]
    fn api_root_trailing_slash_stripped() {
        let config = Config::new(
            Some("example.com".to_string()),
            Some("alice".to_string()),
            PathBuf::from("./out"),
            "https://github.example.com/api/v3/".to_string(),
        )
        .unwrap();
        assert_eq!(config.api_root, "https://github.example.com/api/v3");
    }

    #[test]
    fn scratch_root_under_output_dir() {
        let config = valid().unwrap();
        assert_eq!(config.scratch_root(), PathBuf::from("./out/tmp"));
    }

    #[test]
    fn error_messages_name_the_env_variables() {
        assert!(ConfigError::MissingDomain.to_string().contains("DOMAIN_NAME"));
        assert!(ConfigError::MissingOwner.to_string().contains("GITHUB_ACTOR"));
    }
}
