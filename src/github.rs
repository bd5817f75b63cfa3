//! GitHub repository listing.
//!
//! Thin blocking client over `GET /users/{user}/repos`. The listing is
//! paginated; pages are fetched until the `Link` response header stops
//! advertising a `rel="next"` page. Every request is attempted exactly once;
//! any transport error, non-success status, or malformed payload aborts the
//! run (the batch is useless without a complete listing).
//!
//! Listing is unauthenticated: only public metadata is needed, and the
//! visibility filter happens downstream in [`crate::filter`].

use crate::config::{Config, LISTING_PAGE_SIZE};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListError {
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("GitHub responded {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Repository metadata as returned by the listing API.
///
/// Only the fields this tool consumes are modeled; the rest of the payload is
/// ignored. Absent metadata deserializes to `None`, an exclusion signal for
/// the eligibility filter, never an error.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoRef {
    pub name: String,
    pub clone_url: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub private: Option<bool>,
}

/// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("go-vanity/", env!("CARGO_PKG_VERSION"));

/// Fetch the full repository listing for the configured owner, in the order
/// the provider returns it.
pub fn list_repositories(config: &Config) -> Result<Vec<RepoRef>, ListError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;

    let url = format!("{}/users/{}/repos", config.api_root, config.owner);
    let mut all = Vec::new();
    let mut page: u32 = 1;

    loop {
        let response = client
            .get(&url)
            .query(&[("per_page", LISTING_PAGE_SIZE), ("page", page)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ListError::Status {
                status,
                url: url.clone(),
            });
        }

        let more = response
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|value| value.to_str().ok())
            .is_some_and(has_next_page);

        let repos: Vec<RepoRef> = response.json()?;
        all.extend(repos);

        if !more {
            break;
        }
        page += 1;
    }

    Ok(all)
}

/// True if a `Link` response header advertises a `rel="next"` page.
///
/// The header is a comma-separated list of `<url>; rel="kind"` entries;
/// the absence of a `rel="next"` entry is the no-further-pages signal.
fn has_next_page(link_header: &str) -> bool {
    link_header
        .split(',')
        .any(|entry| entry.contains("rel=\"next\""))
}
