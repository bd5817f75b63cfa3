//! Repository eligibility.
//!
//! Decided from listing metadata alone, before anything is cloned. A
//! repository qualifies when GitHub reports its primary language as exactly
//! `Go` and it is explicitly public. Missing metadata (no detected language,
//! no visibility field) excludes the repository; it is never an error.

use crate::github::RepoRef;

/// Primary-language marker a repository must carry. Exact, case-sensitive.
pub const TARGET_LANGUAGE: &str = "Go";

/// True iff redirect pages should be generated for this repository.
pub fn is_eligible(repo: &RepoRef) -> bool {
    repo.language.as_deref() == Some(TARGET_LANGUAGE) && repo.private == Some(false)
}
