//! # go-vanity
//!
//! A static site generator for Go vanity import paths. Given a custom domain
//! and a GitHub username, it produces a tree of redirect pages so that
//! `go get <domain>/<repo>/<path>` resolves to the real GitHub source, for
//! every directory of every public Go repository the user owns.
//!
//! # Architecture: One Batch Pipeline
//!
//! A run is a single pass with no persisted state:
//!
//! ```text
//! 1. List     GitHub API   →  repository metadata   (paginated, fatal on error)
//! 2. Filter   metadata     →  eligible repositories (public + language Go)
//! 3. Clone    each repo    →  scratch working tree  (removed on all exit paths)
//! 4. Collect  working tree →  relative dir paths    (".git" excluded, root = "")
//! 5. Plan     paths        →  redirect descriptors  (pure, order-preserving)
//! 6. Write    descriptors  →  out/<repo>/<path>.html + out/index.html
//! ```
//!
//! Each run fully regenerates the output tree. Artifacts left over from
//! repositories that are no longer eligible are not deleted; the tool is
//! meant to write into a fresh directory in CI.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Run configuration, resolved once from flags/env and passed by reference |
//! | [`github`] | Paginated repository listing over the GitHub REST API |
//! | [`filter`] | Eligibility predicate over listing metadata |
//! | [`clone`] | Scratch working trees: git2 clones that remove themselves on drop |
//! | [`paths`] | Import-path discovery: deterministic directory walk with `.git` exclusion |
//! | [`plan`] | Pure path → redirect-descriptor transformation |
//! | [`render`] | Maud templates for redirect and index pages |
//! | [`site`] | Orchestration of the whole run, plus the recoverable-vs-fatal policy |
//! | [`output`] | CLI output formatting: pure `format_*` functions with `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than a runtime template engine. Malformed markup
//! is a build error, interpolation is auto-escaped, and there are no template
//! files to ship or get out of sync. For this crate that has a second payoff:
//! template rendering cannot fail at runtime, leaving the artifact write as
//! the only fallible step in page production.
//!
//! ## Blocking I/O Throughout
//!
//! The tool is a short-lived batch job: one listing call and one clone at a
//! time, each needed before the next step can start. Blocking `reqwest` and
//! synchronous `git2`/`std::fs` keep the pipeline a straight line; an async
//! runtime would buy nothing here.
//!
//! ## Recoverable vs Fatal Is a Policy, Not an Accident
//!
//! The error taxonomy is explicit in the types: startup configuration,
//! listing, and artifact-write failures abort the run
//! ([`site::BuildError`]); a failed clone skips one repository
//! ([`site`] handles [`clone::CloneError`] in-loop); unreadable directory
//! entries are contained inside [`paths::collect_paths`] as log warnings.
//! No external call is ever retried.
//!
//! ## Scratch Clones Are RAII
//!
//! Working trees live under `out/tmp/<repo>` only while that repository is
//! being processed. [`clone::ScratchClone`] ties removal to `Drop`, so the
//! tree is cleaned up on success, on skip, and while a fatal error unwinds.

pub mod clone;
pub mod config;
pub mod filter;
pub mod github;
pub mod output;
pub mod paths;
pub mod plan;
pub mod render;
pub mod site;
