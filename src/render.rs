//! HTML page rendering.
//!
//! Compile-time [Maud](https://maud.lambda.xyz/) templates for the two
//! artifact kinds: the per-path redirect page and the top-level index.
//! Malformed markup is a build error and interpolation is auto-escaped, so
//! there is no runtime template-failure path. The only fallible step left is
//! writing the rendered bytes, which the site builder owns.

use crate::plan::RedirectPage;
use maud::{DOCTYPE, Markup, html};

/// Shared document shell.
fn base_document(title: &str, head_extra: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                (head_extra)
                title { (title) }
            }
            body {
                (content)
            }
        }
    }
}

/// The top-level index page, parameterized by owner identity only.
pub fn render_index(owner: &str) -> Markup {
    let profile_url = format!("https://github.com/{owner}");
    base_document(
        owner,
        html! {},
        html! {
            main {
                h1 { (owner) "'s Go packages" }
                p {
                    "Vanity import paths for the repositories hosted at "
                    a href=(profile_url) { (profile_url) }
                    "."
                }
            }
        },
    )
}

/// One redirect page: the `go-import` meta tag that `go get` resolves, plus
/// an immediate refresh to the repository's GitHub page for humans.
pub fn render_redirect(page: &RedirectPage) -> Markup {
    let import_path = page.import_path();
    let repo_url = page.repo_url();
    let go_import = format!("{} git {}", import_path, page.clone_url);
    let refresh = format!("0; url={repo_url}");

    base_document(
        &import_path,
        html! {
            meta name="go-import" content=(go_import);
            meta http-equiv="refresh" content=(refresh);
        },
        html! {
            main {
                p {
                    "Redirecting to "
                    a href=(repo_url) { (repo_url) }
                    "\u{2026}"
                }
            }
        },
    )
}
