use clap::{Parser, Subcommand};
use go_vanity::config::{self, Config};
use go_vanity::{github, output, site};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "go-vanity")]
#[command(about = "Static vanity import path site generator for Go repositories")]
#[command(long_about = "\
Static vanity import path site generator for Go repositories

Lists a GitHub user's repositories, clones each public Go repository, and
writes one redirect page per directory so that imports of
<domain>/<repo>/<path> resolve to the GitHub source via go-import meta tags.

Output structure:

  out/
  ├── index.html               # Owner index
  ├── mylib.html               # Repository root import path
  └── mylib/
      ├── cmd.html             # <domain>/mylib/cmd
      └── cmd/
          └── tool.html        # <domain>/mylib/cmd/tool

Intended to run in CI on every push; each run fully regenerates the tree.")]
#[command(version)]
struct Cli {
    /// Output directory
    #[arg(long, default_value = "./out", global = true)]
    out: PathBuf,

    /// Vanity domain the import paths are served from
    #[arg(long, env = "DOMAIN_NAME", global = true)]
    domain: Option<String>,

    /// GitHub username whose repositories are listed
    #[arg(long = "gh-user", env = "GITHUB_ACTOR", global = true)]
    gh_user: Option<String>,

    /// GitHub API root (for GitHub Enterprise hosts)
    #[arg(long = "api-url", default_value = config::DEFAULT_API_ROOT, global = true)]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the full redirect site
    Build,
    /// List repositories and their eligibility without generating anything
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::new(cli.domain, cli.gh_user, cli.out, cli.api_url)?;

    match cli.command {
        Command::Build => {
            output::print_config(&config);
            output::print_generating(&config);
            let summary = site::build(&config)?;
            output::print_summary(&summary);
        }
        Command::List => {
            let repos = github::list_repositories(&config)?;
            output::print_listing(&config.owner, &repos);
        }
    }

    Ok(())
}
