//! openpr CLI entry point.
//!
//! Parses command-line arguments, resolves them against environment
//! fallbacks, and performs the single create-pull-request call.

use clap::Parser;
use openpr::config::{self, RawOptions};
use openpr::context::RunContext;
use openpr::github::{self, CreateOutcome};
use openpr::output;

#[derive(Parser)]
#[command(name = "openpr")]
#[command(
    version,
    about = "Open a GitHub pull request from the command line",
    after_help = "EXAMPLES:
    # Open a PR from the current branch into master
    openpr --repo octocat/hello --title \"Add login\"

    # Spell out everything
    openpr --repo octocat/hello --title \"Add login\" \\
        --head feature/login --base develop --body \"Please review.\"

ENVIRONMENT:
    Every flag falls back to a GITHUB_PULL_REQUEST_* variable
    (e.g. GITHUB_PULL_REQUEST_REPO). The API token is environment-only:
    set GITHUB_PULL_REQUEST_API_TOKEN."
)]
struct Cli {
    /// The repository to submit the pull request to, as owner/name
    #[arg(long)]
    repo: Option<String>,

    /// The title of the pull request
    #[arg(long)]
    title: Option<String>,

    /// The contents of the pull request
    #[arg(long)]
    body: Option<String>,

    /// The branch where your changes are implemented (defaults to the current branch)
    #[arg(long)]
    head: Option<String>,

    /// The branch you want your changes pulled into (defaults to `master`)
    #[arg(long)]
    base: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let raw = RawOptions {
        repo: cli.repo,
        title: cli.title,
        body: cli.body,
        head: cli.head,
        base: cli.base,
    };

    let params = match config::resolve(raw) {
        Ok(params) => params,
        Err(e) => {
            output::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let mut ctx = RunContext::new();

    match github::create_pull_request(&params, &mut ctx) {
        Ok(CreateOutcome::Created(_)) => {}
        Ok(CreateOutcome::AlreadyHandled) => output::print_pr_already_handled(),
        // Rejections are already reported by the client with status and body
        Err(openpr::OpenprError::HostRejected { .. }) => std::process::exit(1),
        Err(e) => {
            output::print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
