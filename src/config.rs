//! Option schema and resolution.
//!
//! Every option `openpr` understands is declared once in [`AVAILABLE_OPTIONS`]
//! with its environment-variable fallback. Resolution runs before anything
//! touches the network: it applies the flag → environment → fallback
//! precedence, validates that required options are present and non-empty, and
//! hands the rest of the program a fully-populated
//! [`PullRequestParams`](crate::github::PullRequestParams).

use crate::error::{OpenprError, Result};
use crate::git;
use crate::github::PullRequestParams;
use std::env;

/// Fallback base branch when neither `--base` nor its env var is set.
pub const DEFAULT_BASE_BRANCH: &str = "master";

/// Declaration of a single configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigItem {
    /// Option key, as used on the command line
    pub key: &'static str,
    /// Environment variable consulted when the flag is absent
    pub env_name: &'static str,
    /// Human-readable description for help output
    pub description: &'static str,
    /// Whether resolution may complete without a value
    pub optional: bool,
}

/// Every option this tool understands, in display order.
pub const AVAILABLE_OPTIONS: [ConfigItem; 6] = [
    ConfigItem {
        key: "api_token",
        env_name: "GITHUB_PULL_REQUEST_API_TOKEN",
        description: "Personal API token for GitHub - generate one at https://github.com/settings/tokens",
        optional: false,
    },
    ConfigItem {
        key: "repo",
        env_name: "GITHUB_PULL_REQUEST_REPO",
        description: "The repository to submit the pull request to, as owner/name",
        optional: false,
    },
    ConfigItem {
        key: "title",
        env_name: "GITHUB_PULL_REQUEST_TITLE",
        description: "The title of the pull request",
        optional: false,
    },
    ConfigItem {
        key: "body",
        env_name: "GITHUB_PULL_REQUEST_BODY",
        description: "The contents of the pull request",
        optional: true,
    },
    ConfigItem {
        key: "head",
        env_name: "GITHUB_PULL_REQUEST_HEAD",
        description: "The branch where your changes are implemented (defaults to the current branch)",
        optional: true,
    },
    ConfigItem {
        key: "base",
        env_name: "GITHUB_PULL_REQUEST_BASE",
        description: "The branch you want your changes pulled into (defaults to `master`)",
        optional: true,
    },
];

/// Look up an option's declaration by key.
pub fn option(key: &str) -> Option<&'static ConfigItem> {
    AVAILABLE_OPTIONS.iter().find(|item| item.key == key)
}

/// Option values as they arrive from the command line, before resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    pub repo: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub head: Option<String>,
    pub base: Option<String>,
}

/// Resolve raw options into validated pull request parameters.
///
/// The head branch falls back to the current local branch when neither the
/// flag nor the env var supplies one.
pub fn resolve(raw: RawOptions) -> Result<PullRequestParams> {
    resolve_with_head_fallback(raw, git::current_branch)
}

/// Resolution with an injectable head-branch fallback, for tests that must
/// not depend on the working directory being a git checkout.
pub fn resolve_with_head_fallback(
    raw: RawOptions,
    head_fallback: impl FnOnce() -> Result<String>,
) -> Result<PullRequestParams> {
    let repo = require("repo", raw.repo)?;
    let title = require("title", raw.title)?;
    let body = optional("body", raw.body);

    let head = match optional("head", raw.head) {
        Some(head) => head,
        None => head_fallback()?,
    };
    let base =
        optional("base", raw.base).unwrap_or_else(|| DEFAULT_BASE_BRANCH.to_string());

    // The token is required but never accepted as a flag, so a missing value
    // always points at the env var.
    let api_token = match from_env("api_token") {
        Some(token) => Some(token),
        None => {
            let item = option("api_token").unwrap();
            return Err(OpenprError::Config(format!(
                "Missing required option 'api_token': set the {} environment variable",
                item.env_name
            )));
        }
    };

    Ok(PullRequestParams {
        repo,
        head,
        base,
        title,
        body,
        api_token,
    })
}

/// Non-empty env value for an option, if set.
fn from_env(key: &str) -> Option<String> {
    let item = option(key)?;
    env::var(item.env_name).ok().filter(|v| !v.is_empty())
}

/// Flag value if present and non-empty, else env fallback.
fn optional(key: &str, flag: Option<String>) -> Option<String> {
    flag.filter(|v| !v.is_empty()).or_else(|| from_env(key))
}

/// Like [`optional`], but a missing value is a configuration error.
fn require(key: &str, flag: Option<String>) -> Result<String> {
    optional(key, flag).ok_or_else(|| {
        let item = option(key).unwrap();
        OpenprError::Config(format!(
            "Missing required option '{}': pass --{} or set the {} environment variable",
            key, key, item.env_name
        ))
    })
}
