//! Core types for the pull request API call.

use serde::Deserialize;

/// Validated parameters for opening a pull request.
///
/// Produced by [`config::resolve`](crate::config::resolve); `repo`, `head`,
/// `base` and `title` are non-empty by the time a value of this type exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestParams {
    /// Target repository as `owner/name`
    pub repo: String,
    /// Branch containing the proposed changes
    pub head: String,
    /// Branch the changes are proposed to be merged into
    pub base: String,
    /// PR title
    pub title: String,
    /// PR description, omitted from the request entirely when `None`
    pub body: Option<String>,
    /// API token; when present the request carries basic auth
    pub api_token: Option<String>,
}

/// The pull request the host reports having created.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequestResult {
    /// PR number
    pub number: u64,
    /// Browser URL of the PR
    pub html_url: String,
}

/// Host-level rejection of the create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status the host answered with
    pub status: u16,
    /// Raw response body, for display
    pub message: String,
}

/// Outcome of one create-pull-request round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The host created the PR
    Created(PullRequestResult),
    /// The host answered 200: nothing was created, but nothing failed either
    AlreadyHandled,
}
