pub mod config;
pub mod context;
pub mod error;
pub mod git;
pub mod github;
pub mod output;

#[cfg(test)]
pub mod test_utils;

pub use config::{ConfigItem, RawOptions, AVAILABLE_OPTIONS};
pub use context::{ContextKey, RunContext, PULL_REQUEST_HTML_URL};
pub use error::{OpenprError, Result};
pub use github::{create_pull_request, CreateOutcome, PullRequestParams, PullRequestResult};
