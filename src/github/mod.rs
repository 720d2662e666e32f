//! GitHub REST integration for opening pull requests.
//!
//! # Modules
//!
//! - [`types`] - Parameters, results, and outcomes of the create call
//! - [`request`] - Request construction (URL, headers, JSON body)
//! - [`response`] - Response classification (created / benign / rejected)
//! - [`client`] - The blocking round trip and context recording

mod client;
mod request;
mod response;
mod types;

// Re-export all public types and functions
pub use client::create_pull_request;
pub use request::{build_request, ApiRequest, CreateRequestBody, USER_AGENT};
pub use response::{interpret_response, Interpretation};
pub use types::{ApiError, CreateOutcome, PullRequestParams, PullRequestResult};
