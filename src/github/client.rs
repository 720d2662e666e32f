//! The create-pull-request call itself.
//!
//! One blocking HTTPS round trip: build the request, POST it, classify the
//! answer, record the created PR's URL in the run context for later steps.
//! Transport failures (DNS, TLS, refused connections) surface as
//! [`OpenprError::Transport`](crate::error::OpenprError::Transport), distinct
//! from host-level rejections.

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, USER_AGENT};

use crate::context::{RunContext, PULL_REQUEST_HTML_URL};
use crate::error::Result;
use crate::output;

use super::request::{build_request, ApiRequest};
use super::response::{interpret_response, Interpretation};
use super::types::{CreateOutcome, PullRequestParams};

/// Open a pull request for `params`.
///
/// On creation the PR's URL is written to `ctx` under
/// [`PULL_REQUEST_HTML_URL`] so later pipeline steps can read it. A 200
/// answer is a quiet no-op ([`CreateOutcome::AlreadyHandled`]); any other
/// non-201 status is logged and returned as an error.
pub fn create_pull_request(
    params: &PullRequestParams,
    ctx: &mut RunContext,
) -> Result<CreateOutcome> {
    output::print_creating_pr(&params.head, &params.base, &params.repo);

    let request = build_request(params);
    let (status, body) = send(&request)?;

    record_outcome(interpret_response(status, &body)?, ctx)
}

/// Perform the single POST and hand back status plus raw body.
fn send(request: &ApiRequest) -> Result<(u16, String)> {
    let client = Client::builder().build()?;

    let mut post = client
        .post(&request.url)
        .header(USER_AGENT, request.user_agent)
        .json(&request.body);

    if let Some(authorization) = &request.authorization {
        post = post.header(AUTHORIZATION, authorization);
    }

    let response = post.send()?;
    let status = response.status().as_u16();
    let body = response.text()?;

    Ok((status, body))
}

/// Apply an interpretation: log it, record it in the context, map rejection
/// to the crate error.
fn record_outcome(
    interpretation: Interpretation,
    ctx: &mut RunContext,
) -> Result<CreateOutcome> {
    match interpretation {
        Interpretation::Created(result) => {
            output::print_pr_created(result.number, &result.html_url);
            ctx.insert(&PULL_REQUEST_HTML_URL, result.html_url.clone());
            Ok(CreateOutcome::Created(result))
        }
        Interpretation::AlreadyHandled => Ok(CreateOutcome::AlreadyHandled),
        Interpretation::Rejected(api_err) => {
            output::print_api_error(api_err.status, &api_err.message);
            Err(api_err.into())
        }
    }
}
