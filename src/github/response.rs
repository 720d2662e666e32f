//! Response interpretation for the create-pull-request call.
//!
//! One round trip, three terminal outcomes: created (201), benign non-create
//! (200), or rejected (anything else). There are no intermediate states and
//! no retries.

use super::types::{ApiError, PullRequestResult};
use crate::error::{OpenprError, Result};

/// Status the host answers with when the PR was created.
const STATUS_CREATED: u16 = 201;
/// Status treated as a benign non-create (nothing created, nothing failed).
const STATUS_OK: u16 = 200;

/// Classification of one HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpretation {
    /// 201: the host created the PR
    Created(PullRequestResult),
    /// 200: nothing was created, but nothing failed either
    AlreadyHandled,
    /// Any other status: host-level rejection, terminal, no retry
    Rejected(ApiError),
}

/// Classify one HTTP response by status and raw body.
///
/// A 201 whose body does not parse as the expected JSON is a decode failure,
/// not a host rejection, and surfaces through the outer `Result`.
pub fn interpret_response(status: u16, body: &str) -> Result<Interpretation> {
    match status {
        STATUS_CREATED => {
            let result: PullRequestResult = serde_json::from_str(body)?;
            Ok(Interpretation::Created(result))
        }
        STATUS_OK => Ok(Interpretation::AlreadyHandled),
        _ => Ok(Interpretation::Rejected(ApiError {
            status,
            message: body.to_string(),
        })),
    }
}

impl From<ApiError> for OpenprError {
    fn from(err: ApiError) -> Self {
        OpenprError::HostRejected {
            status: err.status,
            body: err.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_response_yields_number_and_url() {
        let body = r#"{"number": 42, "html_url": "https://github.com/o/r/pull/42"}"#;
        let outcome = interpret_response(201, body).unwrap();
        assert_eq!(
            outcome,
            Interpretation::Created(PullRequestResult {
                number: 42,
                html_url: "https://github.com/o/r/pull/42".to_string(),
            })
        );
    }

    #[test]
    fn test_ok_response_is_benign_non_create() {
        let outcome = interpret_response(200, "").unwrap();
        assert_eq!(outcome, Interpretation::AlreadyHandled);
    }

    #[test]
    fn test_other_statuses_carry_status_and_raw_body() {
        let outcome = interpret_response(404, r#"{"message": "Not Found"}"#).unwrap();
        let Interpretation::Rejected(api_err) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(api_err.status, 404);
        assert!(api_err.message.contains("Not Found"));
    }

    #[test]
    fn test_unprocessable_entity_is_a_rejection() {
        let outcome = interpret_response(422, r#"{"message": "Validation Failed"}"#).unwrap();
        assert!(matches!(outcome, Interpretation::Rejected(ApiError { status: 422, .. })));
    }

    #[test]
    fn test_malformed_created_body_is_a_decode_error() {
        let result = interpret_response(201, "not json");
        assert!(matches!(result, Err(OpenprError::Json(_))));
    }

    #[test]
    fn test_api_error_converts_to_host_rejected() {
        let err: OpenprError = ApiError {
            status: 403,
            message: "rate limited".to_string(),
        }
        .into();
        let msg = err.to_string();
        assert!(msg.contains("403"));
        assert!(msg.contains("rate limited"));
    }
}
