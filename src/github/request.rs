//! Request construction for the create-pull-request call.
//!
//! Builds an inspectable [`ApiRequest`] from validated parameters. Nothing
//! here talks to the network; the transport lives in
//! [`client`](super::client).

use super::types::PullRequestParams;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;

/// Fixed client-identifying user agent sent with every request.
pub const USER_AGENT: &str = concat!("openpr/", env!("CARGO_PKG_VERSION"));

/// JSON body of the create call.
///
/// `body` is skipped entirely when absent; the API distinguishes a missing
/// key from an explicit null or empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRequestBody {
    pub title: String,
    pub head: String,
    pub base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// One fully-assembled create request, ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Pull request collection endpoint for the target repository
    pub url: String,
    /// `User-Agent` header value
    pub user_agent: &'static str,
    /// `Authorization` header value, present iff a token was supplied
    pub authorization: Option<String>,
    /// JSON body
    pub body: CreateRequestBody,
}

/// Assemble the POST request for `params`.
///
/// Branch and repository existence are not checked locally; the host owns
/// that validation.
pub fn build_request(params: &PullRequestParams) -> ApiRequest {
    let authorization = params
        .api_token
        .as_ref()
        .map(|token| format!("Basic {}", BASE64.encode(token)));

    ApiRequest {
        url: format!("https://api.github.com/repos/{}/pulls", params.repo),
        user_agent: USER_AGENT,
        authorization,
        body: CreateRequestBody {
            title: params.title.clone(),
            head: params.head.clone(),
            base: params.base.clone(),
            body: params.body.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn params() -> PullRequestParams {
        PullRequestParams {
            repo: "octocat/hello".to_string(),
            head: "feature/login".to_string(),
            base: "master".to_string(),
            title: "Add login".to_string(),
            body: None,
            api_token: None,
        }
    }

    #[test]
    fn test_url_targets_repo_pulls_collection() {
        let request = build_request(&params());
        assert_eq!(request.url, "https://api.github.com/repos/octocat/hello/pulls");
    }

    #[test]
    fn test_user_agent_identifies_client() {
        let request = build_request(&params());
        assert!(request.user_agent.starts_with("openpr/"));
    }

    #[test]
    fn test_body_json_has_exactly_title_head_base_when_body_absent() {
        let request = build_request(&params());
        let json: Value = serde_json::to_value(&request.body).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["base", "head", "title"]);
        assert_eq!(object["title"], "Add login");
        assert_eq!(object["head"], "feature/login");
        assert_eq!(object["base"], "master");
    }

    #[test]
    fn test_body_key_present_iff_body_set() {
        let mut with_body = params();
        with_body.body = Some("Please pull this in!".to_string());

        let request = build_request(&with_body);
        let json: Value = serde_json::to_value(&request.body).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["body"], "Please pull this in!");
    }

    #[test]
    fn test_authorization_is_basic_base64_of_token() {
        let mut with_token = params();
        with_token.api_token = Some("123456789".to_string());

        let request = build_request(&with_token);
        // base64("123456789")
        assert_eq!(
            request.authorization.as_deref(),
            Some("Basic MTIzNDU2Nzg5")
        );
    }

    #[test]
    fn test_no_authorization_header_without_token() {
        let request = build_request(&params());
        assert_eq!(request.authorization, None);
    }
}
