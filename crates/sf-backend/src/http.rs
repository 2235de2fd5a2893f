//! Shared HTTP response helpers for the database and auth clients.
//!
//! Centralizes status-code checks and error-body parsing so the client
//! modules stay focused on request construction and response mapping.

use reqwest::StatusCode;

use crate::error::BackendError;

/// Check a database API response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`BackendError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`BackendError::Api`] with the status code and
///   the message extracted from the body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    if resp.status() == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = parse_retry_after(&resp);
        return Err(BackendError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(BackendError::Api {
            status: status.as_u16(),
            message: error_message(status, &body),
        });
    }
    Ok(resp)
}

/// Check an auth API response.
///
/// Any 4xx is the provider refusing the request and becomes
/// [`BackendError::AuthRejected`]; 5xx becomes [`BackendError::Api`].
pub async fn check_auth_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, BackendError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = error_message(status, &body);
    if status.is_client_error() {
        Err(BackendError::AuthRejected {
            status: status.as_u16(),
            message,
        })
    } else {
        Err(BackendError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Pull the human-readable message out of an error body.
///
/// Database errors carry `message`; auth errors use `msg`,
/// `error_description` or `error` depending on the endpoint. Bodies that are
/// not JSON are returned trimmed; empty bodies fall back to the status reason.
pub fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "msg", "error_description", "error"] {
            if let Some(message) = value.get(key).and_then(serde_json::Value::as_str)
                && !message.is_empty()
            {
                return message.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .map_or_else(|| status.as_u16().to_string(), str::to_string)
    } else {
        trimmed.to_string()
    }
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body(String::new())
                .unwrap(),
        )
    }

    #[rstest]
    #[case(
        r#"{"code":"42703","details":null,"hint":null,"message":"column banners.sort does not exist"}"#,
        "column banners.sort does not exist"
    )]
    #[case(
        r#"{"code":403,"error_code":"otp_expired","msg":"Token has expired or is invalid"}"#,
        "Token has expired or is invalid"
    )]
    #[case(
        r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        "Invalid login credentials"
    )]
    #[case(r#"{"error":"unauthorized"}"#, "unauthorized")]
    #[case("  upstream connect error  ", "upstream connect error")]
    fn extracts_error_messages(#[case] body: &str, #[case] expected: &str) {
        assert_eq!(error_message(StatusCode::BAD_REQUEST, body), expected);
    }

    #[test]
    fn empty_body_falls_back_to_reason() {
        assert_eq!(
            error_message(StatusCode::SERVICE_UNAVAILABLE, ""),
            "Service Unavailable"
        );
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_retry_after(429, "not-a-number");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn check_response_rate_limited() {
        let resp = mock_response_with_retry_after(429, "30");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            BackendError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_message() {
        let resp = mock_response(500, r#"{"message":"relation \"banners\" does not exist"}"#);
        let err = check_response(resp).await.unwrap_err();
        match err {
            BackendError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "relation \"banners\" does not exist");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_auth_response_client_error_is_rejection() {
        let resp = mock_response(403, r#"{"msg":"Token has expired or is invalid"}"#);
        let err = check_auth_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            BackendError::AuthRejected { status: 403, ref message }
                if message == "Token has expired or is invalid"
        ));
    }

    #[tokio::test]
    async fn check_auth_response_server_error_is_api() {
        let resp = mock_response(502, "");
        let err = check_auth_response(resp).await.unwrap_err();
        assert!(matches!(err, BackendError::Api { status: 502, .. }));
    }
}
