//! Shared HTTP response helpers for the registry client.
//!
//! Centralizes status-code checks (401/403 → [`RegistryError::Auth`], 429
//! rate limiting with `Retry-After` parsing, non-success →
//! [`RegistryError::Api`]) so request code stays focused on URLs and
//! response mapping.

use crate::error::RegistryError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **401 / 403** → [`RegistryError::Auth`] with the response body.
/// - **429 Too Many Requests** → [`RegistryError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`RegistryError::Api`] with status code and
///   response body.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, RegistryError> {
    let status = resp.status().as_u16();
    if status == 401 || status == 403 {
        return Err(RegistryError::Auth {
            status,
            message: resp.text().await.unwrap_or_default(),
        });
    }
    if status == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(RegistryError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        return Err(RegistryError::Api {
            status,
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
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
    use super::*;

    fn mock_response(status: u16) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body("")
                .unwrap(),
        )
    }

    fn mock_response_with_body(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body("")
                .unwrap(),
        )
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
    async fn check_response_unauthorized() {
        let resp = mock_response_with_body(401, "invalid api key");
        let err = check_response(resp).await.unwrap_err();
        assert!(err.is_auth());
        assert!(matches!(
            err,
            RegistryError::Auth { status: 401, ref message } if message == "invalid api key"
        ));
    }

    #[tokio::test]
    async fn check_response_forbidden() {
        let err = check_response(mock_response(403)).await.unwrap_err();
        assert!(matches!(err, RegistryError::Auth { status: 403, .. }));
    }

    #[tokio::test]
    async fn check_response_rate_limited_default() {
        let err = check_response(mock_response(429)).await.unwrap_err();
        assert!(matches!(
            err,
            RegistryError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn check_response_api_error() {
        let err = check_response(mock_response(500)).await.unwrap_err();
        assert!(matches!(err, RegistryError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200)).await.is_ok());
    }
}
