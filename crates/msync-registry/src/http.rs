//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (429 with `Retry-After`, non-success →
//! [`RegistryError::Api`]) so the endpoint modules stay focused on request
//! construction and body mapping.

use crate::error::RegistryError;

/// Longest response body kept in an [`RegistryError::Api`] message.
const MAX_ERROR_BODY: usize = 512;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`RegistryError::RateLimited`] (falls back
///   to 60 s if `Retry-After` is absent or unparseable).
/// - **Non-success status** → [`RegistryError::Api`] with the status code
///   and a truncated response body.
///
/// Error responses are consumed here, which releases their connection.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, RegistryError> {
    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = parse_retry_after(&resp);
        return Err(RegistryError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(RegistryError::Api {
            status,
            message: truncate(body.trim()),
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

fn truncate(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}
