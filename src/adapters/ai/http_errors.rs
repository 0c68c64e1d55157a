//! Shared mapping of HTTP client failures onto `AIError`.

use reqwest::StatusCode;
use std::time::Duration;

use crate::ports::AIError;

/// Classifies a failure to send a request or read its body.
pub(super) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> AIError {
    if err.is_timeout() {
        AIError::timeout(timeout.as_secs())
    } else if err.is_connect() {
        AIError::network(format!("Connection failed: {}", err))
    } else {
        AIError::network(err.to_string())
    }
}

/// Classifies a non-success status code.
pub(super) fn from_status(status: StatusCode, body: String) -> AIError {
    match status.as_u16() {
        401 | 403 => AIError::AuthenticationFailed,
        429 => AIError::rate_limited(30),
        400 | 404 | 422 => AIError::InvalidRequest(body),
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, body)),
    }
}
