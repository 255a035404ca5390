//! The client-side error taxonomy.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced when talking to the café API.
///
/// [`crate::ApiClient`] is the only place transport and HTTP outcomes are
/// translated into this taxonomy; every layer above forwards values
/// unchanged to its caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("connection failed: {0}")]
    ConnectionFailed(#[source] reqwest::Error),

    /// The server rejected the bearer token (HTTP 401).
    ///
    /// Raising this has already cleared the session and triggered the
    /// login redirect.
    #[error("session expired")]
    SessionExpired,

    /// Any other non-success HTTP status, with the human-readable `detail`
    /// field from the body when one could be extracted.
    #[error("{}", request_failed_message(.status, .detail))]
    RequestFailed {
        status: StatusCode,
        detail: Option<String>,
    },

    /// A success response whose body does not match the endpoint's
    /// contract (missing fields, not JSON, empty login token).
    #[error("invalid server response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// The HTTP status behind this error, when there was a response.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::SessionExpired => Some(StatusCode::UNAUTHORIZED),
            Self::ConnectionFailed(_) | Self::InvalidResponse(_) => None,
        }
    }
}

/// Select the user-facing message for a failed request.
///
/// Server-side failures (5xx) and rejected requests (4xx) read
/// differently; the extracted `detail` is appended when present.
fn request_failed_message(status: &StatusCode, detail: &Option<String>) -> String {
    let kind = if status.is_server_error() {
        "server error"
    } else {
        "request rejected"
    };
    detail.as_deref().map_or_else(
        || format!("{kind} (HTTP {})", status.as_u16()),
        |detail| format!("{kind} (HTTP {}): {detail}", status.as_u16()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_expired_display() {
        assert_eq!(ApiError::SessionExpired.to_string(), "session expired");
    }

    #[test]
    fn test_client_error_message() {
        let err = ApiError::RequestFailed {
            status: StatusCode::BAD_REQUEST,
            detail: Some("سفارش یافت نشد".to_owned()),
        };
        assert_eq!(
            err.to_string(),
            "request rejected (HTTP 400): سفارش یافت نشد"
        );
    }

    #[test]
    fn test_server_error_message() {
        let err = ApiError::RequestFailed {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: None,
        };
        assert_eq!(err.to_string(), "server error (HTTP 500)");
    }

    #[test]
    fn test_server_error_keeps_detail() {
        let err = ApiError::RequestFailed {
            status: StatusCode::BAD_GATEWAY,
            detail: Some("upstream down".to_owned()),
        };
        assert_eq!(err.to_string(), "server error (HTTP 502): upstream down");
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(
            ApiError::SessionExpired.status(),
            Some(StatusCode::UNAUTHORIZED)
        );
        let err = ApiError::RequestFailed {
            status: StatusCode::NOT_FOUND,
            detail: None,
        };
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(ApiError::InvalidResponse("x".to_owned()).status(), None);
    }
}
