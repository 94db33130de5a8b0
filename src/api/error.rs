//! Typed errors for the employee API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by [`crate::api::EmployeeApi`] operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response at all (DNS, connect, TLS, timeout).
    #[error("Network error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// Response received with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Response body could not be decoded as the expected JSON shape.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build an HTTP error from a status and raw body, extracting a
    /// message best-effort: a JSON body field first, then the raw body
    /// text, then the status line.
    pub fn http(status: StatusCode, body: &str) -> Self {
        ApiError::Http {
            status: status.as_u16(),
            message: extract_message(status, body),
        }
    }

    /// HTTP status code, when the error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(source: reqwest::Error) -> Self {
        ApiError::Transport { source }
    }
}

/// Best-effort human-readable message from an error response body.
fn extract_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["Message", "message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_from_json_field() {
        let err = ApiError::http(
            StatusCode::BAD_REQUEST,
            r#"{"Message": "SSN already exists"}"#,
        );
        assert_eq!(err.to_string(), "HTTP 400: SSN already exists");
    }

    #[test]
    fn message_from_lowercase_json_field() {
        let err = ApiError::http(StatusCode::BAD_REQUEST, r#"{"message": "bad input"}"#);
        assert_eq!(err.to_string(), "HTTP 400: bad input");
    }

    #[test]
    fn message_falls_back_to_raw_text() {
        let err = ApiError::http(StatusCode::INTERNAL_SERVER_ERROR, "something broke");
        assert_eq!(err.to_string(), "HTTP 500: something broke");
    }

    #[test]
    fn json_without_known_field_falls_back_to_raw_text() {
        let err = ApiError::http(StatusCode::BAD_REQUEST, r#"{"detail": "nope"}"#);
        assert_eq!(err.to_string(), r#"HTTP 400: {"detail": "nope"}"#);
    }

    #[test]
    fn message_falls_back_to_status_line() {
        let err = ApiError::http(StatusCode::SERVICE_UNAVAILABLE, "   ");
        assert_eq!(err.to_string(), "HTTP 503: 503 Service Unavailable");
    }

    #[test]
    fn status_accessor() {
        let err = ApiError::http(StatusCode::NOT_FOUND, "");
        assert_eq!(err.status(), Some(404));
        let err = ApiError::Decode("oops".to_string());
        assert_eq!(err.status(), None);
    }
}
