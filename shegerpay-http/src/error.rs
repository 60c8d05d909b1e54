//! Error types for the HTTP client.
//!
//! [`ClientError`] captures every way an API call can fail:
//! - key and argument validation before anything is sent
//! - URL construction
//! - transport failures (timeouts, refused connections, TLS...)
//! - non-success HTTP statuses, with 401 and 400 mapped to dedicated variants
//! - JSON decoding of the response body

use http::StatusCode;
use shegerpay::{ApiKeyError, RequestError};

/// Message used for 400 responses that carry no `detail`.
const DEFAULT_VALIDATION_MESSAGE: &str = "Validation error";

/// Message used for 401 responses.
const AUTHENTICATION_MESSAGE: &str = "Invalid API key";

/// Errors that can occur while calling the ShegerPay API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The configured API key is malformed.
    #[error(transparent)]
    ApiKey(#[from] ApiKeyError),

    /// The request failed client-side validation and was not sent.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    /// URL parse error.
    #[error("URL parse error: {context}: {source}")]
    UrlParse {
        /// Human-readable context.
        context: &'static str,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The server rejected the API key (HTTP 401).
    #[error("{message}")]
    Authentication {
        /// Human-readable message.
        message: String,
    },

    /// The server rejected the request parameters (HTTP 400).
    #[error("{message}")]
    Validation {
        /// The server's `detail` message.
        message: String,
    },

    /// Any other non-success HTTP status.
    #[error("Unexpected HTTP status {status}: {context}: {body}")]
    Status {
        /// Human-readable context.
        context: &'static str,
        /// The HTTP status code.
        status: StatusCode,
        /// The response body.
        body: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {context}: {source}")]
    Timeout {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// The server could not be reached.
    #[error("Connection error: {context}: {source}")]
    Connection {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// Other HTTP transport error.
    #[error("HTTP error: {context}: {source}")]
    Http {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// JSON deserialization error.
    #[error("Failed to deserialize JSON: {context}: {source}")]
    JsonDeserialization {
        /// Human-readable context.
        context: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to read the response body.
    #[error("Failed to read response body: {context}: {source}")]
    ResponseBodyRead {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// The underlying `reqwest::Client` could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl ClientError {
    /// Classifies a transport error from `send()`.
    pub(crate) fn transport(context: &'static str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { context, source }
        } else if source.is_connect() {
            Self::Connection { context, source }
        } else {
            Self::Http { context, source }
        }
    }

    /// Maps a non-success response to an error.
    ///
    /// 401 becomes [`ClientError::Authentication`], 400 becomes
    /// [`ClientError::Validation`] carrying the body's `detail`, and anything
    /// else becomes [`ClientError::Status`].
    pub(crate) fn from_status(context: &'static str, status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Authentication {
                message: AUTHENTICATION_MESSAGE.to_owned(),
            },
            StatusCode::BAD_REQUEST => Self::Validation {
                message: validation_detail(&body),
            },
            _ => Self::Status {
                context,
                status,
                body,
            },
        }
    }

    /// Returns the HTTP status behind this error, if the server answered.
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::Authentication { .. } => Some(StatusCode::UNAUTHORIZED),
            Self::Validation { .. } => Some(StatusCode::BAD_REQUEST),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 5xx responses.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if status.is_server_error())
    }

    /// True when the API key was rejected, locally or by the server.
    #[must_use]
    pub const fn is_authentication(&self) -> bool {
        matches!(self, Self::ApiKey(_) | Self::Authentication { .. })
    }
}

/// Extracts the `detail` field of a 400 body.
///
/// String details are returned as-is; structured ones (lists of field
/// errors) are rendered as compact JSON.
fn validation_detail(body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|mut value| value.get_mut("detail").map(serde_json::Value::take));
    match detail {
        Some(serde_json::Value::String(message)) => message,
        Some(serde_json::Value::Null) | None => DEFAULT_VALIDATION_MESSAGE.to_owned(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_maps_to_authentication() {
        let err = ClientError::from_status("POST /verify", StatusCode::UNAUTHORIZED, String::new());
        assert!(matches!(err, ClientError::Authentication { .. }));
        assert!(err.is_authentication());
        assert_eq!(err.to_string(), "Invalid API key");
        assert_eq!(err.status_code(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_400_uses_detail() {
        let err = ClientError::from_status(
            "POST /verify",
            StatusCode::BAD_REQUEST,
            r#"{"detail":"Amount mismatch"}"#.to_owned(),
        );
        assert!(
            matches!(&err, ClientError::Validation { message } if message == "Amount mismatch")
        );
    }

    #[test]
    fn test_400_without_detail() {
        for body in ["", "not json", "{}", r#"{"detail":null}"#] {
            let err = ClientError::from_status("ctx", StatusCode::BAD_REQUEST, body.to_owned());
            assert_eq!(err.to_string(), "Validation error", "body: {body}");
        }
    }

    #[test]
    fn test_400_structured_detail() {
        let err = ClientError::from_status(
            "ctx",
            StatusCode::BAD_REQUEST,
            r#"{"detail":[{"loc":["amount"],"msg":"required"}]}"#.to_owned(),
        );
        assert_eq!(err.to_string(), r#"[{"loc":["amount"],"msg":"required"}]"#);
    }

    #[test]
    fn test_other_statuses_are_generic() {
        let err =
            ClientError::from_status("GET /history", StatusCode::NOT_FOUND, "nope".to_owned());
        assert!(matches!(err, ClientError::Status { status: StatusCode::NOT_FOUND, .. }));
        assert!(!err.is_server_error());

        let err = ClientError::from_status("GET /history", StatusCode::BAD_GATEWAY, String::new());
        assert!(err.is_server_error());
        assert_eq!(err.status_code(), Some(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn test_local_errors_have_no_status() {
        let err = ClientError::from(RequestError::NonPositiveAmount);
        assert_eq!(err.status_code(), None);
        assert_eq!(err.to_string(), "invalid request: amount must be greater than zero");
    }
}
