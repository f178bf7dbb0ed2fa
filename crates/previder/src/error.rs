//! Error types for the Previder client
//!
//! Every failure of the transport layer or the task poller surfaces as one
//! [`Error`] variant. Callers can tell "the server rejected us" ([`Error::Api`])
//! apart from "we could not understand the server" ([`Error::Decode`]) and
//! from a network failure ([`Error::Connection`], [`Error::Timeout`]).

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::PROVIDER_NAME;

/// Result type alias for operations that can fail with a Previder client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Previder client.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid client configuration, for example a missing access token.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Invalid base URL or request path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// The HTTP exchange did not complete (DNS, TLS, refused connection, ...).
    #[error("Connection error: {0}")]
    Connection(String),

    /// No response arrived within the request timeout.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// The API answered with a status outside `200..300`.
    #[error("{code} - {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Message composited from the error body
        message: String,
    },

    /// A response body (or error body) could not be decoded.
    #[error("Failed to decode response: {message}")]
    Decode {
        /// What went wrong while decoding
        message: String,
        /// HTTP status of the response, when one was received
        status: Option<u16>,
    },

    /// The request body could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A task did not reach a terminal state in time.
    #[error("Timed out after {timeout:?} waiting for task {task_id}")]
    TaskTimeout {
        /// Task being waited on
        task_id: String,
        /// The allotted wait
        timeout: Duration,
    },

    /// A task finished unsuccessfully; displays the server message verbatim.
    #[error("{message}")]
    TaskFailed {
        /// Task that failed
        task_id: String,
        /// Error message reported by the task
        message: String,
    },

    /// The caller cancelled a task wait.
    #[error("Cancelled while waiting for task {task_id}")]
    Cancelled {
        /// Task being waited on
        task_id: String,
    },
}

impl Error {
    /// Build the error for a response whose status is outside `200..300`.
    ///
    /// The body is parsed as the provider's error envelope. A body that is empty
    /// or not an error envelope yields an [`Error::Decode`] that still records
    /// the status.
    pub fn from_response(status: http::StatusCode, body: &[u8]) -> Self {
        let code = status.as_u16();

        if body.iter().all(u8::is_ascii_whitespace) {
            return Error::Decode {
                message: format!(
                    "empty error body ({})",
                    status.canonical_reason().unwrap_or("unknown status")
                ),
                status: Some(code),
            };
        }

        match serde_json::from_slice::<ApiErrorBody>(body) {
            Ok(error_body) => Error::Api {
                code,
                message: error_body.composite_message(),
            },
            Err(e) => Error::Decode {
                message: format!(
                    "could not parse error result: {e}: {}",
                    String::from_utf8_lossy(body)
                ),
                status: Some(code),
            },
        }
    }

    /// A successful response arrived without the body the caller needs.
    pub(crate) fn missing_body(path: &str) -> Self {
        Error::Decode {
            message: format!("empty response body from '{path}'"),
            status: None,
        }
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { code, .. } => Some(*code),
            Error::Decode { status, .. } => *status,
            _ => None,
        }
    }

    /// Check if the API reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { code: 404, .. })
    }

    /// Check if the HTTP exchange itself failed.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Connection(_) | Error::Timeout(_))
    }
}

/// Error envelope returned by the API.
///
/// Different API generations fill different fields, so all of them are optional.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Human readable message
    #[serde(default)]
    pub message: Option<String>,
    /// HTTP status echoed by the server
    #[serde(default)]
    pub status: Option<u16>,
    /// Short error name, e.g. `Not Found`
    #[serde(default)]
    pub error: Option<String>,
    /// Request path the error relates to
    #[serde(default)]
    pub path: Option<String>,
    /// Numeric code used by older API generations
    #[serde(default)]
    pub code: Option<i64>,
}

impl ApiErrorBody {
    /// Composite the fields into a single provider-prefixed message.
    pub fn composite_message(&self) -> String {
        let mut message = format!("[{PROVIDER_NAME}] Error while executing the request");
        if let Some(path) = non_empty(&self.path) {
            message.push_str(" to ");
            message.push_str(path);
        }
        message.push_str(": ");
        message.push_str(non_empty(&self.message).unwrap_or("unknown error"));
        if let Some(error) = non_empty(&self.error) {
            message.push_str(" - ");
            message.push_str(error);
        }
        message
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_error_404_structured_body() {
        let body = br#"{"message":"not found","status":404,"path":"/x"}"#;

        let error = Error::from_response(StatusCode::NOT_FOUND, body);
        match &error {
            Error::Api { code, message } => {
                assert_eq!(*code, 404);
                assert!(message.contains("not found"));
                assert!(message.starts_with("[Previder API]"));
                assert!(message.contains("/x"));
            }
            _ => panic!("Expected Api variant, got {error:?}"),
        }
        assert!(error.is_not_found());
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_error_body_with_error_field() {
        let body = br#"{"message":"name is taken","status":409,"error":"Conflict","path":"/v2/iaas/virtualnetwork"}"#;

        let error = Error::from_response(StatusCode::CONFLICT, body);
        assert_eq!(
            error.to_string(),
            "409 - [Previder API] Error while executing the request to /v2/iaas/virtualnetwork: name is taken - Conflict"
        );
    }

    #[test]
    fn test_error_body_code_message_shape() {
        let body = br#"{"code":401,"message":"invalid token"}"#;

        let error = Error::from_response(StatusCode::UNAUTHORIZED, body);
        match error {
            Error::Api { code, message } => {
                assert_eq!(code, 401);
                assert_eq!(
                    message,
                    "[Previder API] Error while executing the request: invalid token"
                );
            }
            _ => panic!("Expected Api variant"),
        }
    }

    #[test]
    fn test_error_unparseable_body_keeps_status() {
        let error = Error::from_response(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        match &error {
            Error::Decode { status, message } => {
                assert_eq!(*status, Some(502));
                assert!(message.contains("could not parse error result"));
            }
            _ => panic!("Expected Decode variant, got {error:?}"),
        }
        assert_eq!(error.status(), Some(502));
    }

    #[test]
    fn test_error_empty_body_is_decode_error() {
        for body in [&b""[..], b"  \n"] {
            let error = Error::from_response(StatusCode::SERVICE_UNAVAILABLE, body);
            match &error {
                Error::Decode { status, message } => {
                    assert_eq!(*status, Some(503));
                    assert_eq!(message, "empty error body (Service Unavailable)");
                }
                _ => panic!("Expected Decode variant, got {error:?}"),
            }
        }
    }

    #[test]
    fn test_task_failed_displays_server_message() {
        let error = Error::TaskFailed {
            task_id: "t-1".to_string(),
            message: "disk full".to_string(),
        };
        assert_eq!(error.to_string(), "disk full");
    }

    #[test]
    fn test_is_transport() {
        assert!(Error::Connection("refused".to_string()).is_transport());
        assert!(Error::Timeout(Duration::from_secs(1)).is_transport());
        assert!(!Error::Config("missing token".to_string()).is_transport());
    }
}
