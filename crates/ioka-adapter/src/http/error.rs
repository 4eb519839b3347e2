/*
[INPUT]:  Error sources (transport, HTTP status, serialization, local validation)
[OUTPUT]: Structured error types with status mapping and API error codes
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or status mappings
*/

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::types::MoneyError;

/// Main error type for the ioka adapter
#[derive(Error, Debug)]
pub enum IokaError {
    /// Request did not complete within the configured timeout
    #[error("Request timed out after {duration:?}")]
    Timeout { duration: Duration },

    /// Connection or transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error(transparent)]
    Status(#[from] StatusError),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Money value could not be constructed
    #[error("Invalid amount: {0}")]
    Money(#[from] MoneyError),

    /// Argument rejected before sending the request
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl IokaError {
    /// Check if the error is worth retrying by the caller
    pub fn is_retryable(&self) -> bool {
        match self {
            IokaError::Timeout { .. } | IokaError::Http(_) => true,
            IokaError::Status(status) => status.status.is_server_error(),
            _ => false,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, IokaError::Timeout { .. })
    }

    /// Underlying status error, if the API rejected the call
    pub fn as_status(&self) -> Option<&StatusError> {
        match self {
            IokaError::Status(status) => Some(status),
            _ => None,
        }
    }

    pub fn status_code(&self) -> Option<StatusCode> {
        self.as_status().map(|status| status.status)
    }

    pub fn status_kind(&self) -> Option<StatusErrorKind> {
        self.as_status().map(|status| status.kind)
    }

    /// API-specific error code such as `OrderUnpaid`
    pub fn api_code(&self) -> Option<&str> {
        self.as_status().map(|status| status.code.as_str())
    }
}

/// Category of a non-success response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusErrorKind {
    /// 400: request failed validation
    Validation,
    /// 401: missing or invalid API key
    Unauthenticated,
    /// 403: key lacks permission for the resource
    Unauthorized,
    /// 404
    NotFound,
    /// 409: already created, or operation impossible in the current state
    Conflict,
    /// Any other status
    Other,
}

const STATUS_KINDS: &[(StatusCode, StatusErrorKind)] = &[
    (StatusCode::BAD_REQUEST, StatusErrorKind::Validation),
    (StatusCode::UNAUTHORIZED, StatusErrorKind::Unauthenticated),
    (StatusCode::FORBIDDEN, StatusErrorKind::Unauthorized),
    (StatusCode::NOT_FOUND, StatusErrorKind::NotFound),
    (StatusCode::CONFLICT, StatusErrorKind::Conflict),
];

impl StatusErrorKind {
    pub fn from_status(status: StatusCode) -> Self {
        STATUS_KINDS
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, kind)| *kind)
            .unwrap_or(StatusErrorKind::Other)
    }
}

/// Error code used when the response body is not an API error payload
pub const UNKNOWN_ERROR_CODE: &str = "Unknown";

/// Non-success response from the ioka API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct StatusError {
    pub kind: StatusErrorKind,
    pub status: StatusCode,
    pub code: String,
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorPayload {
    code: String,
    message: String,
}

impl StatusError {
    /// Build from a response status and its raw body
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let (code, message) = match serde_json::from_slice::<ErrorPayload>(body) {
            Ok(payload) => (payload.code, payload.message),
            Err(_) => (
                UNKNOWN_ERROR_CODE.to_string(),
                String::from_utf8_lossy(body).into_owned(),
            ),
        };

        Self {
            kind: StatusErrorKind::from_status(status),
            status,
            code,
            message,
        }
    }
}

/// Result type alias for ioka operations
pub type Result<T> = std::result::Result<T, IokaError>;
