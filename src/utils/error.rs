//! Error handling module
//!
//! Defines the typed error taxonomy and API error classification

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transport::TransportError;

/// Error type for invalid requests
const INVALID_REQUEST_ERROR: &str = "invalid_request_error";
/// Error type for exhausted quota
const INSUFFICIENT_QUOTA: &str = "insufficient_quota";
/// Error type carried by request rate limits
const RATE_LIMIT_TYPE: &str = "requests";
/// Message fragment carried by request rate limits
const RATE_LIMIT_MESSAGE: &str = "Rate limit reached";

/// Error body as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Error message
    pub message: String,
    /// Error type
    #[serde(rename = "type")]
    pub error_type: String,
    /// Offending parameter (optional, opaque)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<serde_json::Value>,
    /// Error code (optional, opaque)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<serde_json::Value>,
}

/// Wire envelope for error responses: `{"error": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorEnvelope {
    /// Error information
    pub error: ApiErrorBody,
}

/// An explicit rejection from the API
///
/// Carries the decoded error body plus the HTTP status it arrived under.
/// Only ever constructed from a non-success response.
#[derive(Error, Debug, Clone)]
#[error("{}", .error.message)]
pub struct ApiError {
    /// Decoded error body
    pub error: ApiErrorBody,
    /// HTTP status code of the response
    pub http_status: u16,
}

impl ApiError {
    /// Build from a decoded envelope and the response status
    pub fn new(envelope: ApiErrorEnvelope, status: reqwest::StatusCode) -> Self {
        Self {
            error: envelope.error,
            http_status: status.as_u16(),
        }
    }

    /// Whether the request was rejected as malformed
    pub fn is_invalid_request(&self) -> bool {
        self.error.error_type == INVALID_REQUEST_ERROR
    }

    /// Whether the account quota is exhausted
    pub fn is_insufficient_quota(&self) -> bool {
        self.error.error_type == INSUFFICIENT_QUOTA
    }

    /// Whether the request rate limit was reached
    pub fn is_rate_limited(&self) -> bool {
        self.error.error_type == RATE_LIMIT_TYPE && self.error.message.contains(RATE_LIMIT_MESSAGE)
    }

    /// Whether the API suggests retrying the request (409 Conflict)
    pub fn is_retry_suggested(&self) -> bool {
        self.http_status == reqwest::StatusCode::CONFLICT.as_u16()
    }
}

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// Request body could not be encoded; local, never retried
    #[error("Request serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Network-level failure, surfaced after the retry budget is spent
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The API rejected the request
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Response body could not be decoded
    #[error("Response deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),
}

impl ClientError {
    /// The API error carried by this error, if any
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(api_error) => Some(api_error),
            _ => None,
        }
    }
}

/// Result type alias
pub type ClientResult<T> = Result<T, ClientError>;

/// Find an [`ApiError`] anywhere in an error's source chain
fn find_api_error<'a>(err: &'a (dyn std::error::Error + 'static)) -> Option<&'a ApiError> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(api_error) = e.downcast_ref::<ApiError>() {
            return Some(api_error);
        }
        current = e.source();
    }
    None
}

/// Returns true if the error is an API invalid-request rejection
pub fn is_invalid_request_error(err: &(dyn std::error::Error + 'static)) -> bool {
    find_api_error(err).is_some_and(ApiError::is_invalid_request)
}

/// Returns true if the error is an API insufficient-quota rejection
pub fn is_insufficient_quota_error(err: &(dyn std::error::Error + 'static)) -> bool {
    find_api_error(err).is_some_and(ApiError::is_insufficient_quota)
}

/// Returns true if the error is an API rate-limit rejection
pub fn is_rate_limited_error(err: &(dyn std::error::Error + 'static)) -> bool {
    find_api_error(err).is_some_and(ApiError::is_rate_limited)
}

/// Returns true if the error is an API rejection that suggests a retry
pub fn is_retry_suggested_error(err: &(dyn std::error::Error + 'static)) -> bool {
    find_api_error(err).is_some_and(ApiError::is_retry_suggested)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(error_type: &str, message: &str, status: u16) -> ApiError {
        ApiError {
            error: ApiErrorBody {
                message: message.to_string(),
                error_type: error_type.to_string(),
                param: None,
                code: None,
            },
            http_status: status,
        }
    }

    #[test]
    fn test_classification_predicates() {
        let invalid = api_error("invalid_request_error", "bad model", 400);
        assert!(invalid.is_invalid_request());
        assert!(!invalid.is_rate_limited());

        let quota = api_error("insufficient_quota", "quota exceeded", 429);
        assert!(quota.is_insufficient_quota());
        assert!(!quota.is_invalid_request());

        let rate = api_error("requests", "Rate limit reached for requests", 429);
        assert!(rate.is_rate_limited());
        assert!(!rate.is_insufficient_quota());

        // Type alone is not enough for the rate-limit classification
        let other = api_error("requests", "something else", 429);
        assert!(!other.is_rate_limited());
    }

    #[test]
    fn test_retry_suggested_on_conflict() {
        assert!(api_error("server_error", "try again", 409).is_retry_suggested());
        assert!(!api_error("server_error", "try again", 500).is_retry_suggested());
    }

    #[test]
    fn test_display_is_api_message() {
        let err = api_error("invalid_request_error", "bad model", 400);
        assert_eq!(err.to_string(), "bad model");

        let wrapped = ClientError::Api(err);
        assert_eq!(wrapped.to_string(), "bad model");
    }

    #[test]
    fn test_free_functions_extract_through_chain() {
        let wrapped = ClientError::Api(api_error("requests", "Rate limit reached for requests", 429));
        assert!(is_rate_limited_error(&wrapped));
        assert!(!is_invalid_request_error(&wrapped));
    }

    #[test]
    fn test_free_functions_reject_foreign_errors() {
        let transport = ClientError::Transport(TransportError::Connection("refused".to_string()));
        assert!(!is_rate_limited_error(&transport));
        assert!(!is_invalid_request_error(&transport));
        assert!(!is_insufficient_quota_error(&transport));
        assert!(!is_retry_suggested_error(&transport));
    }

    #[test]
    fn test_envelope_decoding() {
        let body = r#"{"error":{"message":"Rate limit reached for requests","type":"requests"}}"#;
        let envelope: ApiErrorEnvelope = serde_json::from_str(body).unwrap();
        let err = ApiError::new(envelope, reqwest::StatusCode::TOO_MANY_REQUESTS);

        assert!(err.is_rate_limited());
        assert_eq!(err.http_status, 429);
        assert!(err.error.param.is_none());
        assert!(err.error.code.is_none());
    }
}
