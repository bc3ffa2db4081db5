//! Transport module
//!
//! Defines the HTTP transport seam and its implementations

pub mod http;
pub mod retry;

pub use http::ReqwestTransport;
pub use retry::RetryingTransport;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// A single already-constructed HTTP request
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Full request URL
    pub url: String,
    /// Request headers
    pub headers: Vec<(String, String)>,
    /// Request body (optional)
    pub body: Option<Vec<u8>>,
    /// Per-request deadline, passed through to the transport (optional)
    pub timeout: Option<Duration>,
}

impl TransportRequest {
    /// Create a POST request with the given body
    pub fn post(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers: Vec::new(),
            body: Some(body),
            timeout: None,
        }
    }

    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    /// Attach a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a per-request deadline
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// The response to a single HTTP request
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Raw response body
    pub body: Vec<u8>,
}

/// Transport-level failure (connection, TLS, timeout)
///
/// An HTTP error status is not a transport failure; it is reported through
/// the response.
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP client error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection failed
    #[error("Connection failed: {0}")]
    Connection(String),
}

/// One-shot HTTP transport
///
/// Implementations send a single request and return either the response,
/// whatever its status, or a transport-level error.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send one request
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}
