//! Retrying transport wrapper
//!
//! Bounded, unconditional retry over any one-shot transport

use async_trait::async_trait;
use tracing::warn;

use super::{HttpTransport, TransportError, TransportRequest, TransportResponse};

/// Transport wrapper that retries failed sends
///
/// Performs up to `max_retries + 1` attempts of the same request. Every
/// transport error is retried; there is no backoff and no error-kind
/// filtering. Known limitation: callers needing backoff or selective retry
/// should wrap their own transport. HTTP error statuses come back as
/// responses and are never retried here.
#[derive(Debug, Clone)]
pub struct RetryingTransport<T> {
    inner: T,
    max_retries: u32,
}

impl<T> RetryingTransport<T> {
    /// Wrap a transport with the given retry budget
    pub fn new(inner: T, max_retries: u32) -> Self {
        Self { inner, max_retries }
    }

    /// Get inner transport reference
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// The configured retry budget
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for RetryingTransport<T> {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            match self.inner.send(request.clone()).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    warn!(
                        "Transport attempt {}/{} failed: {}",
                        attempt + 1,
                        self.max_retries + 1,
                        e
                    );
                    last_error = Some(e);
                }
            }
        }

        // The loop body ran at least once
        Err(last_error.unwrap())
    }
}
