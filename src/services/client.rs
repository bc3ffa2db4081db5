//! Chat completion client
//!
//! Builds requests, signs them, and decodes success or error payloads

use anyhow::Result;
use tracing::{debug, error};

use crate::config::Settings;
use crate::models::chat::{ChatMessage, CompletionRequest, CompletionResponse, ModelList};
use crate::transport::{HttpTransport, ReqwestTransport, RetryingTransport, TransportRequest};
use crate::utils::error::{ApiError, ApiErrorEnvelope, ClientError, ClientResult};
use crate::utils::logging::create_request_log_summary;

/// Client for an OpenAI-compatible chat completion API
///
/// Holds no per-call state; a single instance can serve concurrent calls as
/// long as the transport allows it (the default `reqwest` transport does).
#[derive(Debug, Clone)]
pub struct ChatClient<T: HttpTransport = ReqwestTransport> {
    transport: RetryingTransport<T>,
    settings: Settings,
}

impl ChatClient<ReqwestTransport> {
    /// Create a client with the default reqwest transport
    pub fn new(settings: Settings) -> Result<Self> {
        let transport = ReqwestTransport::new(&settings.api)?;
        Ok(Self::with_transport(settings, transport))
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(Settings::from_env()?)
    }
}

impl<T: HttpTransport> ChatClient<T> {
    /// Create a client over a caller-supplied transport
    pub fn with_transport(settings: Settings, transport: T) -> Self {
        let max_retries = settings.retry.max_retries;
        Self {
            transport: RetryingTransport::new(transport, max_retries),
            settings,
        }
    }

    /// The client configuration
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.settings.api.base_url.trim_end_matches('/'), path)
    }

    fn bearer_header(&self) -> String {
        format!("Bearer {}", self.settings.api.api_key)
    }

    /// Send a chat completion request
    ///
    /// Serialization failures are local and never retried. Transport failures
    /// are retried inside the transport wrapper. An API rejection is decoded
    /// into [`ApiError`] with the response status attached and is never
    /// retried here.
    pub async fn complete(&self, request: CompletionRequest) -> ClientResult<CompletionResponse> {
        debug!(
            "Sending chat completion request: {}",
            create_request_log_summary(&request)
        );

        let body = serde_json::to_vec(&request).map_err(ClientError::Serialization)?;

        let transport_request =
            TransportRequest::post(self.endpoint_url("/chat/completions"), body)
                .header("Authorization", self.bearer_header())
                .header("Content-Type", "application/json");

        let response = self.transport.send(transport_request).await?;

        if response.status.is_success() {
            let completion: CompletionResponse =
                serde_json::from_slice(&response.body).map_err(ClientError::Deserialization)?;

            debug!("Chat completion request completed successfully");
            Ok(completion)
        } else {
            let envelope: ApiErrorEnvelope =
                serde_json::from_slice(&response.body).map_err(ClientError::Deserialization)?;
            let api_error = ApiError::new(envelope, response.status);

            error!("API rejected request: {} - {}", response.status, api_error);
            Err(ClientError::Api(api_error))
        }
    }

    /// Complete a single prompt with the configured model
    pub async fn complete_with_prompt(
        &self,
        prompt: impl Into<String>,
    ) -> ClientResult<CompletionResponse> {
        self.complete_with_history(prompt, Vec::new()).await
    }

    /// Complete a prompt followed by caller-supplied history messages
    pub async fn complete_with_history(
        &self,
        prompt: impl Into<String>,
        history: Vec<ChatMessage>,
    ) -> ClientResult<CompletionResponse> {
        let request =
            CompletionRequest::from_prompt(self.settings.api.model.clone(), prompt, history);
        self.complete(request).await
    }

    /// Get available models list
    pub async fn list_models(&self) -> ClientResult<Vec<String>> {
        debug!("Requesting available models list");

        let transport_request = TransportRequest::get(self.endpoint_url("/models"))
            .header("Authorization", self.bearer_header());

        let response = self.transport.send(transport_request).await?;

        if response.status.is_success() {
            let models: ModelList =
                serde_json::from_slice(&response.body).map_err(ClientError::Deserialization)?;
            Ok(models.data.into_iter().map(|model| model.id).collect())
        } else {
            let envelope: ApiErrorEnvelope =
                serde_json::from_slice(&response.body).map_err(ClientError::Deserialization)?;
            Err(ClientError::Api(ApiError::new(envelope, response.status)))
        }
    }
}
