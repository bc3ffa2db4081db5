//! AI Chat Client Library
//!
//! Provides a typed client for OpenAI-compatible chat completion APIs

pub mod config;
pub mod models;
pub mod services;
pub mod transport;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use models::chat::{
    ChatMessage, Choice, CompletionRequest, CompletionResponse, Role, Usage,
};
pub use services::ChatClient;
pub use transport::{
    HttpTransport, ReqwestTransport, RetryingTransport, TransportError, TransportRequest,
    TransportResponse,
};
pub use utils::error::{ApiError, ClientError, ClientResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
