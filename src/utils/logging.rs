//! Logging utilities
//!
//! Shared helpers for summarizing requests in debug logs

use crate::models::chat::{ChatMessage, CompletionRequest};

/// Truncate a string with a note about original length
fn truncate_content(s: &str, max_len: usize) -> String {
    if s.len() > max_len {
        format!("{}... ({} chars truncated)", &s[..max_len], s.len() - max_len)
    } else {
        s.to_string()
    }
}

/// Create a filtered version of a message for logging
fn filter_message(msg: &ChatMessage) -> serde_json::Value {
    serde_json::json!({
        "role": msg.role,
        "content": truncate_content(&msg.content, 200),
    })
}

/// Create a filtered summary of a completion request for logging
///
/// Keeps the request structure but truncates message content. The API key
/// never passes through here; headers are not part of the summary.
pub fn create_request_log_summary(request: &CompletionRequest) -> serde_json::Value {
    let filtered_messages: Vec<serde_json::Value> =
        request.messages.iter().map(filter_message).collect();

    serde_json::json!({
        "model": request.model,
        "max_tokens": request.max_tokens,
        "temperature": request.temperature,
        "messages": filtered_messages,
    })
}
