//! Data models module
//!
//! Defines request and response data structures for the chat completion API

pub mod chat;

pub use chat::{ChatMessage, Choice, CompletionRequest, CompletionResponse, Role, Usage};
