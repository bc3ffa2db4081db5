//! Service layer module
//!
//! Contains the chat completion client

pub mod client;

pub use client::ChatClient;
