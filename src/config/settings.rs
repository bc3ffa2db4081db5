//! Client configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default completion model
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Main client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// API configuration
    pub api: ApiConfig,
    /// Retry configuration
    pub retry: RetryConfig,
}

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API key
    pub api_key: String,
    /// API base URL
    pub base_url: String,
    /// Completion model name
    pub model: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// Skip TLS certificate verification (opt-in, for local gateways)
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

/// Retry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of additional transport attempts after the first
    pub max_retries: u32,
}

impl Settings {
    /// Create a configuration with the given API key and default values
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                api_key: api_key.into(),
                base_url: DEFAULT_BASE_URL.to_string(),
                model: DEFAULT_MODEL.to_string(),
                timeout: 30,
                accept_invalid_certs: false,
            },
            retry: RetryConfig { max_retries: 0 },
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Self {
            api: ApiConfig {
                api_key: env::var("OPENAI_API_KEY")
                    .context("OPENAI_API_KEY environment variable not set")?,
                base_url: get_env_or_default("OPENAI_BASE_URL", DEFAULT_BASE_URL),
                model: get_env_or_default("CHAT_MODEL", DEFAULT_MODEL),
                timeout: get_env_or_default("REQUEST_TIMEOUT", "30")
                    .parse()
                    .context("Invalid timeout value")?,
                accept_invalid_certs: get_env_or_default("ACCEPT_INVALID_CERTS", "false")
                    .parse()
                    .context("Invalid certificate verification flag")?,
            },
            retry: RetryConfig {
                // Negative values mean "no retry", same as zero
                max_retries: get_env_or_default("MAX_RETRIES", "0")
                    .parse::<i64>()
                    .context("Invalid max retries value")?
                    .max(0) as u32,
            },
        };

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        if self.api.api_key.is_empty() {
            anyhow::bail!("API key cannot be empty");
        }

        // Basic format validation - ensure no whitespace and minimum length
        if self.api.api_key.contains(char::is_whitespace) {
            anyhow::bail!("API key cannot contain whitespace characters");
        }

        if self.api.api_key.len() < 8 {
            anyhow::bail!("API key must be at least 8 characters long");
        }

        // Validate URL format
        if !self.api.base_url.starts_with("http") {
            anyhow::bail!("Invalid base URL format, should start with 'http'");
        }

        if self.api.model.is_empty() {
            anyhow::bail!("Completion model cannot be empty");
        }

        if self.api.timeout == 0 {
            anyhow::bail!("Timeout value cannot be 0");
        }

        Ok(())
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
