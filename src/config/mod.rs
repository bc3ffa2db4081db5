//! Configuration management module
//!
//! Responsible for loading and validating client configuration from code or environment variables

pub mod settings;

pub use settings::Settings;
