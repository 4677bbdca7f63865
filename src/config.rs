//! Environment configuration.
//!
//! The API key is the only external input. The model identifier and the
//! endpoint are fixed; neither is user-selectable.

use std::env;

use crate::error::ConfigError;

/// Environment variable holding the bearer token for the completions endpoint.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Model the drafts are requested from.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Runtime configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Fails with [`ConfigError::MissingApiKey`] when the key is absent or
    /// empty. This runs before any git or network work so a misconfigured
    /// shell fails fast.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_VAR).unwrap_or_default();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
        })
    }
}
