//! AI provider configuration
//!
//! The language model is only used to normalize area names, so every
//! provider failure degrades to the raw utterance instead of an error.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Which provider resolves area names
    #[serde(default)]
    pub provider: AiProvider,

    /// Provider base URL; defaults per provider when unset
    pub base_url: Option<String>,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API key (OpenAI-compatible providers only)
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Ollama,
    OpenAI,
    /// No model; the raw utterance is stored as the area.
    Disabled,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL for the configured provider
    pub fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ => match self.provider {
                AiProvider::OpenAI => "https://api.openai.com/v1".to_string(),
                AiProvider::Ollama | AiProvider::Disabled => "http://localhost:11434".to_string(),
            },
        }
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidAiTimeout);
        }
        if self.provider == AiProvider::Disabled {
            return Ok(());
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AI_MODEL"));
        }
        let url = self.resolved_base_url();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ValidationError::InvalidAiBaseUrl(url));
        }
        if self.provider == AiProvider::OpenAI && !self.has_api_key() {
            return Err(ValidationError::MissingRequired("AI_API_KEY"));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            base_url: None,
            model: default_model(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "llama3.1".to_string()
}

fn default_timeout() -> u64 {
    10
}
