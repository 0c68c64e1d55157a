//! AI Provider Adapters.
//!
//! Implementations of the AIProvider and AreaResolver ports.
//!
//! ## Available Adapters
//!
//! - `OllamaProvider` - Local Ollama server (default)
//! - `OpenAIProvider` - OpenAI-compatible chat completions
//! - `MockAIProvider` - Configurable mock for testing
//! - `LlmAreaResolver` - Area normalization on top of any provider
//! - `PassthroughAreaResolver` - No model; keeps the raw answer

mod area_resolver;
mod http_errors;
mod mock_provider;
mod ollama_provider;
mod openai_provider;

pub use area_resolver::{LlmAreaResolver, PassthroughAreaResolver, AREA_INSTRUCTION};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use ollama_provider::{OllamaConfig, OllamaProvider};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};

use std::sync::Arc;

use crate::config::{AiConfig, AiProvider};
use crate::ports::{AIError, AreaResolver};

/// Builds the area resolver selected by configuration.
pub fn area_resolver_from_config(config: &AiConfig) -> Result<Arc<dyn AreaResolver>, AIError> {
    let resolver: Arc<dyn AreaResolver> = match config.provider {
        AiProvider::Disabled => Arc::new(PassthroughAreaResolver),
        AiProvider::Ollama => {
            let provider = OllamaProvider::new(
                OllamaConfig::new(config.resolved_base_url())
                    .with_model(&config.model)
                    .with_timeout(config.timeout()),
            )?;
            Arc::new(LlmAreaResolver::new(Arc::new(provider), config.timeout()))
        }
        AiProvider::OpenAI => {
            let provider = OpenAIProvider::new(
                OpenAIConfig::new(config.api_key.clone().unwrap_or_default())
                    .with_model(&config.model)
                    .with_base_url(config.resolved_base_url())
                    .with_timeout(config.timeout()),
            )?;
            Arc::new(LlmAreaResolver::new(Arc::new(provider), config.timeout()))
        }
    };
    Ok(resolver)
}
