//! Area resolvers.
//!
//! `LlmAreaResolver` asks a language model for the Dubai area named in an
//! utterance. Whatever goes wrong (no answer, "NONE", an error, the time
//! budget running out) the raw utterance is used instead.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::ports::{AIProvider, AreaResolver, CompletionRequest, MessageRole};

/// Instruction sent with every area lookup.
pub const AREA_INSTRUCTION: &str = "Extract Dubai area name or return NONE";

/// Resolves areas through an `AIProvider` within a time budget.
pub struct LlmAreaResolver {
    provider: Arc<dyn AIProvider>,
    timeout: Duration,
}

impl LlmAreaResolver {
    pub fn new(provider: Arc<dyn AIProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }
}

#[async_trait]
impl AreaResolver for LlmAreaResolver {
    async fn resolve(&self, utterance: &str) -> String {
        let request = CompletionRequest::new()
            .with_system_prompt(AREA_INSTRUCTION)
            .with_message(MessageRole::User, utterance)
            .with_temperature(0.0);

        match tokio::time::timeout(self.timeout, self.provider.complete(request)).await {
            Ok(Ok(response)) => {
                let answer = response.content.trim();
                if answer.is_empty() || answer.to_uppercase().contains("NONE") {
                    tracing::debug!("Area model found no area, keeping raw answer");
                    utterance.to_string()
                } else {
                    tracing::debug!(area = %answer, "Area resolved");
                    answer.to_string()
                }
            }
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "Area resolution failed, keeping raw answer");
                utterance.to_string()
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.timeout.as_secs(),
                    "Area resolution timed out, keeping raw answer"
                );
                utterance.to_string()
            }
        }
    }
}

/// Keeps the utterance as-is. Used when no model is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughAreaResolver;

#[async_trait]
impl AreaResolver for PassthroughAreaResolver {
    async fn resolve(&self, utterance: &str) -> String {
        utterance.to_string()
    }
}
