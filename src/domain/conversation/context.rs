//! Per-browser-session conversation context.

use serde::Serialize;

use crate::domain::foundation::LeadId;
use crate::domain::lead::{Lead, Preferences, Registration, Transcript};

use super::{ConversationStep, PromptBook};

/// Everything a turn needs about the active lead.
///
/// Contexts are values: a turn produces a new context and the caller swaps
/// it in only after the lead store accepted the write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionContext {
    lead_id: LeadId,
    registration: Registration,
    transcript: Transcript,
    preferences: Preferences,
    step: ConversationStep,
}

impl SessionContext {
    /// Opens a context for a freshly created lead, seeded with the greeting.
    pub fn start(lead_id: LeadId, registration: Registration, prompts: &PromptBook) -> Self {
        let mut transcript = Transcript::new();
        transcript.push_assistant(prompts.greeting(registration.name()));
        Self {
            lead_id,
            registration,
            transcript,
            preferences: Preferences::new(),
            step: ConversationStep::Greeting,
        }
    }

    /// Opens a context for a saved lead.
    ///
    /// A lead saved before its first turn has an empty transcript; the
    /// greeting is shown again in that case.
    pub fn resume(lead: &Lead, prompts: &PromptBook) -> Self {
        let mut transcript = lead.transcript().clone();
        if transcript.is_empty() {
            transcript.push_assistant(prompts.greeting(lead.registration().name()));
        }
        Self {
            lead_id: lead.id(),
            registration: lead.registration().clone(),
            transcript,
            preferences: lead.preferences().clone(),
            step: lead.step(),
        }
    }

    pub fn lead_id(&self) -> LeadId {
        self.lead_id
    }

    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn step(&self) -> ConversationStep {
        self.step
    }

    /// The assistant message for the current step.
    pub fn prompt(&self, prompts: &PromptBook) -> String {
        prompts.prompt(self.step, &self.preferences, self.registration.name())
    }

    /// Quick replies for the current step.
    pub fn suggestions(&self, prompts: &PromptBook) -> Vec<String> {
        prompts
            .suggestions(self.step, &self.preferences)
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Builds the context that follows one completed turn.
    pub fn advance(
        &self,
        utterance: &str,
        preferences: Preferences,
        step: ConversationStep,
        reply: &str,
    ) -> Self {
        let mut transcript = self.transcript.clone();
        transcript.push_user(utterance);
        transcript.push_assistant(reply);
        Self {
            lead_id: self.lead_id,
            registration: self.registration.clone(),
            transcript,
            preferences,
            step,
        }
    }
}
