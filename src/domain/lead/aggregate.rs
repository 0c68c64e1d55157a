//! Lead aggregate entity.
//!
//! One lead is one chat session: the visitor's registration, the full
//! transcript, the preferences inferred from it and the operator's
//! follow-up status.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::ConversationStep;
use crate::domain::foundation::{LeadId, LeadStatus, Timestamp};

use super::{describe, Preferences, Registration, Transcript};

/// Lead aggregate.
///
/// # Invariants
///
/// - `id` is assigned by the lead store and never reused
/// - `registration` and `created_at` never change after creation
/// - `transcript` only grows while the chat session is active
/// - populated `preferences` fields are never cleared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    id: LeadId,
    registration: Registration,
    transcript: Transcript,
    preferences: Preferences,
    step: ConversationStep,
    status: LeadStatus,
    created_at: Timestamp,
}

impl Lead {
    /// Creates a fresh lead: empty transcript, unset preferences, status Pending.
    pub fn new(id: LeadId, registration: Registration, created_at: Timestamp) -> Self {
        Self {
            id,
            registration,
            transcript: Transcript::new(),
            preferences: Preferences::new(),
            step: ConversationStep::Greeting,
            status: LeadStatus::Pending,
            created_at,
        }
    }

    /// Reconstitute a lead from persistence (no validation).
    pub fn reconstitute(
        id: LeadId,
        registration: Registration,
        transcript: Transcript,
        preferences: Preferences,
        step: ConversationStep,
        status: LeadStatus,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            registration,
            transcript,
            preferences,
            step,
            status,
            created_at,
        }
    }

    pub fn id(&self) -> LeadId {
        self.id
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

    pub fn status(&self) -> LeadStatus {
        self.status
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Operator-facing one-line summary of the preferences.
    pub fn description(&self) -> String {
        describe(&self.preferences)
    }

    /// Replaces the conversation state after a turn.
    pub fn record_conversation(
        &mut self,
        transcript: Transcript,
        preferences: Preferences,
        step: ConversationStep,
    ) {
        self.transcript = transcript;
        self.preferences = preferences;
        self.step = step;
    }

    /// Sets the operator follow-up status.
    pub fn set_status(&mut self, status: LeadStatus) {
        self.status = status;
    }
}
