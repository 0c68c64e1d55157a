//! HTTP DTOs for chat session endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::SessionView;
use crate::domain::lead::{Preferences, Turn};
use crate::ports::LeadSummary;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Registration form.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

/// One visitor message; typed text and quick replies look the same.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Session state after any chat operation.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session_token: String,
    pub lead_id: i64,
    pub name: String,
    pub email: String,
    pub step: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    pub suggestions: Vec<String>,
    pub preferences: Preferences,
    pub transcript: Vec<Turn>,
}

impl From<SessionView> for SessionResponse {
    fn from(view: SessionView) -> Self {
        let reply = view.reply().map(str::to_string);
        let context = view.context;
        Self {
            session_token: view.session_id.to_string(),
            lead_id: context.lead_id().as_i64(),
            name: context.registration().name().to_string(),
            email: context.registration().email().to_string(),
            step: context.step().as_str().to_string(),
            reply,
            suggestions: view.suggestions,
            preferences: context.preferences().clone(),
            transcript: context.transcript().turns().to_vec(),
        }
    }
}

/// A row of the session picker.
#[derive(Debug, Clone, Serialize)]
pub struct SavedLeadResponse {
    pub id: i64,
    pub timestamp: String,
    pub status: String,
}

impl From<LeadSummary> for SavedLeadResponse {
    fn from(summary: LeadSummary) -> Self {
        Self {
            id: summary.id.as_i64(),
            timestamp: summary.timestamp.to_rfc3339(),
            status: summary.status.label().to_string(),
        }
    }
}

/// Session picker contents, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct SavedLeadListResponse {
    pub leads: Vec<SavedLeadResponse>,
}
