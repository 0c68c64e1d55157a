//! HTTP DTOs for operator lead endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::LeadStatus;
use crate::domain::lead::{Lead, Preferences, Turn};

/// Status dropdown change. Accepts the label ("Agent Talking") or the wire
/// name ("agent_talking").
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Full lead view for the review screen.
#[derive(Debug, Clone, Serialize)]
pub struct LeadResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub status: LeadStatus,
    pub status_label: String,
    pub step: String,
    pub description: String,
    pub preferences: Preferences,
    pub transcript: Vec<Turn>,
    pub timestamp: String,
}

impl From<Lead> for LeadResponse {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id().as_i64(),
            name: lead.registration().name().to_string(),
            email: lead.registration().email().to_string(),
            mobile: lead.registration().mobile().to_string(),
            status: lead.status(),
            status_label: lead.status().label().to_string(),
            step: lead.step().as_str().to_string(),
            description: lead.description(),
            preferences: lead.preferences().clone(),
            transcript: lead.transcript().turns().to_vec(),
            timestamp: lead.created_at().to_rfc3339(),
        }
    }
}
