//! LeadStatus enum for tracking the operator's follow-up on a lead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Follow-up status of a lead, set only by explicit operator action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    Pending,
    AgentTalking,
    Success,
    Unsuccessful,
}

impl LeadStatus {
    /// All statuses in the order the operator dropdown lists them.
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::Pending,
        LeadStatus::AgentTalking,
        LeadStatus::Success,
        LeadStatus::Unsuccessful,
    ];

    /// Human-readable label; also the persisted column value.
    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::Pending => "Pending",
            LeadStatus::AgentTalking => "Agent Talking",
            LeadStatus::Success => "Success",
            LeadStatus::Unsuccessful => "Unsuccessful",
        }
    }

    /// Returns true once the lead has been resolved either way.
    pub fn is_closed(&self) -> bool {
        matches!(self, LeadStatus::Success | LeadStatus::Unsuccessful)
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LeadStatus {
    type Err = ValidationError;

    /// Accepts either the label or the snake_case wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStatus::ALL
            .into_iter()
            .find(|status| {
                status.label().eq_ignore_ascii_case(s)
                    || status.label().replace(' ', "_").eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| ValidationError::invalid_format("status", format!("unknown status '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pending() {
        assert_eq!(LeadStatus::default(), LeadStatus::Pending);
    }

    #[test]
    fn display_uses_operator_labels() {
        assert_eq!(LeadStatus::AgentTalking.to_string(), "Agent Talking");
        assert_eq!(LeadStatus::Unsuccessful.to_string(), "Unsuccessful");
    }

    #[test]
    fn parses_labels_and_wire_names() {
        assert_eq!("Agent Talking".parse::<LeadStatus>().unwrap(), LeadStatus::AgentTalking);
        assert_eq!("agent_talking".parse::<LeadStatus>().unwrap(), LeadStatus::AgentTalking);
        assert_eq!("success".parse::<LeadStatus>().unwrap(), LeadStatus::Success);
    }

    #[test]
    fn rejects_unknown_status() {
        assert!("Closed".parse::<LeadStatus>().is_err());
    }

    #[test]
    fn label_roundtrips_for_every_status() {
        for status in LeadStatus::ALL {
            assert_eq!(status.label().parse::<LeadStatus>().unwrap(), status);
        }
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&LeadStatus::AgentTalking).unwrap(),
            "\"agent_talking\""
        );
    }

    #[test]
    fn closed_statuses() {
        assert!(LeadStatus::Success.is_closed());
        assert!(LeadStatus::Unsuccessful.is_closed());
        assert!(!LeadStatus::Pending.is_closed());
    }
}
