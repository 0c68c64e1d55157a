//! Conversation steps of the lead questionnaire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::lead::PreferenceField;

/// Position of a chat session in the questionnaire.
///
/// Variants are declared in precedence order; `Ord` follows that order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStep {
    #[default]
    Greeting,
    Unit,
    Purpose,
    Budget,
    Area,
    Qanda,
    Closing,
}

impl ConversationStep {
    /// All steps in precedence order.
    pub const ALL: [ConversationStep; 7] = [
        ConversationStep::Greeting,
        ConversationStep::Unit,
        ConversationStep::Purpose,
        ConversationStep::Budget,
        ConversationStep::Area,
        ConversationStep::Qanda,
        ConversationStep::Closing,
    ];

    /// The preference slot this step asks for, if any.
    pub fn required_field(&self) -> Option<PreferenceField> {
        match self {
            ConversationStep::Unit => Some(PreferenceField::Unit),
            ConversationStep::Purpose => Some(PreferenceField::Purpose),
            ConversationStep::Budget => Some(PreferenceField::Budget),
            ConversationStep::Area => Some(PreferenceField::Area),
            ConversationStep::Greeting | ConversationStep::Qanda | ConversationStep::Closing => None,
        }
    }

    /// Persisted name of the step.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationStep::Greeting => "greeting",
            ConversationStep::Unit => "unit",
            ConversationStep::Purpose => "purpose",
            ConversationStep::Budget => "budget",
            ConversationStep::Area => "area",
            ConversationStep::Qanda => "qanda",
            ConversationStep::Closing => "closing",
        }
    }
}

impl fmt::Display for ConversationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConversationStep {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConversationStep::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("step", format!("unknown step '{}'", s)))
    }
}

impl StateMachine for ConversationStep {
    /// Steps only move forward; closing has no exits.
    fn can_transition_to(&self, target: &Self) -> bool {
        *self != ConversationStep::Closing && target > self
    }

    fn valid_transitions(&self) -> Vec<Self> {
        ConversationStep::ALL
            .into_iter()
            .filter(|target| self.can_transition_to(target))
            .collect()
    }
}
