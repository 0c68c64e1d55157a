//! Assistant prompts and quick-reply suggestions for each step.

use crate::domain::lead::{Preferences, Purpose};

use super::ConversationStep;

/// Brand used when none is configured.
pub const DEFAULT_BRAND: &str = "KAYA";

const GREETING_SUGGESTIONS: &[&str] = &["Yes, I'm looking!", "Just browsing"];
const UNIT_SUGGESTIONS: &[&str] = &["Studio / 1BR", "2BR or 3BR", "Villa / Penthouse"];
const PURPOSE_SUGGESTIONS: &[&str] = &["Rent", "Buy"];
const RENT_BUDGET_SUGGESTIONS: &[&str] = &["50k - 100k", "100k - 200k", "250k+"];
const BUY_BUDGET_SUGGESTIONS: &[&str] = &["Below 1.5M", "1.5M - 3M", "Luxury (5M+)"];
const AREA_SUGGESTIONS: &[&str] = &["Downtown Dubai", "Dubai Marina", "Jumeirah Village Circle"];
const QANDA_SUGGESTIONS: &[&str] = &["No, I'm ready", "Talk to an agent"];

/// Maps each step to the assistant's message and quick replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBook {
    brand: String,
}

impl PromptBook {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Opening message addressed to the registered visitor.
    pub fn greeting(&self, name: &str) -> String {
        format!(
            "Welcome, {} to {} Real Estate. I am your digital concierge. Are you looking to find a new property today?",
            name, self.brand
        )
    }

    /// Assistant message for `step`.
    ///
    /// The budget question depends on whether the visitor wants to rent.
    pub fn prompt(&self, step: ConversationStep, preferences: &Preferences, name: &str) -> String {
        match step {
            ConversationStep::Greeting => self.greeting(name),
            ConversationStep::Unit => "Excellent. What kind of unit are you looking for?".to_string(),
            ConversationStep::Purpose => "Are you looking to Rent or Buy?".to_string(),
            ConversationStep::Budget if is_rent(preferences) => {
                "What is your yearly rental budget?".to_string()
            }
            ConversationStep::Budget => {
                "What is your ideal budget range for this investment?".to_string()
            }
            ConversationStep::Area => {
                "Which area in Dubai do you prefer? (e.g., Dunes Village, Downtown, Marina)"
                    .to_string()
            }
            ConversationStep::Qanda => {
                "I've noted your preferences. Any specific questions?".to_string()
            }
            ConversationStep::Closing => format!(
                "I've noted your preferences. Thank you. Your request is now priority. A {} team member will connect with you shortly via WhatsApp. Have a prestigious day!",
                self.brand
            ),
        }
    }

    /// Quick replies offered at `step`. Closing offers none.
    pub fn suggestions(&self, step: ConversationStep, preferences: &Preferences) -> &'static [&'static str] {
        match step {
            ConversationStep::Greeting => GREETING_SUGGESTIONS,
            ConversationStep::Unit => UNIT_SUGGESTIONS,
            ConversationStep::Purpose => PURPOSE_SUGGESTIONS,
            ConversationStep::Budget if is_rent(preferences) => RENT_BUDGET_SUGGESTIONS,
            ConversationStep::Budget => BUY_BUDGET_SUGGESTIONS,
            ConversationStep::Area => AREA_SUGGESTIONS,
            ConversationStep::Qanda => QANDA_SUGGESTIONS,
            ConversationStep::Closing => &[],
        }
    }
}

impl Default for PromptBook {
    fn default() -> Self {
        Self::new(DEFAULT_BRAND)
    }
}

fn is_rent(preferences: &Preferences) -> bool {
    preferences.purpose() == Some(Purpose::Rent)
}
