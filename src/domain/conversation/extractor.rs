//! Keyword extraction of unit, purpose and budget from an utterance.
//!
//! Area resolution needs an external collaborator and lives in the
//! application layer; this module only decides whether it should run.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::lead::{Preferences, Purpose};

use super::ConversationStep;

/// Substrings that identify a unit type.
pub const UNIT_KEYWORDS: [&str; 6] = ["studio", "1br", "2br", "3br", "villa", "penthouse"];

/// Substrings that identify a budget statement.
pub const BUDGET_KEYWORDS: [&str; 3] = ["million", "aed", "budget"];

/// Amounts with a thousands or millions suffix, e.g. "50k", "1.5M", "5M+".
static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d+(\.\d+)?\s*(k|m)\b").expect("amount pattern is valid"));

/// Applies the keyword rules to `utterance`, filling only empty slots.
///
/// Unit and budget keep the raw utterance. Purpose prefers Rent when both
/// "rent" and "buy" appear.
pub fn extract_keywords(utterance: &str, preferences: &Preferences) -> Preferences {
    let mut updated = preferences.clone();
    let lower = utterance.to_lowercase();

    if UNIT_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        updated.fill_unit(utterance);
    }

    if lower.contains("rent") {
        updated.fill_purpose(Purpose::Rent);
    } else if lower.contains("buy") || lower.contains("invest") {
        updated.fill_purpose(Purpose::Buy);
    }

    if BUDGET_KEYWORDS.iter().any(|kw| lower.contains(kw)) || AMOUNT_PATTERN.is_match(utterance) {
        updated.fill_budget(utterance);
    }

    updated
}

/// Area is only resolved while the visitor is answering the area question.
pub fn should_resolve_area(preferences: &Preferences, answering: ConversationStep) -> bool {
    answering == ConversationStep::Area && preferences.area().is_none()
}
