//! One-line lead description used in the spreadsheet export.

use super::Preferences;

const UNSPECIFIED: &str = "unspecified";

/// Summarizes preferences for the operator.
///
/// A lead without a unit is still browsing; anything else is rendered as
/// "Looking for {unit} to {purpose} in {area} (Budget: {budget})".
pub fn describe(preferences: &Preferences) -> String {
    let Some(unit) = preferences.unit() else {
        return "New Lead / Browsing".to_string();
    };

    let purpose = preferences
        .purpose()
        .map(|p| p.to_string())
        .unwrap_or_else(|| UNSPECIFIED.to_string());

    format!(
        "Looking for {} to {} in {} (Budget: {})",
        unit,
        purpose,
        preferences.area().unwrap_or(UNSPECIFIED),
        preferences.budget().unwrap_or(UNSPECIFIED),
    )
}
