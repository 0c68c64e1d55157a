//! Preference extraction for one visitor turn.

use std::sync::Arc;

use tracing::debug;

use crate::domain::conversation::{extract_keywords, should_resolve_area, ConversationStep};
use crate::domain::lead::Preferences;
use crate::ports::AreaResolver;

/// Combines the keyword rules with the area resolver.
pub struct PreferenceExtractor {
    area_resolver: Arc<dyn AreaResolver>,
}

impl PreferenceExtractor {
    pub fn new(area_resolver: Arc<dyn AreaResolver>) -> Self {
        Self { area_resolver }
    }

    /// Returns `current` with any newly recognized fields filled in.
    ///
    /// `answering` is the step the visitor was replying to; the area is only
    /// resolved while answering the area question.
    pub async fn extract(
        &self,
        utterance: &str,
        current: &Preferences,
        answering: ConversationStep,
    ) -> Preferences {
        let mut preferences = extract_keywords(utterance, current);

        if should_resolve_area(&preferences, answering) {
            let area = self.area_resolver.resolve(utterance).await;
            debug!(area = %area, "Resolved area");
            preferences.fill_area(area);
        }

        preferences
    }
}
