//! Step selection after each visitor turn.

use crate::domain::foundation::StateMachine;
use crate::domain::lead::Preferences;

use super::ConversationStep;

/// Quick replies that end the questionnaire regardless of progress.
pub const EXIT_PHRASES: [&str; 2] = ["No, I'm ready", "Talk to an agent"];

/// Returns true if the utterance is exactly one of the exit phrases.
pub fn is_exit_phrase(utterance: &str) -> bool {
    EXIT_PHRASES.contains(&utterance)
}

/// Picks the step to ask next.
///
/// Closing is absorbing and an exit phrase always closes. Otherwise the
/// first step whose preference slot is still empty wins, falling back to
/// `Qanda` once all four are filled. The result never precedes `current`.
pub fn next_step(
    preferences: &Preferences,
    utterance: &str,
    current: ConversationStep,
) -> ConversationStep {
    if current.is_terminal() {
        return current;
    }
    if is_exit_phrase(utterance) {
        return ConversationStep::Closing;
    }

    let candidate = ConversationStep::ALL
        .into_iter()
        .find(|step| {
            step.required_field()
                .is_some_and(|field| !preferences.is_set(field))
        })
        .unwrap_or(ConversationStep::Qanda);

    current.transition_to(candidate).unwrap_or(current)
}
