//! Area resolver port.
//!
//! Normalizes a free-text answer to the "which area" question into a
//! canonical Dubai area name. Resolution cannot fail from the caller's
//! point of view: adapters fall back to the raw utterance.

use async_trait::async_trait;

/// Port for turning an utterance into an area name.
#[async_trait]
pub trait AreaResolver: Send + Sync {
    /// Returns the area named in `utterance`, or `utterance` itself when no
    /// better answer is available.
    async fn resolve(&self, utterance: &str) -> String;
}
