use crate::errors::FeaturizerResult;
use crate::models::Event;

/// Read-only access to recorded dialogues.
pub trait IEventReplay: Send + Sync {
    /// Replay one dialogue into its ordered event sequence.
    fn replay(&self, dialogue_id: &str) -> FeaturizerResult<Vec<Event>>;
}
