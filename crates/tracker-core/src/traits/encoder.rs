use crate::models::{EncodedState, State};

/// Converts a semantic state into feature vectors.
pub trait IStateEncoder: Send + Sync {
    /// Encode one state. Must return the same output for equal states.
    fn encode_state(&self, state: &State) -> EncodedState;

    /// Human-readable encoder name, used as the feature origin.
    fn name(&self) -> &str;
}
