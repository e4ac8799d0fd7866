//! Featurization errors and per-dialogue failure collection.

use super::ConfigError;

/// Errors that abort featurization of a single dialogue.
#[derive(Debug, thiserror::Error)]
pub enum FeaturizerError {
    #[error("unknown action '{action}' is not part of the action vocabulary")]
    UnknownAction { action: String },

    #[error("malformed event sequence at event {position}: {reason}")]
    MalformedEventSequence { position: usize, reason: String },

    #[error("dialogue not found: {dialogue_id}")]
    DialogueNotFound { dialogue_id: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// A dialogue that could not be featurized, with the reason.
#[derive(Debug)]
pub struct DialogueFailure {
    pub dialogue_id: String,
    pub error: FeaturizerError,
}

/// Output of a batch operation that keeps going past per-dialogue failures.
///
/// `data` holds everything produced from the dialogues that succeeded;
/// `failures` lists the ones that did not, in input order.
#[derive(Debug, Default)]
pub struct FeaturizationResult<T: Default = ()> {
    pub data: T,
    pub failures: Vec<DialogueFailure>,
}

impl<T: Default> FeaturizationResult<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            failures: Vec::new(),
        }
    }

    /// Record a failed dialogue.
    pub fn add_failure(&mut self, dialogue_id: impl Into<String>, error: FeaturizerError) {
        self.failures.push(DialogueFailure {
            dialogue_id: dialogue_id.into(),
            error,
        });
    }

    /// Returns true if every dialogue succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Map the successful data, keeping the failures.
    pub fn map<U: Default>(self, f: impl FnOnce(T) -> U) -> FeaturizationResult<U> {
        FeaturizationResult {
            data: f(self.data),
            failures: self.failures,
        }
    }
}
