//! In-memory event store.

use std::collections::HashMap;

use crate::errors::{FeaturizerError, FeaturizerResult};
use crate::models::{Dialogue, Event};
use crate::traits::IEventReplay;

/// Keeps event logs in memory, keyed by dialogue id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventStore {
    dialogues: HashMap<String, Vec<Event>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append events to a dialogue, creating it if needed.
    pub fn append(&mut self, dialogue_id: &str, events: impl IntoIterator<Item = Event>) {
        self.dialogues
            .entry(dialogue_id.to_string())
            .or_default()
            .extend(events);
    }

    pub fn insert(&mut self, dialogue: Dialogue) {
        self.dialogues.insert(dialogue.id, dialogue.events);
    }

    pub fn len(&self) -> usize {
        self.dialogues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialogues.is_empty()
    }
}

impl IEventReplay for InMemoryEventStore {
    fn replay(&self, dialogue_id: &str) -> FeaturizerResult<Vec<Event>> {
        self.dialogues
            .get(dialogue_id)
            .cloned()
            .ok_or_else(|| FeaturizerError::DialogueNotFound {
                dialogue_id: dialogue_id.to_string(),
            })
    }
}
