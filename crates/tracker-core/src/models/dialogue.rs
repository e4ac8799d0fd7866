use serde::{Deserialize, Serialize};

use super::event::Event;

/// A replayed conversation: its id and ordered event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dialogue {
    pub id: String,
    pub events: Vec<Event>,
}

impl Dialogue {
    pub fn from_events(id: impl Into<String>, events: Vec<Event>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
