use serde::{Deserialize, Serialize};

use super::state::State;

/// Trailing sequence of states ending at a decision point, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryWindow(Vec<State>);

impl HistoryWindow {
    pub fn new(states: Vec<State>) -> Self {
        Self(states)
    }

    pub fn states(&self) -> &[State] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The state the next action is chosen from.
    pub fn last(&self) -> Option<&State> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.0.iter()
    }
}

impl From<Vec<State>> for HistoryWindow {
    fn from(states: Vec<State>) -> Self {
        Self(states)
    }
}

impl<'a> IntoIterator for &'a HistoryWindow {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
