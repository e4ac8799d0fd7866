//! Discrete dialogue steps produced by the turn segmenter.

use serde::{Deserialize, Serialize};

use super::event::UserUtterance;
use super::state::State;

/// One step of a dialogue: the action that opened it and the state it left
/// behind.
///
/// `state` accumulates everything up to the next action: the action itself
/// as `prev_action`, plus any user message, slot or loop changes that
/// followed it. Each turn owns its snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Position in the segmented dialogue.
    pub index: usize,
    /// Action whose execution opened this turn. `None` for the opening turn.
    pub action: Option<String>,
    pub state: State,
    /// The action chosen *from* this turn's state came from a rule.
    pub is_rule_only: bool,
    /// `action` is the low-confidence fallback marker.
    pub is_unlikely_intent: bool,
    /// `action` must not be used as a training label.
    pub unpredictable: bool,
    /// User message received during this turn, if any.
    pub utterance: Option<UserUtterance>,
}

impl Turn {
    /// The empty turn every dialogue starts from.
    pub fn opening(index: usize) -> Self {
        Self {
            index,
            action: None,
            state: State::empty(),
            is_rule_only: false,
            is_unlikely_intent: false,
            unpredictable: false,
            utterance: None,
        }
    }

    /// The action this turn contributes as a training label, if any.
    pub fn label_action(&self) -> Option<&str> {
        match &self.action {
            Some(action) if !self.unpredictable => Some(action),
            _ => None,
        }
    }
}
