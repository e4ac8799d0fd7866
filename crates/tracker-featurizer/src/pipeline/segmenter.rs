//! Turn segmentation: a fold over the event log that snapshots the
//! accumulated state at every action boundary.

use tracing::debug;
use tracker_core::constants::{ACTION_NAME, ENTITIES, INTENT, LOOP_NAME, TEXT};
use tracker_core::errors::{FeaturizerError, FeaturizerResult};
use tracker_core::models::{
    ActionExecution, AttributeValue, Event, State, SubState, SubStateKind, Turn, UserUtterance,
};

/// Split a replayed event sequence into turns.
///
/// The first turn is always the empty state. Every executed action closes
/// the open turn and opens a new one whose `prev_action` is that action.
/// User messages, slot changes and loop changes accumulate into the open
/// turn. No turn is dropped here; visibility is only tagged.
///
/// `fallback_action` is the low-confidence marker action whose turns get
/// `is_unlikely_intent`.
pub fn segment(events: &[Event], fallback_action: &str) -> FeaturizerResult<Vec<Turn>> {
    let mut turns: Vec<Turn> = Vec::new();
    let mut open = Turn::opening(0);
    let mut current = State::empty();
    let mut user_since_action = false;

    for (position, event) in events.iter().enumerate() {
        match event {
            Event::ActionExecuted(action) => {
                // A rule-chosen action marks the state it was chosen from.
                if action.hide_rule_turn {
                    open.is_rule_only = true;
                }
                let next = open_turn(action, fallback_action);
                close_turn(&mut turns, std::mem::replace(&mut open, next), &current);
                current.set(SubStateKind::PrevAction, ACTION_NAME, action.name.as_str());
                user_since_action = false;
            }
            Event::UserUttered(utterance) => {
                if user_since_action {
                    return Err(FeaturizerError::MalformedEventSequence {
                        position,
                        reason: "two consecutive user utterances without an intervening action"
                            .to_string(),
                    });
                }
                current.replace_sub_state(SubStateKind::User, user_sub_state(utterance));
                open.utterance = Some(utterance.clone());
                user_since_action = true;
            }
            Event::SlotSet { name, value } => {
                if value.is_null() {
                    current.remove(SubStateKind::Slots, name);
                } else {
                    current.set(SubStateKind::Slots, name, slot_value(value));
                }
            }
            Event::ActiveLoop { name } => match name {
                Some(name) => {
                    let mut sub = SubState::new();
                    sub.insert(LOOP_NAME.to_string(), AttributeValue::from(name.as_str()));
                    current.replace_sub_state(SubStateKind::ActiveLoop, sub);
                }
                None => current.clear_sub_state(SubStateKind::ActiveLoop),
            },
            Event::Restarted => {
                debug!(position, dropped = turns.len() + 1, "restart discards prior turns");
                turns.clear();
                open = Turn::opening(0);
                current = State::empty();
                user_since_action = false;
            }
        }
    }
    close_turn(&mut turns, open, &current);

    debug!(events = events.len(), turns = turns.len(), "segmented dialogue");
    Ok(turns)
}

fn open_turn(action: &ActionExecution, fallback_action: &str) -> Turn {
    Turn {
        index: 0,
        action: Some(action.name.clone()),
        state: State::empty(),
        is_rule_only: false,
        is_unlikely_intent: action.name == fallback_action,
        unpredictable: action.unpredictable,
        utterance: None,
    }
}

fn close_turn(turns: &mut Vec<Turn>, mut turn: Turn, current: &State) {
    turn.index = turns.len();
    // The opening turn stays empty whatever preceded the first action.
    if turn.action.is_some() {
        turn.state = current.clone();
    }
    turns.push(turn);
}

fn user_sub_state(utterance: &UserUtterance) -> SubState {
    let mut sub = SubState::new();
    if let Some(intent) = &utterance.intent {
        sub.insert(INTENT.to_string(), AttributeValue::from(intent.as_str()));
    } else if let Some(text) = &utterance.text {
        sub.insert(TEXT.to_string(), AttributeValue::from(text.as_str()));
    }
    let mut entities: Vec<String> = utterance.entities.iter().map(|e| e.entity.clone()).collect();
    entities.sort();
    entities.dedup();
    if !entities.is_empty() {
        sub.insert(ENTITIES.to_string(), AttributeValue::Names(entities));
    }
    sub
}

fn slot_value(value: &serde_json::Value) -> AttributeValue {
    match value {
        serde_json::Value::String(s) => AttributeValue::Text(s.clone()),
        other => AttributeValue::Literal {
            json: other.to_string(),
        },
    }
}
