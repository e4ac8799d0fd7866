use std::collections::HashSet;

use tracker_core::constants::*;
use tracker_core::models::*;

fn user_state(intent: &str) -> State {
    State::empty()
        .with(SubStateKind::PrevAction, ACTION_NAME, ACTION_LISTEN_NAME)
        .with(SubStateKind::User, INTENT, intent)
}

#[test]
fn empty_state_is_empty() {
    let state = State::empty();
    assert!(state.is_empty());
    assert_eq!(state.previous_action(), None);
    assert!(!state.is_previous_action_listen());
}

#[test]
fn state_equality_ignores_insertion_order() {
    let a = State::empty()
        .with(SubStateKind::User, INTENT, "greet")
        .with(SubStateKind::PrevAction, ACTION_NAME, ACTION_LISTEN_NAME);
    let b = user_state("greet");
    assert_eq!(a, b);
    assert_eq!(a.content_hash().unwrap(), b.content_hash().unwrap());

    let set: HashSet<State> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn different_states_hash_differently() {
    let a = user_state("greet");
    let b = user_state("deny");
    assert_ne!(a.content_hash().unwrap(), b.content_hash().unwrap());
}

#[test]
fn removing_last_attribute_drops_the_role() {
    let mut state = State::empty().with(SubStateKind::ActiveLoop, LOOP_NAME, "restaurant_form");
    state.remove(SubStateKind::ActiveLoop, LOOP_NAME);
    assert!(state.sub_state(SubStateKind::ActiveLoop).is_none());
    assert!(state.is_empty());
}

#[test]
fn replacing_with_empty_sub_state_removes_role() {
    let mut state = user_state("greet");
    state.replace_sub_state(SubStateKind::User, SubState::new());
    assert!(state.sub_state(SubStateKind::User).is_none());
    assert_eq!(state.len(), 1);
}

#[test]
fn state_serializes_with_role_keys() {
    let json = serde_json::to_value(user_state("greet")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "user": {"intent": "greet"},
            "prev_action": {"action_name": "action_listen"}
        })
    );
    let back: State = serde_json::from_value(json).unwrap();
    assert_eq!(back, user_state("greet"));
}

#[test]
fn events_deserialize_from_tagged_json() {
    let events: Vec<Event> = serde_json::from_str(
        r#"[
            {"event": "action_executed", "name": "action_listen"},
            {"event": "user_uttered", "intent": "greet"},
            {"event": "action_executed", "name": "utter_greet", "hide_rule_turn": true},
            {"event": "slot_set", "name": "cuisine", "value": "thai"},
            {"event": "active_loop", "name": null},
            {"event": "restarted"}
        ]"#,
    )
    .unwrap();
    assert_eq!(events[0], Event::action(ACTION_LISTEN_NAME));
    assert_eq!(events[1], Event::user("greet"));
    assert_eq!(events[2], Event::rule_action("utter_greet"));
    assert_eq!(events[3], Event::slot("cuisine", serde_json::json!("thai")));
    assert_eq!(events[4], Event::active_loop(None));
    assert_eq!(events[5].kind(), "restarted");
}

#[test]
fn end_to_end_utterance_has_text_and_no_intent() {
    let Event::UserUttered(utterance) = Event::user_text("hi there", vec![]) else {
        panic!("expected a user utterance");
    };
    assert!(utterance.is_end_to_end());
    let Event::UserUttered(utterance) = Event::user("greet") else {
        panic!("expected a user utterance");
    };
    assert!(!utterance.is_end_to_end());
}

#[test]
fn unpredictable_turn_has_no_label() {
    let mut turn = Turn::opening(0);
    assert_eq!(turn.label_action(), None);
    turn.action = Some("utter_greet".into());
    assert_eq!(turn.label_action(), Some("utter_greet"));
    turn.unpredictable = true;
    assert_eq!(turn.label_action(), None);
}

#[test]
fn multi_hot_sorts_and_dedups() {
    let values = FeatureValues::multi_hot(4, vec![3, 1, 3]);
    assert_eq!(values.dim(), 4);
    assert_eq!(values.to_dense(), vec![0.0, 1.0, 0.0, 1.0]);
}

#[test]
fn history_window_exposes_last_state() {
    let window = HistoryWindow::new(vec![State::empty(), user_state("greet")]);
    assert_eq!(window.len(), 2);
    assert_eq!(window.last().and_then(State::intent), Some("greet"));
}

#[test]
fn literal_slot_values_serialize_apart_from_text() {
    let literal = AttributeValue::Literal { json: "4".into() };
    let text = AttributeValue::from("4");
    assert_eq!(serde_json::to_value(&literal).unwrap(), serde_json::json!({"json": "4"}));
    assert_eq!(serde_json::to_value(&text).unwrap(), serde_json::json!("4"));

    let back: AttributeValue = serde_json::from_value(serde_json::json!({"json": "4"})).unwrap();
    assert_eq!(back, literal);
    assert_eq!(literal.names(), vec!["4"]);
    assert_eq!(literal.as_text(), None);
}
