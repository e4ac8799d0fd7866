//! Property tests for State equality and content hashing.

use proptest::prelude::*;

use tracker_core::models::{State, SubStateKind};

fn kind() -> impl Strategy<Value = SubStateKind> {
    prop::sample::select(SubStateKind::ALL.to_vec())
}

fn entries() -> impl Strategy<Value = Vec<(SubStateKind, String, String)>> {
    prop::collection::vec((kind(), "[a-d]{1,2}", "[a-z]{1,6}"), 0..8)
}

fn build(entries: &[(SubStateKind, String, String)]) -> State {
    let mut state = State::empty();
    for (kind, attribute, value) in entries {
        state.set(*kind, attribute, value.as_str());
    }
    state
}

// Insertion order never changes identity, as long as last writes agree.
proptest! {
    #[test]
    fn prop_hash_ignores_insertion_order(entries in entries()) {
        let mut deduped: Vec<(SubStateKind, String, String)> = Vec::new();
        for entry in entries {
            deduped.retain(|(k, a, _)| !(*k == entry.0 && *a == entry.1));
            deduped.push(entry);
        }
        let forward = build(&deduped);
        let mut reversed_entries = deduped.clone();
        reversed_entries.reverse();
        let reversed = build(&reversed_entries);

        prop_assert_eq!(&forward, &reversed);
        prop_assert_eq!(forward.content_hash().unwrap(), reversed.content_hash().unwrap());
    }
}

proptest! {
    #[test]
    fn prop_remove_undoes_set_on_fresh_attribute(entries in entries(), kind in kind()) {
        let base = build(&entries);
        let mut changed = base.clone();
        changed.set(kind, "fresh_attribute", "x");
        prop_assert_ne!(base.content_hash().unwrap(), changed.content_hash().unwrap());

        changed.remove(kind, "fresh_attribute");
        prop_assert_eq!(&base, &changed);
    }
}

proptest! {
    #[test]
    fn prop_json_round_trip_preserves_hash(entries in entries()) {
        let state = build(&entries);
        let json = serde_json::to_string(&state).unwrap();
        let back: State = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state.content_hash().unwrap(), back.content_hash().unwrap());
    }
}
