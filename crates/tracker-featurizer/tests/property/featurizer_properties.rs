//! Property tests for windowing, truncation and deduplication.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use tracker_core::config::FeaturizerConfig;
use tracker_core::constants::{ACTION_LISTEN_NAME, ACTION_UNLIKELY_INTENT_NAME};
use tracker_core::models::{Dialogue, Event, State};
use tracker_featurizer::pipeline::{self, deduplication, StageContext, VisibilityFlags};
use tracker_featurizer::{PredictionOptions, SingleStateEncoder, TrackerFeaturizer, TrainingOptions};

const INTENTS: &[&str] = &["greet", "goodbye", "affirm", "deny", "mood_great"];
const ACTIONS: &[&str] = &["utter_greet", "utter_happy", "utter_goodbye", "utter_cheer_up"];

#[derive(Debug, Clone)]
enum Step {
    Listen(usize),
    Bot(usize),
    Unlikely,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (0..INTENTS.len()).prop_map(Step::Listen),
        4 => (0..ACTIONS.len()).prop_map(Step::Bot),
        1 => Just(Step::Unlikely),
    ]
}

fn dialogue(id: usize, steps: &[Step]) -> Dialogue {
    let mut events = Vec::new();
    for step in steps {
        match step {
            Step::Listen(i) => {
                events.push(Event::action(ACTION_LISTEN_NAME));
                events.push(Event::user(INTENTS[*i]));
            }
            Step::Bot(a) => events.push(Event::action(ACTIONS[*a])),
            Step::Unlikely => events.push(Event::action(ACTION_UNLIKELY_INTENT_NAME)),
        }
    }
    Dialogue::from_events(format!("d{id}"), events)
}

fn dialogues() -> impl Strategy<Value = Vec<Dialogue>> {
    prop::collection::vec(prop::collection::vec(step(), 0..12), 1..5).prop_map(|all| {
        all.iter()
            .enumerate()
            .map(|(i, steps)| dialogue(i, steps))
            .collect()
    })
}

fn featurizer(max_history: Option<usize>, remove_duplicates: bool) -> TrackerFeaturizer {
    let domain = Arc::new(test_fixtures::moodbot_domain());
    let encoder = Arc::new(SingleStateEncoder::from_domain(&domain));
    let config = FeaturizerConfig {
        max_history,
        remove_duplicates,
        parallel: false,
    };
    TrackerFeaturizer::new(config, domain, encoder).unwrap()
}

// Truncated training windows are the tails of the unbounded ones.
proptest! {
    #[test]
    fn prop_truncation_keeps_last_k(batch in dialogues(), k in 1usize..6) {
        let full = featurizer(None, false)
            .training_states_labels_and_entities(&batch, TrainingOptions::default())
            .data;
        let cut = featurizer(Some(k), false)
            .training_states_labels_and_entities(&batch, TrainingOptions::default())
            .data;

        prop_assert_eq!(&full.labels, &cut.labels);
        for (long, short) in full.windows.iter().zip(&cut.windows) {
            let start = long.len().saturating_sub(k);
            prop_assert_eq!(short.states(), &long.states()[start..]);
            prop_assert!(short.len() <= k);
        }
    }
}

proptest! {
    #[test]
    fn prop_prediction_truncation_keeps_last_k(batch in dialogues(), k in 1usize..6) {
        let options = PredictionOptions::default();
        let full = featurizer(None, true).prediction_states(&batch, options).data;
        let cut = featurizer(Some(k), true).prediction_states(&batch, options).data;

        prop_assert_eq!(full.windows.len(), batch.len());
        for (long, short) in full.windows.iter().zip(&cut.windows) {
            let start = long.len().saturating_sub(k);
            prop_assert_eq!(short.states(), &long.states()[start..]);
        }
    }
}

// Every window starts from a state the dialogue actually passed through,
// and the first window of every dialogue is the opening state.
proptest! {
    #[test]
    fn prop_unbounded_windows_start_empty(batch in dialogues()) {
        let states = featurizer(None, false)
            .training_states_labels_and_entities(&batch, TrainingOptions::default())
            .data;
        for window in &states.windows {
            prop_assert!(window.states()[0].is_empty());
        }
    }
}

proptest! {
    #[test]
    fn prop_dedup_idempotent(batch in dialogues(), k in prop::option::of(1usize..4)) {
        let domain = test_fixtures::moodbot_domain();
        let ctx = StageContext {
            vocabulary: &domain,
            entity_tagger: None,
            max_history: k,
        };
        let examples: Vec<_> = batch
            .iter()
            .flat_map(|d| pipeline::training_examples(d, ctx, VisibilityFlags::default()).unwrap())
            .collect();

        let once = deduplication::deduplicate(examples);
        let twice = deduplication::deduplicate(once.clone());
        prop_assert_eq!(&once, &twice);

        let unique: HashSet<_> = once.iter().map(|e| (&e.window, &e.label_action)).collect();
        prop_assert_eq!(unique.len(), once.len());
    }
}

// Without dedup every labelled turn yields exactly one example.
proptest! {
    #[test]
    fn prop_no_dedup_preserves_multiplicity(batch in dialogues(), k in 1usize..4) {
        let expected: usize = batch
            .iter()
            .map(|d| {
                d.events
                    .iter()
                    .filter(|e| matches!(e, Event::ActionExecuted(_)))
                    .count()
            })
            .sum();

        let kept = featurizer(Some(k), false)
            .training_states_labels_and_entities(&batch, TrainingOptions::default());
        prop_assert!(kept.is_clean());
        prop_assert_eq!(kept.data.len(), expected);

        let deduped = featurizer(Some(k), true)
            .training_states_labels_and_entities(&batch, TrainingOptions::default());
        prop_assert!(deduped.data.len() <= expected);
    }
}

// Ignoring the fallback removes exactly its labels and its states.
proptest! {
    #[test]
    fn prop_ignoring_unlikely_intent_removes_exactly_fallback_turns(batch in dialogues()) {
        let f = featurizer(None, false);
        let kept = f
            .training_states_labels_and_entities(&batch, TrainingOptions::default())
            .data;
        let ignored = f
            .training_states_labels_and_entities(
                &batch,
                TrainingOptions { ignore_action_unlikely_intent: true },
            )
            .data;

        // action_unlikely_intent sits at index 9 of the default actions.
        let expected: Vec<usize> = kept.labels.iter().copied().filter(|&l| l != 9).collect();
        prop_assert_eq!(&ignored.labels, &expected);

        for window in &ignored.windows {
            for state in window {
                prop_assert_ne!(state.previous_action(), Some(ACTION_UNLIKELY_INTENT_NAME));
            }
        }
    }
}

fn rule_step() -> impl Strategy<Value = (Step, bool)> {
    (step(), prop::bool::weighted(0.3))
}

/// Like [`dialogue`], with `hide_rule_turn` set on the flagged steps' actions.
fn rule_dialogue(steps: &[(Step, bool)]) -> Dialogue {
    let mut events = Vec::new();
    for (step, rule) in steps {
        let action = |name: &str| {
            if *rule {
                Event::rule_action(name)
            } else {
                Event::action(name)
            }
        };
        match step {
            Step::Listen(i) => {
                events.push(action(ACTION_LISTEN_NAME));
                events.push(Event::user(INTENTS[*i]));
            }
            Step::Bot(a) => events.push(action(ACTIONS[*a])),
            Step::Unlikely => events.push(action(ACTION_UNLIKELY_INTENT_NAME)),
        }
    }
    Dialogue::from_events("rules", events)
}

// With the last rule run ending at turn i, the prediction window is the
// opening state followed by turns i+1.., then truncated.
proptest! {
    #[test]
    fn prop_rule_collapse_restarts_after_last_run(
        steps in prop::collection::vec(rule_step(), 0..12),
        k in prop::option::of(1usize..6),
    ) {
        let dialogue = rule_dialogue(&steps);
        let full = featurizer(None, true)
            .prediction_sequence(std::slice::from_ref(&dialogue), PredictionOptions::default())
            .data
            .remove(0);

        // Action n (1-based) opens turn n; a hidden action n marks turn n - 1.
        let last_rule_turn = steps.iter().rposition(|(_, rule)| *rule);
        let mut expected: Vec<State> = match last_rule_turn {
            Some(i) => std::iter::once(State::empty())
                .chain(full.states()[i + 1..].iter().cloned())
                .collect(),
            None => full.states().to_vec(),
        };
        if let Some(k) = k {
            expected = expected[expected.len().saturating_sub(k)..].to_vec();
        }

        let options = PredictionOptions {
            ignore_rule_only_turns: true,
            ignore_action_unlikely_intent: false,
        };
        let collapsed = featurizer(k, true)
            .prediction_sequence(&[dialogue], options)
            .data
            .remove(0);
        prop_assert_eq!(collapsed.states(), expected.as_slice());
    }
}
