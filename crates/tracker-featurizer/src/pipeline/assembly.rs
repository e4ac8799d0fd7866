//! Label and feature assembly.

use tracing::warn;
use tracker_core::errors::{FeaturizerError, FeaturizerResult};
use tracker_core::models::{EncodedState, EntityTags, HistoryWindow, Turn};
use tracker_core::traits::{IEntityTagger, IStateEncoder, IVocabulary};

/// Vocabulary index of the action to predict.
pub fn resolve_label(vocabulary: &dyn IVocabulary, action: &str) -> FeaturizerResult<usize> {
    vocabulary.action_index(action).ok_or_else(|| {
        warn!(action, "action missing from vocabulary");
        FeaturizerError::UnknownAction {
            action: action.to_string(),
        }
    })
}

/// Entity tags for each turn of a window. Every entry is empty without a tagger.
pub fn entity_tags(turns: &[Turn], tagger: Option<&dyn IEntityTagger>) -> Vec<EntityTags> {
    match tagger {
        Some(tagger) => turns.iter().map(|t| tagger.tag_entities(t)).collect(),
        None => vec![EntityTags::new(); turns.len()],
    }
}

/// Encode every state of a window.
pub fn encode_window(encoder: &dyn IStateEncoder, window: &HistoryWindow) -> Vec<EncodedState> {
    window.iter().map(|state| encoder.encode_state(state)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::constants::{ACTION_LISTEN_NAME, ACTION_UNLIKELY_INTENT_NAME};
    use tracker_core::domain::{Domain, DomainSpec};
    use tracker_core::models::{EncodedState, State};

    struct CountingEncoder;

    impl IStateEncoder for CountingEncoder {
        fn encode_state(&self, state: &State) -> EncodedState {
            let mut encoded = EncodedState::new();
            if !state.is_empty() {
                encoded.insert(format!("roles_{}", state.len()), Vec::new());
            }
            encoded
        }
        fn name(&self) -> &str {
            "counting"
        }
    }

    struct FixedTagger;

    impl IEntityTagger for FixedTagger {
        fn tag_entities(&self, _turn: &Turn) -> EntityTags {
            vec!["city".to_string()]
        }
    }

    #[test]
    fn labels_resolve_through_vocabulary() {
        let domain = Domain::new(DomainSpec {
            actions: vec!["utter_greet".into()],
            ..Default::default()
        });
        assert_eq!(resolve_label(&domain, ACTION_LISTEN_NAME).unwrap(), 0);
        assert_eq!(resolve_label(&domain, ACTION_UNLIKELY_INTENT_NAME).unwrap(), 9);
        assert!(matches!(
            resolve_label(&domain, "utter_missing"),
            Err(FeaturizerError::UnknownAction { .. })
        ));
    }

    #[test]
    fn tags_are_empty_without_tagger() {
        let turns = vec![Turn::opening(0), Turn::opening(1)];
        let tags = entity_tags(&turns, None);
        assert_eq!(tags.len(), 2);
        assert!(tags.iter().all(Vec::is_empty));
        let tags = entity_tags(&turns, Some(&FixedTagger));
        assert_eq!(tags[1], vec!["city".to_string()]);
    }

    #[test]
    fn encoding_is_per_state() {
        let window = HistoryWindow::new(vec![
            State::empty(),
            State::empty().with(tracker_core::models::SubStateKind::User, "intent", "greet"),
        ]);
        let encoded = encode_window(&CountingEncoder, &window);
        assert_eq!(encoded.len(), 2);
        assert!(encoded[0].is_empty());
        assert!(encoded[1].contains_key("roles_1"));
    }
}
