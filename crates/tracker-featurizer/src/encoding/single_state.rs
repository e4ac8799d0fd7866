//! One-hot encoding of single states over the domain vocabulary.

use std::collections::HashMap;

use tracing::trace;
use tracker_core::constants::{ACTION_NAME, ACTIVE_LOOP, ENTITIES, INTENT, LOOP_NAME, SLOTS};
use tracker_core::domain::Domain;
use tracker_core::models::{
    EncodedState, Feature, FeatureType, FeatureValues, State, SubStateKind,
};
use tracker_core::traits::{IStateEncoder, IVocabulary};

const ORIGIN: &str = "single_state";

/// Name → position lookup for one attribute's vocabulary.
#[derive(Debug, Clone, Default)]
struct Lookup(HashMap<String, usize>);

impl Lookup {
    fn new<'a>(names: impl IntoIterator<Item = &'a String>) -> Self {
        Self(
            names
                .into_iter()
                .enumerate()
                .map(|(i, n)| (n.clone(), i))
                .collect(),
        )
    }

    fn dim(&self) -> usize {
        self.0.len()
    }
}

/// Encodes each state attribute as a sparse one-hot (or multi-hot) vector.
///
/// User input is only encoded when the state was reached by listening:
/// after a bot action the user sub-state is stale context.
#[derive(Debug, Clone)]
pub struct SingleStateEncoder {
    actions: Lookup,
    intents: Lookup,
    entities: Lookup,
    slots: Lookup,
    loops: Lookup,
}

impl SingleStateEncoder {
    pub fn from_domain(domain: &Domain) -> Self {
        Self {
            actions: Lookup::new(domain.action_names()),
            intents: Lookup::new(domain.intents()),
            entities: Lookup::new(domain.entities()),
            slots: Lookup::new(domain.slots()),
            loops: Lookup::new(domain.forms()),
        }
    }

    /// Multi-hot feature over `lookup`, or `None` if no name is known.
    fn encode_names<'a>(
        attribute: &str,
        lookup: &Lookup,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Option<Feature> {
        let indices: Vec<usize> = names
            .into_iter()
            .filter_map(|name| {
                let index = lookup.0.get(name).copied();
                if index.is_none() {
                    trace!(attribute, name, "value not in vocabulary, skipped");
                }
                index
            })
            .collect();
        if indices.is_empty() {
            return None;
        }
        Some(Feature {
            attribute: attribute.to_string(),
            origin: ORIGIN.to_string(),
            feature_type: FeatureType::Sentence,
            values: FeatureValues::multi_hot(lookup.dim(), indices),
        })
    }
}

impl IStateEncoder for SingleStateEncoder {
    fn encode_state(&self, state: &State) -> EncodedState {
        let mut encoded = EncodedState::new();
        let mut push = |feature: Option<Feature>| {
            if let Some(feature) = feature {
                encoded
                    .entry(feature.attribute.clone())
                    .or_insert_with(Vec::new)
                    .push(feature);
            }
        };

        if let Some(action) = state.get(SubStateKind::PrevAction, ACTION_NAME) {
            push(Self::encode_names(ACTION_NAME, &self.actions, action.names()));
        }
        if state.is_previous_action_listen() {
            if let Some(intent) = state.get(SubStateKind::User, INTENT) {
                push(Self::encode_names(INTENT, &self.intents, intent.names()));
            }
            if let Some(entities) = state.get(SubStateKind::User, ENTITIES) {
                push(Self::encode_names(ENTITIES, &self.entities, entities.names()));
            }
        }
        if let Some(slots) = state.sub_state(SubStateKind::Slots) {
            push(Self::encode_names(
                SLOTS,
                &self.slots,
                slots.keys().map(String::as_str),
            ));
        }
        if let Some(active_loop) = state.get(SubStateKind::ActiveLoop, LOOP_NAME) {
            push(Self::encode_names(ACTIVE_LOOP, &self.loops, active_loop.names()));
        }
        encoded
    }

    fn name(&self) -> &str {
        ORIGIN
    }
}
