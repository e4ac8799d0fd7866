//! Dialogue domain: the known intents, entities, slots, loops and actions.
//!
//! Action indices are assigned once at construction: the built-in actions
//! first (so `action_listen` is always 0), then the domain's own actions in
//! sorted order. The mapping is total over every action the domain declares.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{ACTION_LISTEN_NAME, ACTION_UNLIKELY_INTENT_NAME, DEFAULT_ACTION_NAMES};
use crate::errors::FeaturizerError;
use crate::traits::IVocabulary;

/// Serialized form of a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainSpec {
    pub intents: Vec<String>,
    pub entities: Vec<String>,
    pub slots: Vec<String>,
    pub forms: Vec<String>,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "DomainSpec", into = "DomainSpec")]
pub struct Domain {
    spec: DomainSpec,
    action_names: Vec<String>,
    action_lookup: HashMap<String, usize>,
}

impl From<DomainSpec> for Domain {
    fn from(spec: DomainSpec) -> Self {
        Domain::new(spec)
    }
}

impl From<Domain> for DomainSpec {
    fn from(domain: Domain) -> Self {
        domain.spec
    }
}

impl Domain {
    pub fn new(spec: DomainSpec) -> Self {
        let mut user_actions: Vec<String> = spec
            .actions
            .iter()
            .filter(|a| !DEFAULT_ACTION_NAMES.contains(&a.as_str()))
            .cloned()
            .collect();
        user_actions.sort();
        user_actions.dedup();

        let action_names: Vec<String> = DEFAULT_ACTION_NAMES
            .iter()
            .map(|a| a.to_string())
            .chain(user_actions)
            .collect();
        let action_lookup = action_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        Self {
            spec,
            action_names,
            action_lookup,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, FeaturizerError> {
        Ok(serde_json::from_str::<DomainSpec>(json)?.into())
    }

    pub fn intents(&self) -> &[String] {
        &self.spec.intents
    }

    pub fn entities(&self) -> &[String] {
        &self.spec.entities
    }

    pub fn slots(&self) -> &[String] {
        &self.spec.slots
    }

    pub fn forms(&self) -> &[String] {
        &self.spec.forms
    }

    pub fn num_actions(&self) -> usize {
        self.action_names.len()
    }
}

impl IVocabulary for Domain {
    fn action_index(&self, name: &str) -> Option<usize> {
        self.action_lookup.get(name).copied()
    }

    fn action_names(&self) -> &[String] {
        &self.action_names
    }

    fn listen_action_name(&self) -> &str {
        ACTION_LISTEN_NAME
    }

    fn fallback_action_name(&self) -> &str {
        ACTION_UNLIKELY_INTENT_NAME
    }
}
