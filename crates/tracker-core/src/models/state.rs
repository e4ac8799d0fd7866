//! Point-in-time semantic snapshots of a dialogue.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{ACTION_LISTEN_NAME, ACTION_NAME, INTENT};

/// Role key of a sub-state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SubStateKind {
    User,
    PrevAction,
    Slots,
    ActiveLoop,
}

impl SubStateKind {
    pub const ALL: [SubStateKind; 4] = [
        SubStateKind::User,
        SubStateKind::PrevAction,
        SubStateKind::Slots,
        SubStateKind::ActiveLoop,
    ];
}

/// Value of a single sub-state attribute.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Names(Vec<String>),
    /// A non-string slot value, kept as its JSON literal so that `4` and
    /// `"4"` stay distinct states.
    Literal { json: String },
}

impl AttributeValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            AttributeValue::Names(_) | AttributeValue::Literal { .. } => None,
        }
    }

    /// All names carried by this value; a text value yields itself.
    pub fn names(&self) -> Vec<&str> {
        match self {
            AttributeValue::Text(s) => vec![s.as_str()],
            AttributeValue::Names(names) => names.iter().map(String::as_str).collect(),
            AttributeValue::Literal { json } => vec![json.as_str()],
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

/// Attribute mapping of one role, e.g. `{intent: "greet"}`.
pub type SubState = BTreeMap<String, AttributeValue>;

/// Semantic snapshot of a dialogue: role key → attribute mapping.
///
/// Ordered maps make equality, hashing and serialization structural, so two
/// states built in different insertion orders are the same state. A role
/// with no attributes is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(BTreeMap<SubStateKind, SubState>);

impl State {
    /// The opening state of every dialogue.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn sub_state(&self, kind: SubStateKind) -> Option<&SubState> {
        self.0.get(&kind)
    }

    pub fn get(&self, kind: SubStateKind, attribute: &str) -> Option<&AttributeValue> {
        self.0.get(&kind).and_then(|sub| sub.get(attribute))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SubStateKind, &SubState)> {
        self.0.iter()
    }

    pub fn set(&mut self, kind: SubStateKind, attribute: &str, value: impl Into<AttributeValue>) {
        self.0
            .entry(kind)
            .or_default()
            .insert(attribute.to_string(), value.into());
    }

    /// Remove one attribute, dropping the role once it has none left.
    pub fn remove(&mut self, kind: SubStateKind, attribute: &str) {
        if let Some(sub) = self.0.get_mut(&kind) {
            sub.remove(attribute);
            if sub.is_empty() {
                self.0.remove(&kind);
            }
        }
    }

    /// Replace a whole role. An empty sub-state removes the role.
    pub fn replace_sub_state(&mut self, kind: SubStateKind, sub: SubState) {
        if sub.is_empty() {
            self.0.remove(&kind);
        } else {
            self.0.insert(kind, sub);
        }
    }

    pub fn clear_sub_state(&mut self, kind: SubStateKind) {
        self.0.remove(&kind);
    }

    /// Builder form of [`State::set`].
    pub fn with(mut self, kind: SubStateKind, attribute: &str, value: impl Into<AttributeValue>) -> Self {
        self.set(kind, attribute, value);
        self
    }

    pub fn intent(&self) -> Option<&str> {
        self.get(SubStateKind::User, INTENT).and_then(AttributeValue::as_text)
    }

    pub fn previous_action(&self) -> Option<&str> {
        self.get(SubStateKind::PrevAction, ACTION_NAME)
            .and_then(AttributeValue::as_text)
    }

    /// Whether the state was reached by handing control to the user.
    pub fn is_previous_action_listen(&self) -> bool {
        self.previous_action() == Some(ACTION_LISTEN_NAME)
    }

    /// blake3 hex digest of the canonical JSON form.
    pub fn content_hash(&self) -> Result<String, serde_json::Error> {
        let serialized = serde_json::to_vec(self)?;
        Ok(blake3::hash(&serialized).to_hex().to_string())
    }
}
