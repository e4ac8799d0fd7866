//! Dialogue events as replayed from the event store.

use serde::{Deserialize, Serialize};

/// One entry of a dialogue's event log. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    UserUttered(UserUtterance),
    ActionExecuted(ActionExecution),
    SlotSet {
        name: String,
        #[serde(default)]
        value: serde_json::Value,
    },
    ActiveLoop {
        #[serde(default)]
        name: Option<String>,
    },
    Restarted,
}

/// A recognised user message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUtterance {
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub entities: Vec<EntitySpan>,
    #[serde(default)]
    pub text: Option<String>,
}

impl UserUtterance {
    /// End-to-end utterances carry raw text instead of an intent.
    pub fn is_end_to_end(&self) -> bool {
        self.intent.is_none() && self.text.is_some()
    }
}

/// An entity recognised in a user message, as a char span of its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub entity: String,
    #[serde(default)]
    pub value: Option<String>,
    pub start: usize,
    pub end: usize,
}

/// A system action that was executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionExecution {
    pub name: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    /// The action was chosen by a rule and must not be shown to ML policies
    /// as learned context.
    #[serde(default)]
    pub hide_rule_turn: bool,
    /// The action cannot be predicted and is never used as a label.
    #[serde(default)]
    pub unpredictable: bool,
}

impl Event {
    pub fn user(intent: &str) -> Self {
        Event::UserUttered(UserUtterance {
            intent: Some(intent.to_string()),
            ..Default::default()
        })
    }

    pub fn user_text(text: &str, entities: Vec<EntitySpan>) -> Self {
        Event::UserUttered(UserUtterance {
            intent: None,
            entities,
            text: Some(text.to_string()),
        })
    }

    pub fn action(name: &str) -> Self {
        Event::ActionExecuted(ActionExecution {
            name: name.to_string(),
            confidence: None,
            hide_rule_turn: false,
            unpredictable: false,
        })
    }

    /// An action predicted by a rule.
    pub fn rule_action(name: &str) -> Self {
        Event::ActionExecuted(ActionExecution {
            name: name.to_string(),
            confidence: None,
            hide_rule_turn: true,
            unpredictable: false,
        })
    }

    pub fn slot(name: &str, value: serde_json::Value) -> Self {
        Event::SlotSet {
            name: name.to_string(),
            value,
        }
    }

    pub fn active_loop(name: Option<&str>) -> Self {
        Event::ActiveLoop {
            name: name.map(str::to_string),
        }
    }

    /// Short event name for logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::UserUttered(_) => "user_uttered",
            Event::ActionExecuted(_) => "action_executed",
            Event::SlotSet { .. } => "slot_set",
            Event::ActiveLoop { .. } => "active_loop",
            Event::Restarted => "restarted",
        }
    }
}
