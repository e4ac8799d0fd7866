/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The action that hands control back to the user.
pub const ACTION_LISTEN_NAME: &str = "action_listen";

/// Meta-action inserted when the recognised intent is too unlikely to trust.
pub const ACTION_UNLIKELY_INTENT_NAME: &str = "action_unlikely_intent";

pub const ACTION_RESTART_NAME: &str = "action_restart";
pub const ACTION_SESSION_START_NAME: &str = "action_session_start";
pub const ACTION_DEFAULT_FALLBACK_NAME: &str = "action_default_fallback";
pub const ACTION_DEACTIVATE_LOOP_NAME: &str = "action_deactivate_loop";
pub const ACTION_REVERT_FALLBACK_EVENTS_NAME: &str = "action_revert_fallback_events";
pub const ACTION_DEFAULT_ASK_AFFIRMATION_NAME: &str = "action_default_ask_affirmation";
pub const ACTION_DEFAULT_ASK_REPHRASE_NAME: &str = "action_default_ask_rephrase";
pub const ACTION_TWO_STAGE_FALLBACK_NAME: &str = "action_two_stage_fallback";
pub const ACTION_BACK_NAME: &str = "action_back";
pub const RULE_SNIPPET_ACTION_NAME: &str = "...";

/// Built-in actions, in vocabulary order. They always occupy the first
/// indices so that `action_listen` is 0.
pub const DEFAULT_ACTION_NAMES: &[&str] = &[
    ACTION_LISTEN_NAME,
    ACTION_RESTART_NAME,
    ACTION_SESSION_START_NAME,
    ACTION_DEFAULT_FALLBACK_NAME,
    ACTION_DEACTIVATE_LOOP_NAME,
    ACTION_REVERT_FALLBACK_EVENTS_NAME,
    ACTION_DEFAULT_ASK_AFFIRMATION_NAME,
    ACTION_DEFAULT_ASK_REPHRASE_NAME,
    ACTION_TWO_STAGE_FALLBACK_NAME,
    ACTION_UNLIKELY_INTENT_NAME,
    ACTION_BACK_NAME,
    RULE_SNIPPET_ACTION_NAME,
];

// Sub-state attribute keys.
pub const INTENT: &str = "intent";
pub const TEXT: &str = "text";
pub const ENTITIES: &str = "entities";
pub const ACTION_NAME: &str = "action_name";
pub const SLOTS: &str = "slots";
pub const ACTIVE_LOOP: &str = "active_loop";
pub const LOOP_NAME: &str = "name";

/// Tag for tokens outside any entity span.
pub const NO_ENTITY_TAG: &str = "O";

/// Default capacity of the content-hash encoder cache.
pub const DEFAULT_ENCODER_CACHE_CAPACITY: u64 = 10_000;
