//! # tracker-core
//!
//! Foundation crate for dialogue tracker featurization.
//! Defines the event/state/turn model, the collaborator traits (replay,
//! vocabulary, encoder, entity tagger), errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod domain;
pub mod errors;
pub mod models;
pub mod store;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TrackerConfig;
pub use domain::Domain;
pub use errors::{FeaturizerError, FeaturizerResult};
pub use models::{Dialogue, Event, HistoryWindow, State, SubStateKind, Turn};
