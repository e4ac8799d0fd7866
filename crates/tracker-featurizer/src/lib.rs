//! # tracker-featurizer
//!
//! Turns replayed dialogue event logs into model-ready data:
//! windowed (history, next action) training examples and one trailing
//! history per dialogue for prediction.
//!
//! Per dialogue: segmentation → visibility filtering → windowing → label
//! resolution. Across the batch: deduplication → feature encoding.
//! Per-dialogue work runs on rayon; output order follows input order.

pub mod encoding;
pub mod engine;
pub mod entity_tagging;
pub mod pipeline;
pub mod tracing_setup;

pub use encoding::{CachedStateEncoder, SingleStateEncoder};
pub use engine::{
    PredictionOptions, PredictionStates, TrackerFeaturizer, TrainingData, TrainingOptions,
    TrainingStates,
};
pub use entity_tagging::SpanEntityTagger;
pub use pipeline::{TrainingExample, VisibilityFlags};
