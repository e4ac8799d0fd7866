//! Span definitions per operation: training featurization, prediction, segmentation.

/// Create a training featurization span.
#[macro_export]
macro_rules! featurize_span {
    ($dialogue_count:expr) => {
        tracing::info_span!("tracker.featurize", dialogues = $dialogue_count)
    };
}

/// Create a prediction span.
#[macro_export]
macro_rules! prediction_span {
    ($dialogue_count:expr) => {
        tracing::info_span!("tracker.predict", dialogues = $dialogue_count)
    };
}

/// Create a per-dialogue segmentation span.
#[macro_export]
macro_rules! segment_span {
    ($dialogue_id:expr) => {
        tracing::debug_span!("tracker.segment", dialogue_id = %$dialogue_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const FEATURIZE: &str = "tracker.featurize";
    pub const PREDICT: &str = "tracker.predict";
    pub const SEGMENT: &str = "tracker.segment";
}
