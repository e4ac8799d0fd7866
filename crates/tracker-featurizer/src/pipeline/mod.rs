//! Per-dialogue featurization pipeline.
//!
//! Segmentation → Visibility filtering → Windowing → Label resolution.
//! Deduplication and feature encoding run batch-wide in the engine once
//! every dialogue has been through these stages.

pub mod assembly;
pub mod deduplication;
pub mod segmenter;
pub mod visibility;
pub mod windowing;

use tracing::debug;
use tracker_core::errors::FeaturizerResult;
use tracker_core::models::{Dialogue, EntityTags, HistoryWindow};
use tracker_core::traits::{IEntityTagger, IVocabulary};

pub use visibility::VisibilityFlags;

/// A labelled history window, ready for deduplication and encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingExample {
    pub dialogue_id: String,
    pub window: HistoryWindow,
    pub label_action: String,
    /// Vocabulary index of `label_action`.
    pub label: usize,
    /// One entry per window state.
    pub entity_tags: Vec<EntityTags>,
    /// Hash of (window, label) used for deduplication.
    pub content_hash: blake3::Hash,
}

/// Shared inputs of the per-dialogue stages.
#[derive(Clone, Copy)]
pub struct StageContext<'a> {
    pub vocabulary: &'a dyn IVocabulary,
    pub entity_tagger: Option<&'a dyn IEntityTagger>,
    pub max_history: Option<usize>,
}

/// Build the labelled training examples of one dialogue.
pub fn training_examples(
    dialogue: &Dialogue,
    ctx: StageContext<'_>,
    flags: VisibilityFlags,
) -> FeaturizerResult<Vec<TrainingExample>> {
    let _span = crate::segment_span!(dialogue.id).entered();
    let turns = segmenter::segment(&dialogue.events, ctx.vocabulary.fallback_action_name())?;
    let turns = visibility::apply(turns, flags);

    let examples = windowing::training_windows(&turns, ctx.max_history)
        .into_iter()
        .map(|w| -> FeaturizerResult<TrainingExample> {
            let label = assembly::resolve_label(ctx.vocabulary, &w.label_action)?;
            let content_hash = deduplication::example_hash(&w.window, &w.label_action)?;
            Ok(TrainingExample {
                dialogue_id: dialogue.id.clone(),
                entity_tags: assembly::entity_tags(&turns[w.span], ctx.entity_tagger),
                window: w.window,
                label_action: w.label_action,
                label,
                content_hash,
            })
        })
        .collect::<FeaturizerResult<Vec<_>>>()?;

    debug!(examples = examples.len(), "built training examples");
    Ok(examples)
}

/// Build the trailing prediction window of one dialogue, with its entity tags.
pub fn prediction_window(
    dialogue: &Dialogue,
    ctx: StageContext<'_>,
    flags: VisibilityFlags,
) -> FeaturizerResult<(HistoryWindow, Vec<EntityTags>)> {
    let _span = crate::segment_span!(dialogue.id).entered();
    let turns = segmenter::segment(&dialogue.events, ctx.vocabulary.fallback_action_name())?;
    let turns = visibility::apply(turns, flags);

    let (span, window) = windowing::prediction_window(&turns, ctx.max_history);
    let tags = assembly::entity_tags(&turns[span], ctx.entity_tagger);
    Ok((window, tags))
}
