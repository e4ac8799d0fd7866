//! TrackerFeaturizer: runs the per-dialogue pipeline across a batch, then
//! deduplicates and encodes the merged result.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info, warn};
use tracker_core::config::{FeaturizerConfig, TrackerConfig};
use tracker_core::domain::Domain;
use tracker_core::errors::{ConfigError, FeaturizationResult, FeaturizerResult};
use tracker_core::models::{Dialogue, EncodedState, EntityTags, HistoryWindow};
use tracker_core::traits::{IEntityTagger, IEventReplay, IStateEncoder, IVocabulary};

use crate::encoding::{CachedStateEncoder, SingleStateEncoder};
use crate::pipeline::{self, assembly, deduplication, StageContext, TrainingExample, VisibilityFlags};

/// Per-call options of the training path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainingOptions {
    pub ignore_action_unlikely_intent: bool,
}

/// Per-call options of the inference path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredictionOptions {
    pub ignore_rule_only_turns: bool,
    pub ignore_action_unlikely_intent: bool,
}

/// Training windows with their labels, as parallel vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingStates {
    pub windows: Vec<HistoryWindow>,
    pub labels: Vec<usize>,
    /// Per example, one tag list per window state.
    pub entity_tags: Vec<Vec<EntityTags>>,
    /// Source dialogue of each example.
    pub dialogue_ids: Vec<String>,
}

impl TrainingStates {
    fn from_examples(examples: Vec<TrainingExample>) -> Self {
        let mut states = TrainingStates::default();
        for example in examples {
            states.windows.push(example.window);
            states.labels.push(example.label);
            states.entity_tags.push(example.entity_tags);
            states.dialogue_ids.push(example.dialogue_id);
        }
        states
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Training states plus the encoded features of every window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingData {
    pub states: TrainingStates,
    pub features: Vec<Vec<EncodedState>>,
}

/// Prediction windows, one per dialogue that could be segmented.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionStates {
    pub windows: Vec<HistoryWindow>,
    pub entity_tags: Vec<Vec<EntityTags>>,
    pub dialogue_ids: Vec<String>,
}

/// The featurization engine.
///
/// Stateless across calls: nothing produced by one call is kept.
pub struct TrackerFeaturizer {
    config: FeaturizerConfig,
    vocabulary: Arc<dyn IVocabulary>,
    encoder: Arc<dyn IStateEncoder>,
    entity_tagger: Option<Arc<dyn IEntityTagger>>,
}

impl TrackerFeaturizer {
    /// Create a featurizer. Rejects `max_history = Some(0)`.
    pub fn new(
        config: FeaturizerConfig,
        vocabulary: Arc<dyn IVocabulary>,
        encoder: Arc<dyn IStateEncoder>,
    ) -> FeaturizerResult<Self> {
        if config.max_history == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "featurizer.max_history".to_string(),
                message: "must be at least 1 when set".to_string(),
            }
            .into());
        }
        Ok(Self {
            config,
            vocabulary,
            encoder,
            entity_tagger: None,
        })
    }

    /// Build a featurizer over a domain with the one-hot encoder, cached
    /// unless `encoder.cache_capacity` is 0.
    pub fn from_domain(config: &TrackerConfig, domain: Arc<Domain>) -> FeaturizerResult<Self> {
        let single = SingleStateEncoder::from_domain(&domain);
        let encoder: Arc<dyn IStateEncoder> = if config.encoder.cache_capacity > 0 {
            Arc::new(CachedStateEncoder::new(
                Box::new(single),
                config.encoder.cache_capacity,
            ))
        } else {
            Arc::new(single)
        };
        Self::new(config.featurizer.clone(), domain, encoder)
    }

    /// Attach an entity tagger for end-to-end entity training.
    pub fn with_entity_tagger(mut self, tagger: Arc<dyn IEntityTagger>) -> Self {
        self.entity_tagger = Some(tagger);
        self
    }

    pub fn config(&self) -> &FeaturizerConfig {
        &self.config
    }

    fn context(&self) -> StageContext<'_> {
        StageContext {
            vocabulary: self.vocabulary.as_ref(),
            entity_tagger: self.entity_tagger.as_deref(),
            max_history: self.config.max_history,
        }
    }

    /// Run `stage` on every dialogue, in input order.
    fn map_dialogues<T, F>(&self, dialogues: &[Dialogue], stage: F) -> Vec<FeaturizerResult<T>>
    where
        T: Send,
        F: Fn(&Dialogue) -> FeaturizerResult<T> + Sync + Send,
    {
        if self.config.parallel {
            dialogues.par_iter().map(&stage).collect()
        } else {
            dialogues.iter().map(&stage).collect()
        }
    }

    fn encode_windows(&self, windows: &[HistoryWindow]) -> Vec<Vec<EncodedState>> {
        let encoder = self.encoder.as_ref();
        if self.config.parallel {
            windows
                .par_iter()
                .map(|w| assembly::encode_window(encoder, w))
                .collect()
        } else {
            windows
                .iter()
                .map(|w| assembly::encode_window(encoder, w))
                .collect()
        }
    }

    /// Training windows, labels and entity tags for a batch of dialogues.
    ///
    /// Dialogues that fail (unknown action, malformed events) are reported in
    /// `failures` and contribute nothing; the rest of the batch is unaffected.
    pub fn training_states_labels_and_entities(
        &self,
        dialogues: &[Dialogue],
        options: TrainingOptions,
    ) -> FeaturizationResult<TrainingStates> {
        let _span = crate::featurize_span!(dialogues.len()).entered();
        let ctx = self.context();
        let flags = VisibilityFlags {
            ignore_rule_only_turns: false,
            ignore_action_unlikely_intent: options.ignore_action_unlikely_intent,
        };

        let per_dialogue =
            self.map_dialogues(dialogues, |d| pipeline::training_examples(d, ctx, flags));

        // Merge point: a single ordered view of every example.
        let mut result = FeaturizationResult::<TrainingStates>::default();
        let mut examples = Vec::new();
        for (dialogue, outcome) in dialogues.iter().zip(per_dialogue) {
            match outcome {
                Ok(mut produced) => examples.append(&mut produced),
                Err(error) => {
                    warn!(dialogue_id = %dialogue.id, error = %error, "dialogue skipped");
                    result.add_failure(dialogue.id.clone(), error);
                }
            }
        }

        let produced = examples.len();
        if self.config.remove_duplicates {
            examples = deduplication::deduplicate(examples);
        }
        info!(
            produced,
            kept = examples.len(),
            failed = result.failure_count(),
            "training examples ready"
        );

        result.data = TrainingStates::from_examples(examples);
        result
    }

    /// Training states plus encoded features for every window.
    pub fn featurize(
        &self,
        dialogues: &[Dialogue],
        options: TrainingOptions,
    ) -> FeaturizationResult<TrainingData> {
        let states = self.training_states_labels_and_entities(dialogues, options);
        let features = self.encode_windows(&states.data.windows);
        debug!(windows = features.len(), encoder = self.encoder.name(), "encoded windows");
        states.map(|states| TrainingData { states, features })
    }

    /// The trailing state window of every dialogue, for prediction.
    pub fn prediction_states(
        &self,
        dialogues: &[Dialogue],
        options: PredictionOptions,
    ) -> FeaturizationResult<PredictionStates> {
        let _span = crate::prediction_span!(dialogues.len()).entered();
        let ctx = self.context();
        let flags = VisibilityFlags {
            ignore_rule_only_turns: options.ignore_rule_only_turns,
            ignore_action_unlikely_intent: options.ignore_action_unlikely_intent,
        };

        let per_dialogue =
            self.map_dialogues(dialogues, |d| pipeline::prediction_window(d, ctx, flags));

        let mut result = FeaturizationResult::<PredictionStates>::default();
        for (dialogue, outcome) in dialogues.iter().zip(per_dialogue) {
            match outcome {
                Ok((window, tags)) => {
                    result.data.windows.push(window);
                    result.data.entity_tags.push(tags);
                    result.data.dialogue_ids.push(dialogue.id.clone());
                }
                Err(error) => {
                    warn!(dialogue_id = %dialogue.id, error = %error, "dialogue skipped");
                    result.add_failure(dialogue.id.clone(), error);
                }
            }
        }
        result
    }

    /// Just the prediction windows, in input order.
    pub fn prediction_sequence(
        &self,
        dialogues: &[Dialogue],
        options: PredictionOptions,
    ) -> FeaturizationResult<Vec<HistoryWindow>> {
        self.prediction_states(dialogues, options)
            .map(|states| states.windows)
    }

    /// Encoded prediction windows, one per successfully segmented dialogue.
    pub fn create_state_features(
        &self,
        dialogues: &[Dialogue],
        options: PredictionOptions,
    ) -> FeaturizationResult<Vec<Vec<EncodedState>>> {
        let states = self.prediction_states(dialogues, options);
        let features = self.encode_windows(&states.data.windows);
        states.map(|_| features)
    }

    /// Replay dialogues from an event store. Missing ids become failures.
    pub fn replay_dialogues(
        store: &dyn IEventReplay,
        dialogue_ids: &[String],
    ) -> FeaturizationResult<Vec<Dialogue>> {
        let mut result = FeaturizationResult::<Vec<Dialogue>>::default();
        for id in dialogue_ids {
            match store.replay(id) {
                Ok(events) => result.data.push(Dialogue::from_events(id.clone(), events)),
                Err(error) => result.add_failure(id.clone(), error),
            }
        }
        result
    }
}
