//! Batch-wide deduplication of training examples.

use std::collections::HashSet;

use tracker_core::models::HistoryWindow;

use super::TrainingExample;

/// blake3 hash of the canonical serialization of (window, label).
pub fn example_hash(window: &HistoryWindow, label_action: &str) -> Result<blake3::Hash, serde_json::Error> {
    let serialized = serde_json::to_vec(&(window, label_action))?;
    Ok(blake3::hash(&serialized))
}

/// Keep the first occurrence of every (window, label) pair, preserving
/// first-seen order.
pub fn deduplicate(examples: Vec<TrainingExample>) -> Vec<TrainingExample> {
    let mut seen: HashSet<blake3::Hash> = HashSet::with_capacity(examples.len());
    examples
        .into_iter()
        .filter(|e| seen.insert(e.content_hash))
        .collect()
}
