//! Featurizer configuration.
//!
//! # Examples
//!
//! ```
//! use tracker_core::config::FeaturizerConfig;
//!
//! let config = FeaturizerConfig::default();
//! assert!(config.max_history.is_none());
//! assert!(config.remove_duplicates);
//! ```

use serde::{Deserialize, Serialize};

/// Windowing and deduplication settings shared by every featurization call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturizerConfig {
    /// Maximum number of states per history window. `None` keeps the full
    /// history. Must be at least 1 when set.
    pub max_history: Option<usize>,
    /// Drop duplicate (window, label) training examples. Default: true.
    pub remove_duplicates: bool,
    /// Featurize dialogues on the rayon pool. Default: true.
    pub parallel: bool,
}

impl Default for FeaturizerConfig {
    fn default() -> Self {
        Self {
            max_history: None,
            remove_duplicates: true,
            parallel: true,
        }
    }
}

impl FeaturizerConfig {
    pub fn with_max_history(max_history: Option<usize>) -> Self {
        Self {
            max_history,
            ..Self::default()
        }
    }
}
