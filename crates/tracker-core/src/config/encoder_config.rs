use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ENCODER_CACHE_CAPACITY;

/// State encoder settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Entries kept in the content-hash cache in front of the encoder.
    /// 0 disables caching.
    pub cache_capacity: u64,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_ENCODER_CACHE_CAPACITY,
        }
    }
}
