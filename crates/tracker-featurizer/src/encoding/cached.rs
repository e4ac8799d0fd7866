use std::sync::Arc;

use moka::sync::Cache;
use tracing::warn;
use tracker_core::models::{EncodedState, State};
use tracker_core::traits::IStateEncoder;

/// Wraps an encoder with a blake3 content-hash cache.
///
/// Overlapping windows repeat the same states many times; equal states
/// share one cache entry.
pub struct CachedStateEncoder {
    inner: Box<dyn IStateEncoder>,
    cache: Cache<String, Arc<EncodedState>>,
}

impl CachedStateEncoder {
    pub fn new(inner: Box<dyn IStateEncoder>, capacity: u64) -> Self {
        Self {
            inner,
            cache: Cache::new(capacity),
        }
    }

    /// Number of cached states.
    pub fn cached_entries(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl IStateEncoder for CachedStateEncoder {
    fn encode_state(&self, state: &State) -> EncodedState {
        match state.content_hash() {
            Ok(hash) => {
                let encoded = self
                    .cache
                    .get_with(hash, || Arc::new(self.inner.encode_state(state)));
                (*encoded).clone()
            }
            Err(e) => {
                warn!(error = %e, "state hash failed, encoding without cache");
                self.inner.encode_state(state)
            }
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
