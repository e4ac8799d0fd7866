use crate::models::{EntityTags, Turn};

/// Produces per-token entity tags for end-to-end training.
pub trait IEntityTagger: Send + Sync {
    /// Tags for the user message of `turn`. Empty when there is nothing to tag.
    fn tag_entities(&self, turn: &Turn) -> EntityTags;
}
