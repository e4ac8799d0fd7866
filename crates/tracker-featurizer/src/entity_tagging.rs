//! Span-based entity tagging for end-to-end user messages.

use tracker_core::constants::NO_ENTITY_TAG;
use tracker_core::models::{EntitySpan, EntityTags, Turn};
use tracker_core::traits::IEntityTagger;

/// Tags each whitespace token of a user message with the entity whose span
/// it overlaps, or `O`.
///
/// Only end-to-end messages (text without an intent) are tagged by default;
/// intent-labelled messages carry no trainable entity signal.
#[derive(Debug, Clone)]
pub struct SpanEntityTagger {
    end_to_end_only: bool,
}

impl Default for SpanEntityTagger {
    fn default() -> Self {
        Self {
            end_to_end_only: true,
        }
    }
}

impl SpanEntityTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also tag messages that have an intent.
    pub fn including_intent_messages() -> Self {
        Self {
            end_to_end_only: false,
        }
    }
}

impl IEntityTagger for SpanEntityTagger {
    fn tag_entities(&self, turn: &Turn) -> EntityTags {
        let Some(utterance) = &turn.utterance else {
            return EntityTags::new();
        };
        if self.end_to_end_only && !utterance.is_end_to_end() {
            return EntityTags::new();
        }
        let Some(text) = &utterance.text else {
            return EntityTags::new();
        };
        if utterance.entities.is_empty() {
            return EntityTags::new();
        }
        whitespace_tokens(text)
            .into_iter()
            .map(|(start, end)| tag_for(start, end, &utterance.entities))
            .collect()
    }
}

fn tag_for(start: usize, end: usize, spans: &[EntitySpan]) -> String {
    spans
        .iter()
        .find(|span| start < span.end && end > span.start)
        .map_or_else(|| NO_ENTITY_TAG.to_string(), |span| span.entity.clone())
}

/// Char offsets `(start, end)` of whitespace-separated tokens.
fn whitespace_tokens(text: &str) -> Vec<(usize, usize)> {
    text.split_whitespace()
        .map(|token| {
            // split_whitespace yields subslices of `text`.
            let byte_start = token.as_ptr() as usize - text.as_ptr() as usize;
            let start = text[..byte_start].chars().count();
            (start, start + token.chars().count())
        })
        .collect()
}
