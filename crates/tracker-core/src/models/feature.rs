//! Encoder output types. The featurizer forwards these untouched; only
//! encoders construct them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Whether a feature describes a token sequence or a whole attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureType {
    Sequence,
    Sentence,
}

/// Numeric payload of a feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureValues {
    Dense { values: Vec<f32> },
    Sparse { dim: usize, indices: Vec<usize>, values: Vec<f32> },
}

impl FeatureValues {
    /// Sparse one-hot / multi-hot vector.
    pub fn multi_hot(dim: usize, mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        let values = vec![1.0; indices.len()];
        FeatureValues::Sparse { dim, indices, values }
    }

    pub fn dim(&self) -> usize {
        match self {
            FeatureValues::Dense { values } => values.len(),
            FeatureValues::Sparse { dim, .. } => *dim,
        }
    }

    /// Expand to a dense vector.
    pub fn to_dense(&self) -> Vec<f32> {
        match self {
            FeatureValues::Dense { values } => values.clone(),
            FeatureValues::Sparse { dim, indices, values } => {
                let mut dense = vec![0.0; *dim];
                for (&i, &v) in indices.iter().zip(values) {
                    if i < *dim {
                        dense[i] = v;
                    }
                }
                dense
            }
        }
    }
}

/// A tagged numeric vector for one state attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub attribute: String,
    /// Name of the encoder that produced it.
    pub origin: String,
    pub feature_type: FeatureType,
    pub values: FeatureValues,
}

/// Encoded form of one state: attribute → features. Attributes with nothing
/// to encode are absent.
pub type EncodedState = BTreeMap<String, Vec<Feature>>;

/// Per-token entity tags of one turn. Empty when the turn has no entity data.
pub type EntityTags = Vec<String>;
