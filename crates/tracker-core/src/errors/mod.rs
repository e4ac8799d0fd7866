//! Error handling for tracker featurization.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod featurizer_error;

pub use config_error::ConfigError;
pub use featurizer_error::{DialogueFailure, FeaturizationResult, FeaturizerError};

/// Convenience alias for results carrying a [`FeaturizerError`].
pub type FeaturizerResult<T> = Result<T, FeaturizerError>;
