//! Top-level configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{EncoderConfig, FeaturizerConfig, ObservabilityConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TRACKER_*`)
/// 2. Config file
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrackerConfig {
    pub featurizer: FeaturizerConfig,
    pub encoder: EncoderConfig,
    pub observability: ObservabilityConfig,
}

impl TrackerConfig {
    /// Load a config file, apply environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: TrackerConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_env_overrides()?;
        config.validate()?;
        debug!(path = %path.display(), max_history = ?config.featurizer.max_history, "loaded tracker config");
        Ok(config)
    }

    /// Load configuration from a TOML string. Validates but ignores the environment.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: TrackerConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.featurizer.max_history == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "featurizer.max_history".to_string(),
                message: "must be at least 1 when set".to_string(),
            });
        }
        if self.observability.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Apply `TRACKER_*` environment variable overrides.
    ///
    /// `TRACKER_MAX_HISTORY` accepts a positive integer or `none`.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(raw) = std::env::var("TRACKER_MAX_HISTORY") {
            self.featurizer.max_history = if raw.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(parse_env("TRACKER_MAX_HISTORY", &raw)?)
            };
        }
        if let Ok(raw) = std::env::var("TRACKER_REMOVE_DUPLICATES") {
            self.featurizer.remove_duplicates = parse_env("TRACKER_REMOVE_DUPLICATES", &raw)?;
        }
        if let Ok(raw) = std::env::var("TRACKER_PARALLEL") {
            self.featurizer.parallel = parse_env("TRACKER_PARALLEL", &raw)?;
        }
        if let Ok(raw) = std::env::var("TRACKER_LOG_LEVEL") {
            self.observability.log_level = raw;
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::ValidationFailed {
            field: key.to_string(),
            message: format!("cannot parse '{raw}'"),
        })
}
