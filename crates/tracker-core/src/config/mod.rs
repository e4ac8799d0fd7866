//! Configuration for tracker featurization.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod encoder_config;
pub mod featurizer_config;
pub mod observability_config;
pub mod tracker_config;

pub use encoder_config::EncoderConfig;
pub use featurizer_config::FeaturizerConfig;
pub use observability_config::ObservabilityConfig;
pub use tracker_config::TrackerConfig;
