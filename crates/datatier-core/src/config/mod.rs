//! Configuration system for datatier.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod classifier_config;
pub mod execution_config;
pub mod rule_config;
pub mod sampling_config;
pub mod scoring_config;

pub use classifier_config::ClassifierConfig;
pub use execution_config::ExecutionConfig;
pub use rule_config::{
    ContentDetectorConfig, DetectorKind, FieldNameRuleConfig, NameSuppressionConfig,
};
pub use sampling_config::SamplingConfig;
pub use scoring_config::ScoringConfig;
