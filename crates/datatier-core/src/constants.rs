/// Values sampled per column for content matching.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Match fraction a content detector must reach to fire.
pub const DEFAULT_FIRING_THRESHOLD: f64 = 0.6;

/// Confidence at or above which a column is automation-ready.
pub const DEFAULT_AUTOMATION_THRESHOLD: f64 = 0.7;

/// Multiplier applied when only one of name/content produced a signal.
pub const DEFAULT_SINGLE_SOURCE_PENALTY: f64 = 0.85;

/// Added to the mean confidence when name and content agree on a tier.
pub const DEFAULT_AGREEMENT_BONUS: f64 = 0.1;

/// Confidence reported when neither name nor content matched.
pub const DEFAULT_NO_MATCH_CONFIDENCE: f64 = 0.2;

/// Name of the project-level config file.
pub const CONFIG_FILE_NAME: &str = "datatier.toml";

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "DATATIER_LOG";
