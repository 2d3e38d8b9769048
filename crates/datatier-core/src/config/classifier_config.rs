//! Top-level classifier configuration with layered resolution.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    ContentDetectorConfig, DetectorKind, ExecutionConfig, FieldNameRuleConfig,
    NameSuppressionConfig, SamplingConfig, ScoringConfig,
};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`DATATIER_*`)
/// 2. Project config (`datatier.toml` in the project root, or an explicit file)
/// 3. User config (`~/.datatier/config.toml`)
/// 4. Compiled defaults
///
/// Empty rule tables mean "use the built-in tables".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifierConfig {
    pub sampling: SamplingConfig,
    pub scoring: ScoringConfig,
    pub execution: ExecutionConfig,
    pub field_name_rules: Vec<FieldNameRuleConfig>,
    pub content_detectors: Vec<ContentDetectorConfig>,
    pub name_suppressions: Vec<NameSuppressionConfig>,
}

impl ClassifierConfig {
    /// Load configuration for a project rooted at `root`.
    ///
    /// A missing `datatier.toml` is not an error; compiled defaults apply.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit file, which must exist.
    /// Environment overrides still apply on top.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        Self::merge_toml_file(&mut config, path)?;
        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string. Does not validate.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate every threshold and table entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sampling.sample_size == Some(0) {
            return Err(ConfigError::validation(
                "sampling.sample_size",
                "must be greater than 0",
            ));
        }
        check_unit("sampling.firing_threshold", self.sampling.firing_threshold)?;
        check_unit(
            "scoring.automation_threshold",
            self.scoring.automation_threshold,
        )?;
        check_unit(
            "scoring.single_source_penalty",
            self.scoring.single_source_penalty,
        )?;
        check_unit("scoring.agreement_bonus", self.scoring.agreement_bonus)?;
        check_unit(
            "scoring.no_match_confidence",
            self.scoring.no_match_confidence,
        )?;
        if self.execution.threads == Some(0) {
            return Err(ConfigError::validation(
                "execution.threads",
                "must be greater than 0",
            ));
        }

        self.validate_field_name_rules()?;
        self.validate_content_detectors()?;
        self.validate_name_suppressions()
    }

    fn validate_field_name_rules(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (i, rule) in self.field_name_rules.iter().enumerate() {
            let field = format!("field_name_rules[{i}]");
            if rule.name.trim().is_empty() {
                return Err(ConfigError::validation(field, "name must not be blank"));
            }
            if !seen.insert(rule.name.as_str()) {
                return Err(ConfigError::validation(
                    field,
                    format!("duplicate rule name '{}'", rule.name),
                ));
            }
            if rule.keywords.is_empty() {
                return Err(ConfigError::validation(
                    field,
                    format!("rule '{}' has no keywords", rule.name),
                ));
            }
            if let Some(bad) = rule
                .keywords
                .iter()
                .find(|kw| !kw.chars().any(|c| c.is_ascii_alphanumeric()))
            {
                return Err(ConfigError::validation(
                    field,
                    format!("keyword '{bad}' has no alphanumeric characters"),
                ));
            }
            check_unit(&format!("{field}.base_confidence"), Some(rule.base_confidence))?;
        }
        Ok(())
    }

    fn validate_content_detectors(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (i, detector) in self.content_detectors.iter().enumerate() {
            let field = format!("content_detectors[{i}]");
            if detector.name.trim().is_empty() {
                return Err(ConfigError::validation(field, "name must not be blank"));
            }
            if !seen.insert(detector.name.as_str()) {
                return Err(ConfigError::validation(
                    field,
                    format!("duplicate detector name '{}'", detector.name),
                ));
            }
            match (detector.kind, detector.pattern.as_deref()) {
                (DetectorKind::Regex, None) => {
                    return Err(ConfigError::validation(
                        field,
                        "regex detectors require a pattern",
                    ));
                }
                (DetectorKind::Regex, Some(p)) if p.is_empty() => {
                    return Err(ConfigError::validation(field, "pattern must not be empty"));
                }
                (kind, Some(_)) if kind != DetectorKind::Regex => {
                    return Err(ConfigError::validation(
                        field,
                        format!("pattern is only valid for regex detectors, not {}", kind.name()),
                    ));
                }
                _ => {}
            }
            check_unit(&format!("{field}.firing_threshold"), detector.firing_threshold)?;
        }
        Ok(())
    }

    fn validate_name_suppressions(&self) -> Result<(), ConfigError> {
        for (i, suppression) in self.name_suppressions.iter().enumerate() {
            let field = format!("name_suppressions[{i}]");
            if suppression.suffixes.is_empty() {
                return Err(ConfigError::validation(field, "suffixes must not be empty"));
            }
            check_unit(&format!("{field}.factor"), Some(suppression.factor))?;
        }
        Ok(())
    }

    /// Returns the user config path: `~/.datatier/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".datatier").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut ClassifierConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ClassifierConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`. Scalars override only when `other` sets them;
    /// a non-empty table in `other` replaces the base table wholesale.
    fn merge(base: &mut ClassifierConfig, other: &ClassifierConfig) {
        // Sampling
        if other.sampling.sample_size.is_some() {
            base.sampling.sample_size = other.sampling.sample_size;
        }
        if other.sampling.firing_threshold.is_some() {
            base.sampling.firing_threshold = other.sampling.firing_threshold;
        }

        // Scoring
        if other.scoring.automation_threshold.is_some() {
            base.scoring.automation_threshold = other.scoring.automation_threshold;
        }
        if other.scoring.single_source_penalty.is_some() {
            base.scoring.single_source_penalty = other.scoring.single_source_penalty;
        }
        if other.scoring.agreement_bonus.is_some() {
            base.scoring.agreement_bonus = other.scoring.agreement_bonus;
        }
        if other.scoring.no_match_confidence.is_some() {
            base.scoring.no_match_confidence = other.scoring.no_match_confidence;
        }

        // Execution
        if other.execution.threads.is_some() {
            base.execution.threads = other.execution.threads;
        }

        // Tables
        if !other.field_name_rules.is_empty() {
            base.field_name_rules = other.field_name_rules.clone();
        }
        if !other.content_detectors.is_empty() {
            base.content_detectors = other.content_detectors.clone();
        }
        if !other.name_suppressions.is_empty() {
            base.name_suppressions = other.name_suppressions.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are logged and ignored.
    fn apply_env_overrides(config: &mut ClassifierConfig) {
        if let Some(v) = env_override::<usize>("DATATIER_SAMPLE_SIZE") {
            config.sampling.sample_size = Some(v);
        }
        if let Some(v) = env_override::<f64>("DATATIER_FIRING_THRESHOLD") {
            config.sampling.firing_threshold = Some(v);
        }
        if let Some(v) = env_override::<f64>("DATATIER_AUTOMATION_THRESHOLD") {
            config.scoring.automation_threshold = Some(v);
        }
        if let Some(v) = env_override::<usize>("DATATIER_THREADS") {
            config.execution.threads = Some(v);
        }
    }
}

fn env_override<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            ::tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}

/// Reject values outside [0, 1]; NaN is rejected too.
fn check_unit(field: &str, value: Option<f64>) -> Result<(), ConfigError> {
    match value {
        Some(v) if !(0.0..=1.0).contains(&v) => Err(ConfigError::validation(
            field,
            format!("must be between 0.0 and 1.0, got {v}"),
        )),
        _ => Ok(()),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
