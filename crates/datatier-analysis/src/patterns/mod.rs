//! Built-in pattern tables and resolution against configuration.
//!
//! A table given in configuration replaces the matching built-in table
//! wholesale; an empty configured table keeps the built-in one.

pub mod content;
pub mod field_names;

use datatier_core::config::{
    ClassifierConfig, ContentDetectorConfig, FieldNameRuleConfig, NameSuppressionConfig,
};

/// The three ordered tables the analyzers are built from.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternTables {
    pub field_name_rules: Vec<FieldNameRuleConfig>,
    pub content_detectors: Vec<ContentDetectorConfig>,
    pub name_suppressions: Vec<NameSuppressionConfig>,
}

impl PatternTables {
    pub fn builtin() -> Self {
        Self {
            field_name_rules: field_names::build_rules(),
            content_detectors: content::build_detectors(),
            name_suppressions: field_names::build_suppressions(),
        }
    }

    /// Resolve the active tables for `config`.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        let builtin = Self::builtin();
        Self {
            field_name_rules: pick(&config.field_name_rules, builtin.field_name_rules),
            content_detectors: pick(&config.content_detectors, builtin.content_detectors),
            name_suppressions: pick(&config.name_suppressions, builtin.name_suppressions),
        }
    }
}

fn pick<T: Clone>(configured: &[T], builtin: Vec<T>) -> Vec<T> {
    if configured.is_empty() {
        builtin
    } else {
        configured.to_vec()
    }
}
