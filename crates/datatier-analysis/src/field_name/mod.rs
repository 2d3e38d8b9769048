//! Field-name analysis: keyword rules over normalized name tokens.

pub mod normalize;

use datatier_core::config::{FieldNameRuleConfig, NameSuppressionConfig};
use datatier_core::types::{DataType, Sensitivity};
use serde::{Deserialize, Serialize};

use self::normalize::{tokenize, NormalizedName, Tokens};
use crate::patterns::field_names;

/// A field-name rule hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameSignal {
    pub rule: String,
    pub matched_keyword: String,
    pub data_type: DataType,
    pub sensitivity: Sensitivity,
    /// Rule base confidence after suppressions.
    pub confidence: f64,
    /// Product of the suppression factors applied, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppression: Option<f64>,
}

struct Keyword {
    raw: String,
    tokens: Tokens,
    joined: String,
}

impl Keyword {
    fn new(raw: &str) -> Self {
        let tokens = tokenize(raw);
        let joined = tokens.concat();
        Self {
            raw: raw.to_string(),
            tokens,
            joined,
        }
    }

    fn matches(&self, name: &NormalizedName) -> bool {
        name.contains_run(&self.tokens)
            || name.tokens.iter().any(|t| *t == self.joined)
            || name.joined == self.joined
    }
}

struct CompiledRule {
    name: String,
    keywords: Vec<Keyword>,
    data_type: DataType,
    sensitivity: Sensitivity,
    base_confidence: f64,
}

struct Suppression {
    suffixes: Vec<Tokens>,
    factor: f64,
}

/// Matches field names against an ordered rule table.
pub struct FieldNameAnalyzer {
    rules: Vec<CompiledRule>,
    suppressions: Vec<Suppression>,
}

impl FieldNameAnalyzer {
    pub fn new(rules: &[FieldNameRuleConfig], suppressions: &[NameSuppressionConfig]) -> Self {
        let rules = rules
            .iter()
            .map(|r| CompiledRule {
                name: r.name.clone(),
                keywords: r.keywords.iter().map(|k| Keyword::new(k)).collect(),
                data_type: r.data_type,
                sensitivity: r.sensitivity,
                base_confidence: r.base_confidence,
            })
            .collect();
        let suppressions = suppressions
            .iter()
            .map(|s| Suppression {
                suffixes: s
                    .suffixes
                    .iter()
                    .map(|suffix| tokenize(suffix))
                    .filter(|t| !t.is_empty())
                    .collect(),
                factor: s.factor,
            })
            .collect();
        Self {
            rules,
            suppressions,
        }
    }

    /// Analyzer over the built-in tables.
    pub fn with_builtin_rules() -> Self {
        Self::new(
            &field_names::build_rules(),
            &field_names::build_suppressions(),
        )
    }

    /// Classify a raw field name. Among matching rules the most sensitive
    /// wins; equal sensitivity goes to the earlier rule.
    pub fn analyze(&self, field_name: &str) -> Option<NameSignal> {
        let name = NormalizedName::new(field_name);
        if name.is_empty() {
            return None;
        }

        let mut best: Option<(&CompiledRule, &Keyword)> = None;
        for rule in &self.rules {
            let Some(keyword) = rule.keywords.iter().find(|k| k.matches(&name)) else {
                continue;
            };
            if best.map_or(true, |(b, _)| rule.sensitivity > b.sensitivity) {
                best = Some((rule, keyword));
            }
        }
        let (rule, keyword) = best?;

        let suppression = self.suppression_factor(&name, keyword);
        let confidence =
            (rule.base_confidence * suppression.unwrap_or(1.0)).clamp(0.0, 1.0);

        Some(NameSignal {
            rule: rule.name.clone(),
            matched_keyword: keyword.raw.clone(),
            data_type: rule.data_type,
            sensitivity: rule.sensitivity,
            confidence,
            suppression,
        })
    }

    /// Multiply every suppression whose suffix ends the name. A suffix that
    /// is itself the tail of the matched keyword (`blood_type`) is part of
    /// the sensitive term, not metadata about it.
    fn suppression_factor(&self, name: &NormalizedName, keyword: &Keyword) -> Option<f64> {
        let mut factor: Option<f64> = None;
        for suppression in &self.suppressions {
            let hit = suppression
                .suffixes
                .iter()
                .any(|suffix| name.ends_with(suffix) && !keyword.tokens.ends_with(suffix));
            if hit {
                factor = Some(factor.unwrap_or(1.0) * suppression.factor);
            }
        }
        factor
    }
}

impl Default for FieldNameAnalyzer {
    fn default() -> Self {
        Self::with_builtin_rules()
    }
}
