//! Triage configuration
//!
//! All tunable constants of the filter live here and are passed explicitly
//! into each function, so tests can vary them without touching globals.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A constraint on the configuration values failed
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// TOML parse or serialize failure
    #[error("TOML error: {0}")]
    Toml(String),
}

/// Weights of the five composite dimensions; must sum to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeWeights {
    /// Fraction of all other claims causally downstream
    pub cascade_breadth: f64,

    /// Exclusivity ratio of the claim's evidence
    pub exclusive_evidence: f64,

    /// Min-max normalized structural leverage
    pub leverage: f64,

    /// Mean query cosine, rescaled to [0, 1] for blending
    pub query_relevance: f64,

    /// Cut-vertex membership in the claim graph
    pub articulation_point: f64,
}

impl CompositeWeights {
    /// Sum of the five weights
    pub fn sum(&self) -> f64 {
        self.cascade_breadth
            + self.exclusive_evidence
            + self.leverage
            + self.query_relevance
            + self.articulation_point
    }
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            cascade_breadth: 0.30,
            exclusive_evidence: 0.25,
            leverage: 0.20,
            query_relevance: 0.15,
            articulation_point: 0.10,
        }
    }
}

/// Configuration for the blast-radius filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Composite dimension weights
    pub weights: CompositeWeights,

    /// Maximum consensus discount strength at full model count
    pub consensus_discount_strength: f64,

    /// Model count at which consensus discount strength saturates
    pub consensus_model_norm: f64,

    /// Raw query-cosine below which a sole-source claim counts as off-topic
    pub off_topic_cosine_threshold: f64,

    /// Multiplier applied to off-topic sole-source claims
    pub off_topic_discount: f64,

    /// Jaccard overlap above which the redundancy discount fires
    pub redundancy_jaccard_threshold: f64,

    /// Scale of the redundancy discount (multiplier is 1 - jaccard * rate)
    pub redundancy_discount_rate: f64,

    /// Composite below which a claim is suppressed
    pub suppression_floor: f64,

    /// Convergence ratio above which the zero-question gate can fire
    pub skip_convergence_threshold: f64,

    /// Sole-source composite above which the gate is held open
    pub skip_sole_source_composite: f64,

    /// Jaccard overlap above which surviving claims share an axis
    pub axis_jaccard_threshold: f64,

    /// Hard cap on the question ceiling
    pub question_ceiling_cap: usize,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            weights: CompositeWeights::default(),
            consensus_discount_strength: 0.50,
            consensus_model_norm: 4.0,
            off_topic_cosine_threshold: 0.30,
            off_topic_discount: 0.50,
            redundancy_jaccard_threshold: 0.50,
            redundancy_discount_rate: 0.40,
            suppression_floor: 0.20,
            skip_convergence_threshold: 0.70,
            skip_sole_source_composite: 0.50,
            axis_jaccard_threshold: 0.30,
            question_ceiling_cap: 3,
        }
    }
}

impl TriageConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (self.weights.sum() - 1.0).abs() > 1e-9 {
            return Err(ConfigError::Invalid(format!(
                "composite weights must sum to 1.0, got {}",
                self.weights.sum()
            )));
        }
        let unit_fields = [
            ("consensus_discount_strength", self.consensus_discount_strength),
            ("off_topic_discount", self.off_topic_discount),
            ("redundancy_jaccard_threshold", self.redundancy_jaccard_threshold),
            ("redundancy_discount_rate", self.redundancy_discount_rate),
            ("suppression_floor", self.suppression_floor),
            ("skip_convergence_threshold", self.skip_convergence_threshold),
            ("skip_sole_source_composite", self.skip_sole_source_composite),
            ("axis_jaccard_threshold", self.axis_jaccard_threshold),
        ];
        for (name, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        if self.consensus_model_norm <= 0.0 {
            return Err(ConfigError::Invalid(
                "consensus_model_norm must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Toml(e.to_string()))
    }
}
