//! Blast-radius score records
//!
//! `raw_composite` is the weighted blend before any modifier; `composite` is
//! the current value after the ordered modifiers ran. The trace of applied
//! modifiers lives in `suppression_reason` so a debugging UI can explain any
//! score without re-running the filter.

use crate::config::CompositeWeights;
use quorum_domain::ClaimId;
use serde::{Deserialize, Serialize};

/// The five raw dimension values behind one composite score, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    /// Fraction of all other claims causally downstream
    pub cascade_breadth: f64,

    /// Exclusivity ratio of the claim's evidence
    pub exclusive_evidence: f64,

    /// Min-max normalized structural leverage
    pub leverage: f64,

    /// Query relevance rescaled from raw [-1, 1] to [0, 1]
    pub query_relevance: f64,

    /// 1.0 if the claim is a cut vertex of the claim graph, else 0.0
    pub articulation_point: f64,
}

impl ScoreComponents {
    /// Blend the dimensions into a composite using the given weights
    pub fn blend(&self, weights: &CompositeWeights) -> f64 {
        self.cascade_breadth * weights.cascade_breadth
            + self.exclusive_evidence * weights.exclusive_evidence
            + self.leverage * weights.leverage
            + self.query_relevance * weights.query_relevance
            + self.articulation_point * weights.articulation_point
    }
}

/// Importance score and suppression decision for one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlastRadiusScore {
    /// The claim scored
    pub claim_id: ClaimId,

    /// Current, possibly-discounted composite score
    pub composite: f64,

    /// Composite before any modifier
    pub raw_composite: f64,

    /// The five raw dimension values
    pub components: ScoreComponents,

    /// Whether the claim fell below the suppression floor
    pub suppressed: bool,

    /// Human-readable trace of applied modifiers and the floor
    pub suppression_reason: Option<String>,

    /// Set when the mapper claims more supporting models than geometry can
    /// trace to distinct statements; `None` when tracing data was absent
    pub fragile_consensus: Option<bool>,
}
