//! Claim module - the unit the triage engine scores and surfaces
//!
//! Claims are created once per decision round by the upstream mapper and are
//! immutable for the duration of that round, with one exception: diagnostics
//! stamps `source_coherence` back for user-facing display. Everything else
//! derived from a claim lives in separate measurement and score records.

use crate::error::DomainError;
use crate::ids::{ClaimId, StatementId};
use serde::{Deserialize, Serialize};

/// An assertion extracted from one or more models' answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim identifier
    pub id: ClaimId,

    /// Short human-readable label
    pub label: String,

    /// Indices of the models backing this claim
    pub supporters: Vec<u32>,

    /// Statements cited as evidence for this claim
    pub source_statement_ids: Vec<StatementId>,

    /// Fraction of models supporting, in [0, 1]
    pub support_ratio: f64,

    /// Structural importance from upstream structural analysis
    pub leverage: f64,

    /// Structurally critical despite weak consensus
    #[serde(default)]
    pub is_leverage_inversion: bool,

    /// Structurally critical with strong consensus
    #[serde(default)]
    pub is_keystone: bool,

    /// Mean pairwise cosine similarity of source-statement embeddings,
    /// stamped by diagnostics; `None` until stamped or when fewer than two
    /// source statements have embeddings
    #[serde(default)]
    pub source_coherence: Option<f64>,
}

impl Claim {
    /// Validate a claim record arriving from the upstream mapper
    ///
    /// Catches the shapes duck-typed upstream code can produce: out-of-range
    /// ratios and non-finite leverage. An empty `source_statement_ids` list
    /// is accepted - such a claim simply scores zero on evidence-derived
    /// dimensions downstream.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.as_str().is_empty() {
            return Err(DomainError::EmptyIdentifier { field: "claim.id" });
        }
        if !self.support_ratio.is_finite() {
            return Err(DomainError::NonFiniteValue {
                field: "claim.support_ratio",
                value: self.support_ratio,
            });
        }
        if !(0.0..=1.0).contains(&self.support_ratio) {
            return Err(DomainError::RatioOutOfRange {
                field: "claim.support_ratio",
                value: self.support_ratio,
            });
        }
        if !self.leverage.is_finite() {
            return Err(DomainError::NonFiniteValue {
                field: "claim.leverage",
                value: self.leverage,
            });
        }
        Ok(())
    }

    /// Whether exactly one model backs this claim
    pub fn is_sole_source(&self) -> bool {
        self.supporters.len() == 1
    }
}
