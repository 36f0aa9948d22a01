//! Quorum Blast-Radius Filter
//!
//! Decides which claims matter enough to surface as clarifying questions and
//! caps how many questions may be asked. The design principle is
//! single-authority scoring: every signal is a continuous multiplier on one
//! composite score per claim, and only a final floor is categorical. That
//! avoids independent binary kill-rules silently conflicting.
//!
//! The pipeline per decision round:
//!
//! 1. composite score - weighted sum of five structural/evidentiary
//!    dimensions
//! 2. continuous modifiers - consensus discount, sole-source off-topic
//!    discount, redundancy discount, then the suppression floor
//! 3. zero-question gate - skip the survey entirely when the models already
//!    converge
//! 4. axis clustering - group surviving claims into independent decision
//!    axes over the evidence-overlap graph
//! 5. question ceiling - 0 to 3 questions depending on conflict structure
//!
//! Every step is pure and deterministic; tie-breaks follow input order.
//!
//! # Examples
//!
//! ```
//! use quorum_triage::{compute_blast_radius_filter, TriageConfig, TriageInputs};
//!
//! let inputs = TriageInputs::default();
//! let result = compute_blast_radius_filter(&inputs, &TriageConfig::default());
//! assert!(result.axes.is_empty());
//! assert_eq!(result.question_ceiling, 0);
//! ```

#![warn(missing_docs)]

mod axis;
mod config;
mod filter;
mod graph;
mod score;

pub use axis::BlastRadiusAxis;
pub use config::{CompositeWeights, ConfigError, TriageConfig};
pub use filter::{
    compute_blast_radius_filter, BlastRadiusFilterResult, TriageInputs, TriageMeta,
};
pub use score::{BlastRadiusScore, ScoreComponents};
