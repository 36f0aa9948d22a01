//! Decision axes - clusters of surviving claims
//!
//! One axis is one independent decision for the user: a connected component
//! of the evidence-overlap graph among surviving claims. The representative
//! is the component's highest-composite member and gives the axis its rank.

use quorum_domain::ClaimId;
use serde::{Deserialize, Serialize};

/// A cluster of surviving claims representing one independent decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlastRadiusAxis {
    /// Axis identifier, assigned after ranking
    pub id: String,

    /// Member claims, in claim input order
    pub claim_ids: Vec<ClaimId>,

    /// Highest-composite member of the component
    pub representative_claim_id: ClaimId,

    /// The representative's composite score
    pub max_blast_radius: f64,
}
