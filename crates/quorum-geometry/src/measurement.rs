//! Derived measurement records, one per claim and one per edge
//!
//! Null fields mean "could not measure", never "measured as zero". Callers
//! that want a display value must handle the distinction themselves.

use quorum_domain::{Claim, ClaimId, RegionId, RegionTier};
use serde::{Deserialize, Serialize};

/// Level-1 geometric measurements for one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimGeometricMeasurement {
    /// The claim measured
    pub claim_id: ClaimId,

    /// Mean pairwise cosine similarity of source-statement embeddings;
    /// `None` when fewer than two source statements have embeddings
    pub source_coherence: Option<f64>,

    /// Standard deviation of those pairwise similarities; `None` when fewer
    /// than three source statements have embeddings
    pub embedding_spread: Option<f64>,

    /// Count of distinct regions among source statements
    pub region_span: usize,

    /// Count of distinct originating models, traced statement -> paragraph
    /// -> model index
    pub source_model_diversity: usize,

    /// Count of source statements referenced by the claim
    pub source_statement_count: usize,

    /// Region containing the most source statements; exact ties resolve to
    /// the first region encountered along the claim's source-statement order
    pub dominant_region_id: Option<RegionId>,

    /// Tier of the dominant region
    pub dominant_region_tier: Option<RegionTier>,

    /// Model diversity recorded on the dominant region
    pub dominant_region_model_diversity: Option<u32>,
}

/// Region-level measurements for one edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeGeographicMeasurement {
    /// Source claim of the edge
    pub from_claim_id: ClaimId,

    /// Target claim of the edge
    pub to_claim_id: ClaimId,

    /// True iff both claims have a dominant region and they differ
    pub crosses_region_boundary: bool,

    /// Cosine similarity of the two claims' source-statement centroids;
    /// `None` if either claim has no embedded source statements
    pub centroid_similarity: Option<f64>,

    /// Dominant region of the source claim
    pub from_region_id: Option<RegionId>,

    /// Dominant region of the target claim
    pub to_region_id: Option<RegionId>,
}

/// The full diagnostics bundle for one decision round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsResult {
    /// One measurement per claim, in claim input order
    pub claim_measurements: Vec<ClaimGeometricMeasurement>,

    /// One measurement per edge, in edge input order
    pub edge_measurements: Vec<EdgeGeographicMeasurement>,
}

impl DiagnosticsResult {
    /// Stamp `source_coherence` back onto the claim records
    ///
    /// Coherence is the only measurement meant for user-facing display;
    /// everything else in the bundle stays diagnostic-only. Claims without a
    /// matching measurement are left untouched.
    pub fn stamp_source_coherence(&self, claims: &mut [Claim]) {
        for measurement in &self.claim_measurements {
            if let Some(claim) = claims.iter_mut().find(|c| c.id == measurement.claim_id) {
                claim.source_coherence = measurement.source_coherence;
            }
        }
    }
}
