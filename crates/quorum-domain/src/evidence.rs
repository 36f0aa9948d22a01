//! Evidentiary input records for the blast-radius filter
//!
//! All three records are produced by upstream structural analysis and
//! consumed read-only. Exclusivity and overlap are both derived from the
//! same evidence sets upstream but arrive separately; the filter does not
//! recompute one from the other.

use crate::error::DomainError;
use crate::ids::ClaimId;
use serde::{Deserialize, Serialize};

/// Claims causally downstream of a source claim in the structural graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeRisk {
    /// The claim whose removal would cascade
    pub source_id: ClaimId,

    /// Claims causally dependent on the source
    pub dependent_ids: Vec<ClaimId>,
}

/// Fraction of a claim's evidence not shared with any other claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimExclusivity {
    /// The claim measured
    pub claim_id: ClaimId,

    /// Exclusive-evidence fraction in [0, 1]
    pub exclusivity_ratio: f64,
}

impl ClaimExclusivity {
    /// Validate the ratio range
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.exclusivity_ratio.is_finite() || !(0.0..=1.0).contains(&self.exclusivity_ratio) {
            return Err(DomainError::RatioOutOfRange {
                field: "exclusivity_ratio",
                value: self.exclusivity_ratio,
            });
        }
        Ok(())
    }
}

/// Jaccard similarity of two claims' evidence sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimOverlap {
    /// First claim of the pair
    pub claim_a: ClaimId,

    /// Second claim of the pair
    pub claim_b: ClaimId,

    /// Jaccard overlap in [0, 1]
    pub jaccard: f64,
}

impl ClaimOverlap {
    /// Validate the Jaccard range
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.jaccard.is_finite() || !(0.0..=1.0).contains(&self.jaccard) {
            return Err(DomainError::RatioOutOfRange {
                field: "jaccard",
                value: self.jaccard,
            });
        }
        Ok(())
    }
}
