//! Quorum Geometric Diagnostics
//!
//! Honest, non-semantic measurements over claims and edges, computed from
//! statement embeddings. Everything in this crate measures; nothing gates or
//! suppresses. The only value meant to flow back onto a claim record is
//! `source_coherence` - the rest of the measurement bundle exists for
//! debugging UIs.
//!
//! # Examples
//!
//! ```
//! use quorum_geometry::compute_diagnostics;
//! use std::collections::HashMap;
//!
//! let result = compute_diagnostics(&[], &[], &[], &HashMap::new(), &HashMap::new());
//! assert!(result.claim_measurements.is_empty());
//! ```

#![warn(missing_docs)]

mod diagnostics;
mod measurement;
mod similarity;

pub use diagnostics::{compute_diagnostics, region_by_statement};
pub use measurement::{
    ClaimGeometricMeasurement, DiagnosticsResult, EdgeGeographicMeasurement,
};
pub use similarity::{centroid, cosine_similarity, mean, population_stddev};
