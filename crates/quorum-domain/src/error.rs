//! Error types for boundary validation

use thiserror::Error;

/// Errors raised while validating loosely-typed upstream records
///
/// The computation crates never raise these; they operate on records that
/// already passed the boundary. Degenerate but well-formed input (empty claim
/// sets, missing embeddings) produces empty or null results, not errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A ratio field fell outside [0, 1]
    #[error("{field} must be in [0, 1], got {value}")]
    RatioOutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A required identifier was empty
    #[error("{field} must not be empty")]
    EmptyIdentifier {
        /// Name of the offending field
        field: &'static str,
    },

    /// A numeric field was not finite
    #[error("{field} must be finite, got {value}")]
    NonFiniteValue {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },
}
