//! Traversal configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating a traversal configuration
#[derive(Error, Debug)]
pub enum TraversalConfigError {
    /// A constraint on the configuration values failed
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for conditional-gate auto-resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Fraction of a gate's affected statements that must be pruned before
    /// the gate auto-resolves
    pub auto_resolve_overlap_threshold: f64,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self { auto_resolve_overlap_threshold: 0.80 }
    }
}

impl TraversalConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), TraversalConfigError> {
        if !(0.0..=1.0).contains(&self.auto_resolve_overlap_threshold) {
            return Err(TraversalConfigError::Invalid(format!(
                "auto_resolve_overlap_threshold must be in [0, 1], got {}",
                self.auto_resolve_overlap_threshold
            )));
        }
        Ok(())
    }
}
