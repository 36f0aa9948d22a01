//! Quorum Traversal Partition Engine
//!
//! Given a user's answers to partition-style questions, computes which source
//! statements are pruned and which downstream conditional gates can be
//! auto-resolved without asking the user. The orchestration layer reads the
//! outcome to shrink the remaining question set before resuming a paused
//! workflow.
//!
//! The pruning rule is deliberately order-free across partitions: protection
//! from being an exemplar member of a winning side always overrides being
//! mentioned in a losing side's advocacy list, so cross-partition overlap
//! resolves deterministically without ranking partitions.
//!
//! # Examples
//!
//! ```
//! use quorum_traversal::{resolve_decision_round, TraversalConfig};
//! use std::collections::HashMap;
//!
//! let outcome =
//!     resolve_decision_round(&[], &HashMap::new(), &[], &TraversalConfig::default());
//! assert!(outcome.pruned_statement_ids.is_empty());
//! assert!(outcome.auto_resolved_gate_ids.is_empty());
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod prune;
mod resolve;

pub use config::TraversalConfig;
pub use engine::{resolve_decision_round, TraversalOutcome};
pub use prune::compute_partition_pruned_statement_ids;
pub use resolve::find_auto_resolvable_conditional_gate_ids;
