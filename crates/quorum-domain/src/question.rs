//! Traversal questions - the forcing points surfaced to the user
//!
//! Question records are produced by the external forcing-point extractor;
//! this core consumes them as a contract. Tiering and `blocked_by`
//! assignment happen upstream.

use crate::ids::{GateId, PartitionId, QuestionId, StatementId};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a traversal question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionStatus {
    /// Waiting to be asked or auto-resolved
    Pending,

    /// Answered by the user
    Answered,

    /// Resolved without asking the user
    AutoResolved,
}

/// The two shapes of traversal question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    /// A partition-style question; the user picks a side
    Partition {
        /// The partition this question renders
        partition_id: PartitionId,

        /// Plain exemplar members of side A
        side_a_statement_ids: Vec<StatementId>,

        /// Plain exemplar members of side B
        side_b_statement_ids: Vec<StatementId>,

        /// Statements actively arguing side A, when distinguished
        #[serde(default)]
        side_a_advocacy_statement_ids: Option<Vec<StatementId>>,

        /// Statements actively arguing side B, when distinguished
        #[serde(default)]
        side_b_advocacy_statement_ids: Option<Vec<StatementId>>,
    },

    /// A conditional gate blocking downstream reasoning
    Conditional {
        /// The gate this question would open
        gate_id: GateId,

        /// Statements whose pruning can open the gate without asking
        affected_statement_ids: Vec<StatementId>,
    },
}

/// A question the orchestrator may surface to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraversalQuestion {
    /// Question identifier
    pub id: QuestionId,

    /// Lifecycle status
    pub status: QuestionStatus,

    /// Gates that must resolve before this question can be asked
    #[serde(default)]
    pub blocked_by: Vec<GateId>,

    /// Partition or conditional payload
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl TraversalQuestion {
    /// The gate id, for conditional questions
    pub fn gate_id(&self) -> Option<&GateId> {
        match &self.kind {
            QuestionKind::Conditional { gate_id, .. } => Some(gate_id),
            QuestionKind::Partition { .. } => None,
        }
    }
}
