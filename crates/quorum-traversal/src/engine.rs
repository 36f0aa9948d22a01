//! The combined decision-resolution flow
//!
//! One call per batch of user answers: prune first, then cascade the pruned
//! set into conditional gates. The orchestration layer reads the outcome to
//! decide which questions still need asking before it resumes the workflow.

use crate::config::TraversalConfig;
use crate::prune::compute_partition_pruned_statement_ids;
use crate::resolve::find_auto_resolvable_conditional_gate_ids;
use quorum_domain::{
    GateId, Partition, PartitionChoice, PartitionId, StatementId, TraversalQuestion,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Result of applying one batch of partition answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalOutcome {
    /// Statements eliminated by the answers
    pub pruned_statement_ids: BTreeSet<StatementId>,

    /// Gates that resolve without asking the user, in question input order
    pub auto_resolved_gate_ids: Vec<GateId>,
}

/// Apply a user's partition answers and cascade into conditional gates
pub fn resolve_decision_round(
    partitions: &[Partition],
    answers: &HashMap<PartitionId, PartitionChoice>,
    questions: &[TraversalQuestion],
    config: &TraversalConfig,
) -> TraversalOutcome {
    let pruned_statement_ids =
        compute_partition_pruned_statement_ids(partitions, answers);
    let auto_resolved_gate_ids = find_auto_resolvable_conditional_gate_ids(
        questions,
        &pruned_statement_ids,
        config,
    );

    TraversalOutcome { pruned_statement_ids, auto_resolved_gate_ids }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quorum_domain::{QuestionId, QuestionKind, QuestionStatus, Side};

    #[test]
    fn test_prune_cascades_into_gate_resolution() {
        let partitions = vec![Partition {
            id: PartitionId::new("p1"),
            source: "hinge-analysis".to_string(),
            focal_statement_id: Some(StatementId::new("s1")),
            hinge_question: "branch left or right?".to_string(),
            default_side: Side::A,
            side_a_statement_ids: vec![StatementId::new("s1")],
            side_b_statement_ids: vec![
                StatementId::new("s2"),
                StatementId::new("s3"),
                StatementId::new("s4"),
                StatementId::new("s5"),
            ],
            side_a_advocacy_statement_ids: None,
            side_b_advocacy_statement_ids: None,
        }];
        let answers: HashMap<PartitionId, PartitionChoice> =
            [(PartitionId::new("p1"), PartitionChoice::SideA)].into_iter().collect();
        let questions = vec![TraversalQuestion {
            id: QuestionId::new("q1"),
            status: QuestionStatus::Pending,
            blocked_by: vec![],
            kind: QuestionKind::Conditional {
                gate_id: GateId::new("g1"),
                affected_statement_ids: vec![
                    StatementId::new("s2"),
                    StatementId::new("s3"),
                    StatementId::new("s4"),
                    StatementId::new("s5"),
                    StatementId::new("s9"),
                ],
            },
        }];

        let outcome = resolve_decision_round(
            &partitions,
            &answers,
            &questions,
            &TraversalConfig::default(),
        );

        // Four of the gate's five affected statements are pruned: 0.80.
        assert_eq!(outcome.pruned_statement_ids.len(), 4);
        assert_eq!(outcome.auto_resolved_gate_ids, vec![GateId::new("g1")]);
    }

    #[test]
    fn test_undecided_round_resolves_nothing() {
        let outcome = resolve_decision_round(
            &[],
            &HashMap::new(),
            &[],
            &TraversalConfig::default(),
        );
        assert!(outcome.pruned_statement_ids.is_empty());
        assert!(outcome.auto_resolved_gate_ids.is_empty());
    }
}
