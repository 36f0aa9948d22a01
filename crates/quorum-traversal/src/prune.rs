//! Partition pruning - which statements a user's answers eliminate
//!
//! For every decided partition the losing side's advocacy statements (or its
//! exemplars, when no advocacy list was distinguished) become prune
//! candidates, while the winning side's exemplars become protected. The
//! final set is candidates minus protection, accumulated across all decided
//! partitions before subtracting, so protection always wins regardless of
//! partition order.

use quorum_domain::{Partition, PartitionChoice, PartitionId, StatementId};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Compute the statements pruned by the user's partition answers
///
/// Partitions absent from `answers` or answered `Unknown` contribute
/// nothing. The result is an ordered set so repeated invocations are
/// byte-identical.
pub fn compute_partition_pruned_statement_ids(
    partitions: &[Partition],
    answers: &HashMap<PartitionId, PartitionChoice>,
) -> BTreeSet<StatementId> {
    let mut candidates: BTreeSet<StatementId> = BTreeSet::new();
    let mut protected: BTreeSet<StatementId> = BTreeSet::new();

    for partition in partitions {
        let Some(choice) = answers.get(&partition.id) else {
            continue;
        };
        let Some(winning) = choice.decided_side() else {
            continue;
        };
        let losing = winning.opposite();

        // Advocacy membership is the sharper prune signal when upstream
        // distinguished it; plain exemplars are the fallback.
        let to_prune = partition
            .advocacy_ids(losing)
            .unwrap_or_else(|| partition.exemplar_ids(losing));
        candidates.extend(to_prune.iter().cloned());

        // Only the winning side's exemplars are protected - never its
        // advocacy list, which may argue other partitions' sides too.
        protected.extend(partition.exemplar_ids(winning).iter().cloned());
    }

    let pruned: BTreeSet<StatementId> =
        candidates.difference(&protected).cloned().collect();

    debug!(
        candidates = candidates.len(),
        protected = protected.len(),
        pruned = pruned.len(),
        "computed partition prune set"
    );

    pruned
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use quorum_domain::Side;

    fn arbitrary_partition(
        index: usize,
        a: Vec<u8>,
        b: Vec<u8>,
        advocacy_b: Option<Vec<u8>>,
    ) -> Partition {
        let to_ids = |v: &[u8]| {
            v.iter().map(|n| StatementId::new(format!("s{n}"))).collect::<Vec<_>>()
        };
        Partition {
            id: PartitionId::new(format!("p{index}")),
            source: "prop".to_string(),
            focal_statement_id: None,
            hinge_question: "q".to_string(),
            default_side: Side::A,
            side_a_statement_ids: to_ids(&a),
            side_b_statement_ids: to_ids(&b),
            side_a_advocacy_statement_ids: None,
            side_b_advocacy_statement_ids: advocacy_b.as_deref().map(to_ids),
        }
    }

    proptest! {
        /// Property: no winning side's exemplar is ever pruned, whatever the
        /// overlap between partitions
        #[test]
        fn test_winning_exemplars_never_pruned(
            partitions_raw in proptest::collection::vec(
                (
                    proptest::collection::vec(0u8..12, 0..4),
                    proptest::collection::vec(0u8..12, 0..4),
                    proptest::option::of(proptest::collection::vec(0u8..12, 0..4)),
                    prop_oneof![
                        Just(PartitionChoice::SideA),
                        Just(PartitionChoice::SideB),
                        Just(PartitionChoice::Unknown),
                    ],
                ),
                0..5,
            ),
        ) {
            let partitions: Vec<Partition> = partitions_raw
                .iter()
                .enumerate()
                .map(|(i, (a, b, adv_b, _))| {
                    arbitrary_partition(i, a.clone(), b.clone(), adv_b.clone())
                })
                .collect();
            let answers: HashMap<PartitionId, PartitionChoice> = partitions_raw
                .iter()
                .enumerate()
                .map(|(i, (_, _, _, choice))| {
                    (PartitionId::new(format!("p{i}")), *choice)
                })
                .collect();

            let pruned =
                compute_partition_pruned_statement_ids(&partitions, &answers);

            for partition in &partitions {
                let Some(winning) = answers
                    .get(&partition.id)
                    .and_then(|c| c.decided_side())
                else {
                    continue;
                };
                for exemplar in partition.exemplar_ids(winning) {
                    prop_assert!(
                        !pruned.contains(exemplar),
                        "winning exemplar {exemplar} was pruned"
                    );
                }
            }
        }
    }
}
