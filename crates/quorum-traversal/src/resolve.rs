//! Conditional-gate auto-resolution from pruned statements
//!
//! A conditional gate exists to ask about statements the user may not care
//! about anymore. When enough of its affected statements are already pruned,
//! the gate resolves itself and its question never reaches the user.

use crate::config::TraversalConfig;
use quorum_domain::{GateId, QuestionKind, StatementId, TraversalQuestion};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Find gates whose affected statements are mostly pruned
///
/// Only `conditional` questions participate; partition questions have no
/// gate to resolve. A gate with no affected statements never resolves - the
/// overlap ratio is simply not computed for it. Duplicate gate ids are
/// reported once, in question input order.
pub fn find_auto_resolvable_conditional_gate_ids(
    questions: &[TraversalQuestion],
    pruned: &BTreeSet<StatementId>,
    config: &TraversalConfig,
) -> Vec<GateId> {
    let mut resolved = Vec::new();
    let mut seen: HashSet<&GateId> = HashSet::new();

    for question in questions {
        let QuestionKind::Conditional { gate_id, affected_statement_ids } =
            &question.kind
        else {
            continue;
        };
        if seen.contains(gate_id) {
            continue;
        }

        let affected: BTreeSet<&StatementId> = affected_statement_ids.iter().collect();
        if affected.is_empty() {
            continue;
        }

        let pruned_count = affected.iter().filter(|id| pruned.contains(**id)).count();
        let overlap_ratio = pruned_count as f64 / affected.len() as f64;

        if overlap_ratio >= config.auto_resolve_overlap_threshold {
            debug!(
                gate = %gate_id,
                overlap_ratio,
                affected = affected.len(),
                "conditional gate auto-resolves"
            );
            seen.insert(gate_id);
            resolved.push(gate_id.clone());
        }
    }

    resolved
}
