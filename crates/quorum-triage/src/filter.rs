//! The blast-radius filter pipeline
//!
//! Converts structural and evidentiary signals into one composite importance
//! score per claim, applies the ordered continuous modifiers, decides whether
//! the survey can be skipped outright, clusters survivors into decision axes
//! and caps the number of clarifying questions.
//!
//! The filter never errors on malformed records: a claim with no evidence
//! scores zero on the evidence dimensions, a missing relevance entry scores
//! zero and disables the off-topic modifier, and a missing statement-model
//! map disables only the fragile-consensus diagnostic.

use crate::axis::BlastRadiusAxis;
use crate::config::TriageConfig;
use crate::graph::connected_components;
use crate::score::{BlastRadiusScore, ScoreComponents};
use quorum_domain::{
    CascadeRisk, Claim, ClaimExclusivity, ClaimId, ClaimOverlap, Edge, EdgeKind,
    StatementId,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Inputs to one filter invocation, all borrowed and read-only
#[derive(Debug, Clone, Copy, Default)]
pub struct TriageInputs<'a> {
    /// The decision round's claims, in mapper output order
    pub claims: &'a [Claim],

    /// Pairwise relations between those claims
    pub edges: &'a [Edge],

    /// Causal-downstream records from structural analysis
    pub cascade_risks: &'a [CascadeRisk],

    /// Exclusive-evidence ratios per claim
    pub exclusivity: &'a [ClaimExclusivity],

    /// Pairwise evidence overlap entries
    pub overlap: &'a [ClaimOverlap],

    /// Claims that are cut vertices of the claim graph
    pub articulation_points: &'a [ClaimId],

    /// Raw mean query cosine per claim, in [-1, 1]
    pub query_relevance: &'a [(ClaimId, f64)],

    /// Total number of models that answered
    pub model_count: u32,

    /// Fraction of the answer space the models already agree on
    pub convergence_ratio: f64,

    /// Statement -> model map; enables the fragile-consensus diagnostic
    pub statement_models: Option<&'a HashMap<StatementId, u32>>,
}

/// Bookkeeping counts surfaced next to the scores for debugging UIs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageMeta {
    /// Claims scored
    pub claim_count: usize,

    /// Claims surviving the floor
    pub surviving_count: usize,

    /// Claims suppressed by the floor
    pub suppressed_count: usize,

    /// Axes produced by clustering
    pub axis_count: usize,

    /// Connected components of the conflict-only subgraph
    pub conflict_cluster_count: usize,

    /// Model count the filter ran with
    pub model_count: u32,

    /// Convergence ratio the filter ran with
    pub convergence_ratio: f64,
}

/// Everything one filter invocation decides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlastRadiusFilterResult {
    /// One score per claim, in claim input order
    pub scores: Vec<BlastRadiusScore>,

    /// Decision axes, sorted descending by representative composite
    pub axes: Vec<BlastRadiusAxis>,

    /// Maximum clarifying questions to surface, in {0, 1, 2, 3}
    pub question_ceiling: usize,

    /// Whether the survey should be skipped entirely
    pub skip_survey: bool,

    /// Why the survey was skipped, when it was
    pub skip_reason: Option<String>,

    /// Bookkeeping counts
    pub meta: TriageMeta,
}

/// Run the blast-radius filter over one decision round
///
/// Pure and deterministic: identical inputs yield identical outputs. All
/// tie-breaks follow claim input order, and overlap entries are processed in
/// descending-Jaccard order with ties keeping input order.
pub fn compute_blast_radius_filter(
    inputs: &TriageInputs<'_>,
    config: &TriageConfig,
) -> BlastRadiusFilterResult {
    let claims = inputs.claims;
    let index_of: HashMap<&str, usize> = claims
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id.as_str(), i))
        .collect();

    let mut scores = step_composite(inputs, config, &index_of);
    let mut traces: Vec<Vec<String>> = vec![Vec::new(); scores.len()];

    apply_consensus_discount(claims, inputs.model_count, config, &mut scores, &mut traces);
    apply_off_topic_discount(inputs, config, &mut scores, &mut traces);
    apply_redundancy_discount(inputs.overlap, config, &index_of, &mut scores, &mut traces);
    apply_floor(config, &mut scores, &mut traces);

    for (score, trace) in scores.iter_mut().zip(traces) {
        if !trace.is_empty() {
            score.suppression_reason = Some(trace.join("; "));
        }
    }

    let surviving: Vec<usize> = scores
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.suppressed && s.composite > 0.0)
        .map(|(i, _)| i)
        .collect();

    let conflict_edges: Vec<&Edge> = inputs
        .edges
        .iter()
        .filter(|e| e.kind == EdgeKind::Conflicts)
        .collect();

    if let Some(reason) =
        zero_question_gate(inputs, config, &scores, &surviving, &conflict_edges)
    {
        debug!(%reason, "zero-question gate fired");
        let meta = TriageMeta {
            claim_count: claims.len(),
            surviving_count: surviving_count_for_meta(&scores),
            suppressed_count: claims.len() - surviving_count_for_meta(&scores),
            axis_count: 0,
            conflict_cluster_count: 0,
            model_count: inputs.model_count,
            convergence_ratio: inputs.convergence_ratio,
        };
        return BlastRadiusFilterResult {
            scores,
            axes: Vec::new(),
            question_ceiling: 0,
            skip_survey: true,
            skip_reason: Some(reason),
            meta,
        };
    }

    let axes = cluster_axes(inputs.overlap, config, &index_of, &scores, &surviving);
    let conflict_cluster_count =
        conflict_clusters(claims.len(), &index_of, &conflict_edges);
    let question_ceiling = question_ceiling(
        claims,
        config,
        &surviving,
        axes.len(),
        conflict_edges.is_empty(),
        conflict_cluster_count,
    );

    debug!(
        claims = claims.len(),
        surviving = surviving.len(),
        axes = axes.len(),
        question_ceiling,
        "blast-radius filter complete"
    );

    let meta = TriageMeta {
        claim_count: claims.len(),
        surviving_count: surviving_count_for_meta(&scores),
        suppressed_count: claims.len() - surviving_count_for_meta(&scores),
        axis_count: axes.len(),
        conflict_cluster_count,
        model_count: inputs.model_count,
        convergence_ratio: inputs.convergence_ratio,
    };

    BlastRadiusFilterResult {
        scores,
        axes,
        question_ceiling,
        skip_survey: false,
        skip_reason: None,
        meta,
    }
}

fn surviving_count_for_meta(scores: &[BlastRadiusScore]) -> usize {
    scores.iter().filter(|s| !s.suppressed).count()
}

/// Step 1: weighted composite over the five normalized dimensions
fn step_composite(
    inputs: &TriageInputs<'_>,
    config: &TriageConfig,
    index_of: &HashMap<&str, usize>,
) -> Vec<BlastRadiusScore> {
    let claims = inputs.claims;

    let mut dependents: HashMap<&str, usize> = HashMap::new();
    for risk in inputs.cascade_risks {
        let distinct: HashSet<&str> = risk
            .dependent_ids
            .iter()
            .map(|id| id.as_str())
            .filter(|id| *id != risk.source_id.as_str() && index_of.contains_key(id))
            .collect();
        dependents.insert(risk.source_id.as_str(), distinct.len());
    }

    let exclusivity: HashMap<&str, f64> = inputs
        .exclusivity
        .iter()
        .map(|e| (e.claim_id.as_str(), e.exclusivity_ratio))
        .collect();

    let relevance: HashMap<&str, f64> = inputs
        .query_relevance
        .iter()
        .map(|(id, raw)| (id.as_str(), *raw))
        .collect();

    let articulation: HashSet<&str> =
        inputs.articulation_points.iter().map(|id| id.as_str()).collect();

    let leverage_min = claims.iter().map(|c| c.leverage).fold(f64::INFINITY, f64::min);
    let leverage_max =
        claims.iter().map(|c| c.leverage).fold(f64::NEG_INFINITY, f64::max);
    let leverage_range = leverage_max - leverage_min;

    claims
        .iter()
        .map(|claim| {
            let cascade_breadth = if claims.len() > 1 {
                let count = dependents.get(claim.id.as_str()).copied().unwrap_or(0);
                (count as f64 / (claims.len() - 1) as f64).clamp(0.0, 1.0)
            } else {
                0.0
            };

            let exclusive_evidence = exclusivity
                .get(claim.id.as_str())
                .copied()
                .unwrap_or(0.0)
                .clamp(0.0, 1.0);

            // With a zero leverage range no claim is structurally
            // distinguished and the dimension contributes nothing.
            let leverage = if leverage_range > 0.0 {
                ((claim.leverage - leverage_min) / leverage_range).clamp(0.0, 1.0)
            } else {
                0.0
            };

            // Rescaled from raw [-1, 1] to [0, 1] for blending only; the
            // off-topic modifier reads the raw value.
            let query_relevance = relevance
                .get(claim.id.as_str())
                .map(|raw| (raw.clamp(-1.0, 1.0) + 1.0) / 2.0)
                .unwrap_or(0.0);

            let articulation_point = if articulation.contains(claim.id.as_str()) {
                1.0
            } else {
                0.0
            };

            let components = ScoreComponents {
                cascade_breadth,
                exclusive_evidence,
                leverage,
                query_relevance,
                articulation_point,
            };
            let raw_composite = components.blend(&config.weights);

            let fragile_consensus = inputs.statement_models.map(|models| {
                let traceable: HashSet<u32> = claim
                    .source_statement_ids
                    .iter()
                    .filter_map(|id| models.get(id).copied())
                    .collect();
                claim.supporters.len() > traceable.len()
            });

            BlastRadiusScore {
                claim_id: claim.id.clone(),
                composite: raw_composite,
                raw_composite,
                components,
                suppressed: false,
                suppression_reason: None,
                fragile_consensus,
            }
        })
        .collect()
}

/// Modifier 1: consensus discount
///
/// More supporting models mean a larger discount, but the strength itself
/// shrinks with fewer total models; low-N consensus is less discountable.
fn apply_consensus_discount(
    claims: &[Claim],
    model_count: u32,
    config: &TriageConfig,
    scores: &mut [BlastRadiusScore],
    traces: &mut [Vec<String>],
) {
    let strength = config.consensus_discount_strength
        * (model_count as f64 / config.consensus_model_norm).min(1.0);

    for (index, claim) in claims.iter().enumerate() {
        let factor = 1.0 - claim.support_ratio.clamp(0.0, 1.0) * strength;
        if factor < 1.0 {
            scores[index].composite *= factor;
            traces[index].push(format!(
                "consensus_discount x{factor:.3} (support_ratio {:.2}, strength {strength:.3})",
                claim.support_ratio
            ));
        }
    }
}

/// Modifier 2: sole-source off-topic discount
///
/// Reads the raw (non-rescaled) query cosine; on-topic sole-source claims
/// are untouched, and a claim with no relevance entry cannot be judged
/// off-topic.
fn apply_off_topic_discount(
    inputs: &TriageInputs<'_>,
    config: &TriageConfig,
    scores: &mut [BlastRadiusScore],
    traces: &mut [Vec<String>],
) {
    let relevance: HashMap<&str, f64> = inputs
        .query_relevance
        .iter()
        .map(|(id, raw)| (id.as_str(), *raw))
        .collect();

    for (index, claim) in inputs.claims.iter().enumerate() {
        if !claim.is_sole_source() {
            continue;
        }
        let Some(raw) = relevance.get(claim.id.as_str()) else {
            continue;
        };
        if *raw < config.off_topic_cosine_threshold {
            scores[index].composite *= config.off_topic_discount;
            traces[index].push(format!(
                "sole_source_off_topic x{:.2} (raw_cosine {raw:.2})",
                config.off_topic_discount
            ));
        }
    }
}

/// Modifier 3: redundancy discount
///
/// Overlap entries are processed in descending-Jaccard order (stable for
/// ties) and each qualifying pair discounts only its currently-lower-scoring
/// member. Exact composite ties discount `claim_b`.
fn apply_redundancy_discount(
    overlap: &[ClaimOverlap],
    config: &TriageConfig,
    index_of: &HashMap<&str, usize>,
    scores: &mut [BlastRadiusScore],
    traces: &mut [Vec<String>],
) {
    let mut ordered: Vec<&ClaimOverlap> =
        overlap.iter().filter(|o| o.jaccard.is_finite()).collect();
    ordered.sort_by(|a, b| {
        b.jaccard.partial_cmp(&a.jaccard).unwrap_or(Ordering::Equal)
    });

    for entry in ordered {
        if entry.jaccard <= config.redundancy_jaccard_threshold {
            continue;
        }
        let (Some(&a), Some(&b)) = (
            index_of.get(entry.claim_a.as_str()),
            index_of.get(entry.claim_b.as_str()),
        ) else {
            continue;
        };
        if a == b {
            continue;
        }

        let (lower, higher) = if scores[a].composite < scores[b].composite {
            (a, b)
        } else {
            (b, a)
        };
        let factor = 1.0 - entry.jaccard * config.redundancy_discount_rate;
        scores[lower].composite *= factor;
        traces[lower].push(format!(
            "redundancy_discount x{factor:.3} (jaccard {:.2} with {})",
            entry.jaccard,
            scores[higher].claim_id
        ));
    }
}

/// The final floor: the only categorical rule in the filter
fn apply_floor(
    config: &TriageConfig,
    scores: &mut [BlastRadiusScore],
    traces: &mut [Vec<String>],
) {
    for (score, trace) in scores.iter_mut().zip(traces.iter_mut()) {
        if score.composite < config.suppression_floor {
            score.suppressed = true;
            trace.push(format!(
                "below_floor ({:.3} < {:.2})",
                score.composite, config.suppression_floor
            ));
        }
    }
}

/// Step 3: decide whether the survey can be skipped entirely
///
/// Returns the reason string when ALL conditions hold, `None` otherwise.
fn zero_question_gate(
    inputs: &TriageInputs<'_>,
    config: &TriageConfig,
    scores: &[BlastRadiusScore],
    surviving: &[usize],
    conflict_edges: &[&Edge],
) -> Option<String> {
    if inputs.convergence_ratio <= config.skip_convergence_threshold {
        return None;
    }
    if inputs.claims.iter().any(|c| c.is_leverage_inversion) {
        return None;
    }
    let strong_sole_source = surviving.iter().any(|&i| {
        inputs.claims[i].is_sole_source()
            && scores[i].composite > config.skip_sole_source_composite
    });
    if strong_sole_source {
        return None;
    }
    if !conflict_edges.is_empty() {
        return None;
    }

    Some(format!(
        "survey skipped: convergence {:.2} > {:.2}, no leverage inversions, \
         no surviving sole-source claim above {:.2}, no conflict edges",
        inputs.convergence_ratio,
        config.skip_convergence_threshold,
        config.skip_sole_source_composite
    ))
}

/// Step 4: cluster surviving claims into decision axes
fn cluster_axes(
    overlap: &[ClaimOverlap],
    config: &TriageConfig,
    index_of: &HashMap<&str, usize>,
    scores: &[BlastRadiusScore],
    surviving: &[usize],
) -> Vec<BlastRadiusAxis> {
    let surviving_set: HashSet<usize> = surviving.iter().copied().collect();

    let cluster_edges: Vec<(usize, usize)> = overlap
        .iter()
        .filter(|o| o.jaccard.is_finite() && o.jaccard > config.axis_jaccard_threshold)
        .filter_map(|o| {
            let a = *index_of.get(o.claim_a.as_str())?;
            let b = *index_of.get(o.claim_b.as_str())?;
            (a != b && surviving_set.contains(&a) && surviving_set.contains(&b))
                .then_some((a, b))
        })
        .collect();

    let components = connected_components(surviving, &cluster_edges, scores.len());

    let mut axes: Vec<BlastRadiusAxis> = components
        .into_iter()
        .map(|members| {
            // Earliest input order wins representative ties: members are
            // ascending and the comparison is strict.
            let mut representative = members[0];
            for &member in &members {
                if scores[member].composite > scores[representative].composite {
                    representative = member;
                }
            }
            BlastRadiusAxis {
                id: String::new(),
                claim_ids: members
                    .iter()
                    .map(|&m| scores[m].claim_id.clone())
                    .collect(),
                representative_claim_id: scores[representative].claim_id.clone(),
                max_blast_radius: scores[representative].composite,
            }
        })
        .collect();

    axes.sort_by(|a, b| {
        b.max_blast_radius
            .partial_cmp(&a.max_blast_radius)
            .unwrap_or(Ordering::Equal)
    });
    for (rank, axis) in axes.iter_mut().enumerate() {
        axis.id = format!("axis-{rank}");
    }
    axes
}

/// Count connected components of the conflict-only subgraph
fn conflict_clusters(
    claim_count: usize,
    index_of: &HashMap<&str, usize>,
    conflict_edges: &[&Edge],
) -> usize {
    let mut nodes: Vec<usize> = Vec::new();
    let mut seen = vec![false; claim_count];
    let mut edges = Vec::new();

    for edge in conflict_edges {
        let (Some(&a), Some(&b)) = (
            index_of.get(edge.from.as_str()),
            index_of.get(edge.to.as_str()),
        ) else {
            continue;
        };
        edges.push((a, b));
        for node in [a, b] {
            if !seen[node] {
                seen[node] = true;
                nodes.push(node);
            }
        }
    }
    nodes.sort_unstable();

    connected_components(&nodes, &edges, claim_count).len()
}

/// Step 5: the question ceiling, hard-capped by the configuration
fn question_ceiling(
    claims: &[Claim],
    config: &TriageConfig,
    surviving: &[usize],
    axis_count: usize,
    no_conflicts: bool,
    conflict_cluster_count: usize,
) -> usize {
    if axis_count == 0 {
        return 0;
    }

    let ceiling = if no_conflicts {
        let flagged_sole_source = surviving.iter().any(|&i| {
            let claim = &claims[i];
            claim.is_sole_source() && (claim.is_leverage_inversion || claim.is_keystone)
        });
        if flagged_sole_source {
            axis_count.min(1)
        } else {
            axis_count.min(2)
        }
    } else if conflict_cluster_count <= 2 {
        axis_count.min(2)
    } else {
        axis_count.min(3)
    };

    ceiling.min(config.question_ceiling_cap)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arbitrary_claims(count: usize, ratios: Vec<f64>) -> Vec<Claim> {
        (0..count)
            .map(|i| Claim {
                id: ClaimId::new(format!("c{i}")),
                label: format!("c{i}"),
                supporters: vec![0; (i % 3) + 1],
                source_statement_ids: vec![StatementId::new(format!("s{i}"))],
                support_ratio: ratios[i],
                leverage: i as f64,
                is_leverage_inversion: false,
                is_keystone: false,
                source_coherence: None,
            })
            .collect()
    }

    proptest! {
        /// Property: composites stay in [0, 1] through every modifier, and
        /// suppression happens exactly below the floor
        #[test]
        fn test_composite_bounds_and_floor(
            count in 1usize..8,
            ratios in proptest::collection::vec(0.0f64..=1.0, 8),
            exclusivities in proptest::collection::vec(0.0f64..=1.0, 8),
            model_count in 0u32..8,
        ) {
            let claims = arbitrary_claims(count, ratios);
            let exclusivity: Vec<ClaimExclusivity> = claims
                .iter()
                .zip(&exclusivities)
                .map(|(c, &ratio)| ClaimExclusivity {
                    claim_id: c.id.clone(),
                    exclusivity_ratio: ratio,
                })
                .collect();
            let inputs = TriageInputs {
                claims: &claims,
                exclusivity: &exclusivity,
                model_count,
                ..Default::default()
            };

            let config = TriageConfig::default();
            let result = compute_blast_radius_filter(&inputs, &config);

            for score in &result.scores {
                prop_assert!((0.0..=1.0).contains(&score.composite));
                prop_assert!((0.0..=1.0).contains(&score.raw_composite));
                prop_assert!(score.composite <= score.raw_composite + 1e-12);
                prop_assert_eq!(
                    score.suppressed,
                    score.composite < config.suppression_floor
                );
            }
        }

        /// Property: the ceiling stays in {0, 1, 2, 3} and is 0 exactly when
        /// there are no axes
        #[test]
        fn test_ceiling_range(
            count in 0usize..8,
            ratios in proptest::collection::vec(0.0f64..=1.0, 8),
            convergence in 0.0f64..=1.0,
        ) {
            let claims = arbitrary_claims(count, ratios);
            let exclusivity: Vec<ClaimExclusivity> = claims
                .iter()
                .map(|c| ClaimExclusivity {
                    claim_id: c.id.clone(),
                    exclusivity_ratio: 0.9,
                })
                .collect();
            let inputs = TriageInputs {
                claims: &claims,
                exclusivity: &exclusivity,
                model_count: 4,
                convergence_ratio: convergence,
                ..Default::default()
            };

            let result =
                compute_blast_radius_filter(&inputs, &TriageConfig::default());

            prop_assert!(result.question_ceiling <= 3);
            if result.axes.is_empty() {
                prop_assert_eq!(result.question_ceiling, 0);
            }
        }
    }
}
