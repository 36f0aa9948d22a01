//! Per-claim and per-edge diagnostics over statement embeddings
//!
//! Pure and deterministic: identical inputs yield identical outputs. Every
//! tie-break that depends on order uses the input order of the records, and
//! region membership is resolved by scanning regions in input order with the
//! first containing region winning.

use crate::measurement::{
    ClaimGeometricMeasurement, DiagnosticsResult, EdgeGeographicMeasurement,
};
use crate::similarity::{centroid, cosine_similarity, mean, population_stddev};
use indexmap::IndexMap;
use quorum_domain::{Claim, Edge, Region, RegionId, StatementId};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Minimum embedded statements for a coherence measurement
const MIN_STATEMENTS_FOR_COHERENCE: usize = 2;

/// Minimum embedded statements for a spread measurement
const MIN_STATEMENTS_FOR_SPREAD: usize = 3;

/// Resolve each statement to the region containing it
///
/// Regions are scanned in input order and the first region containing a
/// statement wins; membership in multiple regions is an upstream
/// inconsistency this core resolves deterministically rather than rejecting.
pub fn region_by_statement(regions: &[Region]) -> HashMap<StatementId, RegionId> {
    let mut membership = HashMap::new();
    for region in regions {
        for statement_id in &region.member_statement_ids {
            membership
                .entry(statement_id.clone())
                .or_insert_with(|| region.id.clone());
        }
    }
    membership
}

/// Compute Level-1 geometric measurements for every claim and edge
///
/// # Arguments
/// * `claims` - the decision round's claims, in mapper output order
/// * `edges` - pairwise relations between those claims
/// * `regions` - the substrate's clusters, read-only
/// * `embeddings` - statement embeddings keyed by statement id
/// * `statement_models` - statement -> originating model index
///
/// Statements referenced by a claim but absent from `embeddings` are
/// excluded from that claim's similarity denominators; they never zero a
/// measurement or raise an error.
pub fn compute_diagnostics(
    claims: &[Claim],
    edges: &[Edge],
    regions: &[Region],
    embeddings: &HashMap<StatementId, Vec<f32>>,
    statement_models: &HashMap<StatementId, u32>,
) -> DiagnosticsResult {
    let membership = region_by_statement(regions);
    let regions_by_id: HashMap<&RegionId, &Region> =
        regions.iter().map(|r| (&r.id, r)).collect();

    let mut claim_measurements = Vec::with_capacity(claims.len());
    let mut centroids: HashMap<&str, Option<Vec<f32>>> = HashMap::new();

    for claim in claims {
        let embedded: Vec<&[f32]> = claim
            .source_statement_ids
            .iter()
            .filter_map(|id| embeddings.get(id).map(Vec::as_slice))
            .collect();

        let mut pairwise = Vec::new();
        for i in 0..embedded.len() {
            for j in (i + 1)..embedded.len() {
                pairwise.push(cosine_similarity(embedded[i], embedded[j]));
            }
        }

        let source_coherence = if embedded.len() >= MIN_STATEMENTS_FOR_COHERENCE {
            mean(&pairwise)
        } else {
            None
        };
        let embedding_spread = if embedded.len() >= MIN_STATEMENTS_FOR_SPREAD {
            population_stddev(&pairwise)
        } else {
            None
        };

        // Insertion-ordered counting keeps the dominant-region tie-break at
        // "first region encountered" along the claim's statement order.
        let mut region_votes: IndexMap<&RegionId, usize> = IndexMap::new();
        for statement_id in &claim.source_statement_ids {
            if let Some(region_id) = membership.get(statement_id) {
                *region_votes.entry(region_id).or_insert(0) += 1;
            }
        }

        let mut dominant: Option<(&RegionId, usize)> = None;
        for (region_id, votes) in &region_votes {
            let is_better = match dominant {
                Some((_, best)) => *votes > best,
                None => true,
            };
            if is_better {
                dominant = Some((*region_id, *votes));
            }
        }
        let dominant_region = dominant
            .and_then(|(region_id, _)| regions_by_id.get(region_id))
            .copied();

        let source_model_diversity = claim
            .source_statement_ids
            .iter()
            .filter_map(|id| statement_models.get(id))
            .collect::<HashSet<_>>()
            .len();

        centroids.insert(claim.id.as_str(), centroid(&embedded));

        claim_measurements.push(ClaimGeometricMeasurement {
            claim_id: claim.id.clone(),
            source_coherence,
            embedding_spread,
            region_span: region_votes.len(),
            source_model_diversity,
            source_statement_count: claim.source_statement_ids.len(),
            dominant_region_id: dominant_region.map(|r| r.id.clone()),
            dominant_region_tier: dominant_region.map(|r| r.tier),
            dominant_region_model_diversity: dominant_region.map(|r| r.model_diversity),
        });
    }

    let measurements_by_claim: HashMap<&str, &ClaimGeometricMeasurement> = claim_measurements
        .iter()
        .map(|m| (m.claim_id.as_str(), m))
        .collect();

    let edge_measurements = edges
        .iter()
        .map(|edge| {
            let from = measurements_by_claim.get(edge.from.as_str());
            let to = measurements_by_claim.get(edge.to.as_str());

            let from_region_id = from.and_then(|m| m.dominant_region_id.clone());
            let to_region_id = to.and_then(|m| m.dominant_region_id.clone());
            let crosses_region_boundary = match (&from_region_id, &to_region_id) {
                (Some(a), Some(b)) => a != b,
                _ => false,
            };

            let centroid_similarity = match (
                centroids.get(edge.from.as_str()),
                centroids.get(edge.to.as_str()),
            ) {
                (Some(Some(a)), Some(Some(b))) => Some(cosine_similarity(a, b)),
                _ => None,
            };

            EdgeGeographicMeasurement {
                from_claim_id: edge.from.clone(),
                to_claim_id: edge.to.clone(),
                crosses_region_boundary,
                centroid_similarity,
                from_region_id,
                to_region_id,
            }
        })
        .collect::<Vec<_>>();

    debug!(
        claims = claim_measurements.len(),
        edges = edge_measurements.len(),
        regions = regions.len(),
        "computed geometric diagnostics"
    );

    DiagnosticsResult { claim_measurements, edge_measurements }
}
