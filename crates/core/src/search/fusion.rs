//! Reciprocal Rank Fusion over per-sub-question ranked lists.
//!
//! Each sub-question yields an independently-scored ranked list over the same
//! corpus. Raw distance scales are not comparable across queries, but rank
//! position is, so fusion scores each applicant by `sum(1 / (k + rank))`
//! across every list it appears in. The `1/(k+rank)` curve heavily rewards
//! top positions while still crediting lower ranks, with `k` controlling how
//! quickly the reward decays.

use crate::table::ApplicantId;
use ordered_float::OrderedFloat;
use std::collections::HashMap;

/// Reciprocal Rank Fusion: combines N ranked lists into one consensus ranking.
///
/// `results` holds one best-first ranked list per sub-question; the distance
/// in each `(id, distance)` pair is ignored — only rank position matters.
/// The output spans the union of ids seen across all lists, sorted by
/// descending fused score. Equal scores are broken by ascending applicant id
/// so identical inputs always produce identical output.
///
/// Pure function: no I/O, no failure modes. Empty input yields empty output.
pub fn rrf_fusion(results: &[Vec<(ApplicantId, f32)>], rrf_k: f32) -> Vec<(ApplicantId, f32)> {
    let mut scores: HashMap<&str, f32> = HashMap::new();

    for ranked_list in results {
        for (rank, (id, _distance)) in ranked_list.iter().enumerate() {
            *scores.entry(id.as_str()).or_insert(0.0) += 1.0 / (rrf_k + rank as f32);
        }
    }

    let mut fused: Vec<(ApplicantId, f32)> = scores
        .into_iter()
        .map(|(id, score)| (id.to_string(), score))
        .collect();
    fused.sort_unstable_by(|a, b| {
        OrderedFloat(b.1)
            .cmp(&OrderedFloat(a.1))
            .then_with(|| a.0.cmp(&b.0))
    });
    fused
}
