//! Within-tier selection: cutoff counting and top-K seat allocation.

use crate::population::Applicant;
use crate::types::{PerTier, Tier, NUM_TIERS};

/// Per-tier count of applicants with `final_score >= cutoff`.
///
/// Tiers with zero qualifying applicants appear with count 0, never
/// omitted — aggregation relies on every trial row having all 8
/// columns.
pub fn count_at_or_above(pool: &[Applicant], cutoff: f64) -> PerTier<u32> {
    let mut counts = [0u32; NUM_TIERS];
    for a in pool {
        if a.final_score >= cutoff {
            counts[(a.tier - 1) as usize] += 1;
        }
    }
    counts
}

/// Rank one tier's applicants by final score and partition into
/// accepted and rejected sets given the tier's seat quota.
///
/// Ties are broken by original insertion order (stable sort on the
/// descending score). This is a deliberate, documented tie-break
/// policy: among equal scores, the earlier-generated applicant wins
/// the seat.
pub fn select<'a>(
    pool: &'a [Applicant],
    tier: Tier,
    seats_per_tier: usize,
) -> (Vec<&'a Applicant>, Vec<&'a Applicant>) {
    let mut ranked: Vec<&Applicant> = pool.iter().filter(|a| a.tier == tier).collect();
    ranked.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .expect("final scores are never NaN")
    });

    if ranked.len() <= seats_per_tier {
        // Fewer applicants than seats: everyone is accepted.
        return (ranked, Vec::new());
    }
    let rejected = ranked.split_off(seats_per_tier);
    (ranked, rejected)
}
