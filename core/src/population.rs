//! Synthetic applicant pools.
//!
//! One pool is generated per trial and owned exclusively by that
//! trial; it is discarded as soon as the trial's result row has been
//! extracted. All draws are independent per applicant:
//!   - tier: categorical over the configured TierDistribution,
//!   - bonus flag: Bernoulli(0.8), uncorrelated with tier — 80% of
//!     applicants attend bonus-eligible schools regardless of tier,
//!   - raw score: uniform integer over the scale's grade range.

use serde::Serialize;

use crate::config::{SimulationConfig, BONUS_POINTS, BONUS_PROBABILITY};
use crate::distribution::TierDistribution;
use crate::rng::TrialRng;
use crate::types::{round2, Tier};

/// One synthetic applicant. Ephemeral: never persisted across trials.
#[derive(Debug, Clone, Serialize)]
pub struct Applicant {
    /// Unique within a trial; doubles as insertion order for the
    /// stable tie-break in selection.
    pub id: u32,
    pub tier: Tier,
    /// Whether the applicant's school qualifies for bonus points.
    pub bonus: bool,
    /// Grade-point value on the configured scale.
    pub raw_score: u8,
    /// Raw score normalized to 0..=100, rounded to 2 decimals.
    pub scaled_score: f64,
    /// Scaled score plus bonus (if enabled); used for ranking and
    /// cutoff comparisons.
    pub final_score: f64,
}

/// Generate one applicant pool of `config.student_count` applicants.
///
/// A `student_count` of 0 yields an empty pool; downstream components
/// treat an empty pool as zero counts, not as an error.
pub fn generate(
    config: &SimulationConfig,
    distribution: &TierDistribution,
    rng: &mut TrialRng,
) -> Vec<Applicant> {
    let scale = config.gpa_scale;
    let divisor = scale.max_grade() as f64;
    let n = config.student_count as usize;

    let mut pool = Vec::with_capacity(n);
    for id in 0..n as u32 {
        let tier = distribution.sample(rng);
        let bonus = rng.chance(BONUS_PROBABILITY);
        let raw_score = rng.grade_in(scale.min_grade(), scale.max_grade());

        let scaled_score = round2(raw_score as f64 * 100.0 / divisor);
        let final_score = if config.bonus_enabled && bonus {
            scaled_score + BONUS_POINTS
        } else {
            scaled_score
        };

        pool.push(Applicant {
            id,
            tier,
            bonus,
            raw_score,
            scaled_score,
            final_score,
        });
    }
    pool
}
