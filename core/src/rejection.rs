//! Rejection-rate analysis for top-band applicants without bonus.
//!
//! The question this answers: of the applicants who hold the highest
//! attainable raw score (A+) but attend a non-bonus school, what
//! percentage is still rejected within their tier's seat quota?
//!
//! When a tier/trial has no such applicants at all the rate is
//! undefined. That case is reported as `None` — never 0, never an
//! error — so cross-trial averaging excludes it instead of biasing
//! the mean toward 0%.

use crate::config::SimulationConfig;
use crate::population::Applicant;
use crate::selection;
use crate::types::{round2, tiers, PerTier, NUM_TIERS};

/// Per-tier rejection percentages for one trial. `None` marks an
/// undefined rate (zero qualifying applicants in that tier).
pub type TierRates = PerTier<Option<f64>>;

fn is_top_band_no_bonus(a: &Applicant, threshold: u8) -> bool {
    a.raw_score > threshold && !a.bonus
}

/// Compute per-tier rejection rates for one generated pool.
pub fn rejection_rates(config: &SimulationConfig, pool: &[Applicant]) -> TierRates {
    let threshold = config.gpa_scale.top_band_threshold();
    let seats = config.seats_per_tier();

    let mut rates: TierRates = [None; NUM_TIERS];
    for tier in tiers() {
        let (accepted, rejected) = selection::select(pool, tier, seats);

        let accepted_top = accepted
            .iter()
            .filter(|a| is_top_band_no_bonus(a, threshold))
            .count();
        let rejected_top = rejected
            .iter()
            .filter(|a| is_top_band_no_bonus(a, threshold))
            .count();

        let denominator = accepted_top + rejected_top;
        if denominator > 0 {
            let rate = rejected_top as f64 / denominator as f64 * 100.0;
            rates[(tier - 1) as usize] = Some(round2(rate));
        }
    }
    rates
}
