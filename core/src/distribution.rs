//! Tier-probability distributions.
//!
//! A `TierDistribution` is a validated categorical distribution over
//! the 8 socio-economic tiers. It can only be built through
//! `try_new`, so every instance in circulation satisfies the
//! invariants: exactly 8 non-negative weights summing to 1 within
//! `1e-6`. No mutation after construction.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rng::TrialRng;
use crate::types::{PerTier, Tier, NUM_TIERS};

/// Tolerance on the weight sum. Weights come from published tier-size
/// estimates quoted to 2 decimals, so anything further off than this
/// is a malformed input, not rounding noise.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierDistribution {
    weights: PerTier<f64>,
}

impl TierDistribution {
    /// Validate and construct. Fails unless exactly 8 non-negative
    /// weights are supplied and their sum is within 1e-6 of 1.0.
    pub fn try_new(weights: &[f64]) -> Result<Self, ConfigError> {
        if weights.len() != NUM_TIERS {
            return Err(ConfigError::WrongWeightCount(weights.len()));
        }
        for (i, &w) in weights.iter().enumerate() {
            if w < 0.0 {
                return Err(ConfigError::NegativeWeight {
                    tier: (i + 1) as u8,
                    weight: w,
                });
            }
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightsNotNormalized(sum));
        }
        let mut arr = [0.0; NUM_TIERS];
        arr.copy_from_slice(weights);
        Ok(Self { weights: arr })
    }

    /// Even tier sizes: every tier holds 12.5% of applicants.
    pub fn even() -> Self {
        Self {
            weights: [0.125; NUM_TIERS],
        }
    }

    /// Skewed tier sizes, larger at the upper end. Relative tier sizes
    /// estimated from data presented by the school committee and the
    /// exam school task force.
    pub fn skewed() -> Self {
        Self {
            weights: [0.09, 0.10, 0.11, 0.11, 0.12, 0.13, 0.16, 0.18],
        }
    }

    pub fn weights(&self) -> &PerTier<f64> {
        &self.weights
    }

    pub fn weight(&self, tier: Tier) -> f64 {
        self.weights[(tier - 1) as usize]
    }

    /// Independent categorical draw: walk the cumulative weights until
    /// the roll falls inside a tier's band. Tiers are mutually
    /// exclusive and exhaustive, so exactly one tier wins.
    pub fn sample(&self, rng: &mut TrialRng) -> Tier {
        let roll = rng.next_f64();
        let mut cumulative = 0.0;
        for (i, &w) in self.weights.iter().enumerate() {
            cumulative += w;
            if roll < cumulative {
                return (i + 1) as Tier;
            }
        }
        // roll landed in the sum's rounding slack past the last band
        NUM_TIERS as Tier
    }
}
