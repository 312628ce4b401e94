//! Simulation parameters.
//!
//! RULE: every component receives its parameters through a
//! `SimulationConfig` passed in explicitly. No module-level state, no
//! defaults pulled out of thin air mid-run. A config is validated once,
//! before the first trial, and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::NUM_TIERS;

/// The historical grade-scale conventions. BPS used an 11-point scale
/// in its own task-force simulations and a 12-point scale in the
/// bonus-point variant; both survive here as configuration rather than
/// as separate code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GpaScale {
    /// Raw grades 8..=11, scaled by 100/11.
    Eleven,
    /// Raw grades 7..=12, scaled by 100/12.
    Twelve,
}

impl GpaScale {
    /// Highest attainable raw grade; also the scaled-score divisor.
    pub fn max_grade(self) -> u8 {
        match self {
            Self::Eleven => 11,
            Self::Twelve => 12,
        }
    }

    /// Lowest eligible raw grade (a B). 8 on the 11-point scale,
    /// 7 on the 12-point scale.
    pub fn min_grade(self) -> u8 {
        match self {
            Self::Eleven => 8,
            Self::Twelve => 7,
        }
    }

    /// The second-highest attainable grade. An applicant whose raw
    /// score is strictly above this holds the top band (A+).
    pub fn top_band_threshold(self) -> u8 {
        self.max_grade() - 1
    }

    /// Number of distinct raw grades an applicant can draw.
    pub fn grade_span(self) -> u8 {
        self.max_grade() - self.min_grade() + 1
    }
}

/// Immutable parameters for one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Total eligible applicants generated per trial.
    pub student_count: u32,
    /// Total seats available across all tiers.
    pub seat_count: u32,
    /// Number of independent trials to run.
    pub trial_count: u32,
    /// Grade-scale convention for raw and scaled scores.
    pub gpa_scale: GpaScale,
    /// Whether bonus-school applicants get the flat 10-point bonus.
    pub bonus_enabled: bool,
    /// Final-score threshold for cutoff-count analysis.
    pub cutoff_score: f64,
    /// Master seed. Every trial derives its own RNG stream from this.
    pub seed: u64,
}

/// Share of applicants attending bonus-eligible schools. A policy
/// constant, independent of tier membership.
pub const BONUS_PROBABILITY: f64 = 0.8;

/// Flat bonus added to the scaled score when bonus is in effect.
pub const BONUS_POINTS: f64 = 10.0;

impl SimulationConfig {
    /// Validate counts and ranges. Called by the runner before any
    /// trial executes; a failure here aborts the whole run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.student_count == 0 {
            return Err(ConfigError::InvalidStudentCount);
        }
        if self.seat_count == 0 {
            return Err(ConfigError::InvalidSeatCount);
        }
        if self.trial_count == 0 {
            return Err(ConfigError::InvalidTrialCount);
        }
        if !(0.0..=100.0).contains(&self.cutoff_score) {
            return Err(ConfigError::CutoffOutOfRange(self.cutoff_score));
        }
        Ok(())
    }

    /// Seats available within each tier: total seats divided evenly
    /// across the 8 tiers, floor division.
    pub fn seats_per_tier(&self) -> usize {
        (self.seat_count as usize) / NUM_TIERS
    }
}
