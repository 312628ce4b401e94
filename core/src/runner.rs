//! The trial runner — orchestrates N independent trials.
//!
//! RULES:
//!   - The config is validated once, before the first trial. After
//!     that, no trial can fail: every computation operates on bounded,
//!     already-validated data.
//!   - Each trial calls the population generator exactly once and owns
//!     its applicant pool and RNG stream outright. No applicants and
//!     no random state are reused across trials.
//!   - Trials are embarrassingly parallel and run on a rayon pool;
//!     per-trial RNG streams make the parallel result byte-identical
//!     to a sequential run.

use rayon::prelude::*;
use serde::Serialize;

use crate::config::SimulationConfig;
use crate::distribution::TierDistribution;
use crate::error::SimResult;
use crate::population::{self, Applicant};
use crate::rejection::{self, TierRates};
use crate::rng::TrialRng;
use crate::selection;
use crate::types::{tiers, PerTier, TrialIndex, NUM_TIERS};

/// Which per-trial reducer to apply to each generated pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReducerMode {
    /// Per-tier count of applicants at or above the cutoff score.
    CutoffCount,
    /// Per-tier rejection rate among top-band, no-bonus applicants.
    RejectionRate,
    /// Per-tier, per-grade applicant counts plus accepted-score means.
    DistributionProfile,
}

/// One trial's contribution to distribution-profile mode.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRow {
    /// Applicant count per tier per raw grade, indexed `[tier - 1][grade]`
    /// with `grade` in `0..=max_grade` (grades below the scale minimum
    /// stay 0).
    pub grade_counts: PerTier<Vec<u32>>,
    /// Mean raw score of the tier's accepted applicants; `None` when
    /// the tier had no applicants at all that trial.
    pub mean_accepted_raw: PerTier<Option<f64>>,
}

/// The N×8 result of a run, one row per trial. Which variant comes
/// back is decided by the `ReducerMode` passed to [`TrialRunner::run`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrialMatrix {
    Counts(Vec<PerTier<u32>>),
    Rates(Vec<TierRates>),
    Profile(Vec<ProfileRow>),
}

/// Runs `config.trial_count` independent trials against one tier
/// distribution.
pub struct TrialRunner<'a> {
    config: &'a SimulationConfig,
    distribution: &'a TierDistribution,
}

impl<'a> TrialRunner<'a> {
    /// Build a runner, validating the configuration up front. A
    /// malformed config is rejected here, before any trial starts.
    pub fn new(
        config: &'a SimulationConfig,
        distribution: &'a TierDistribution,
    ) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            distribution,
        })
    }

    /// Run all trials with the selected reducer.
    pub fn run(&self, mode: ReducerMode) -> TrialMatrix {
        log::info!(
            "run start: trials={} students={} seats/tier={} mode={:?}",
            self.config.trial_count,
            self.config.student_count,
            self.config.seats_per_tier(),
            mode,
        );
        let matrix = match mode {
            ReducerMode::CutoffCount => TrialMatrix::Counts(self.run_cutoff_counts()),
            ReducerMode::RejectionRate => TrialMatrix::Rates(self.run_rejection_rates()),
            ReducerMode::DistributionProfile => TrialMatrix::Profile(self.run_profile()),
        };
        log::info!("run complete: trials={}", self.config.trial_count);
        matrix
    }

    /// Cutoff-count mode: one `[u32; 8]` row per trial.
    pub fn run_cutoff_counts(&self) -> Vec<PerTier<u32>> {
        let cutoff = self.config.cutoff_score;
        self.for_each_trial(|pool| selection::count_at_or_above(pool, cutoff))
    }

    /// Rejection-rate mode: one `[Option<f64>; 8]` row per trial.
    /// `None` cells mark undefined rates and must survive into the raw
    /// output so a caller can audit how many trials were affected.
    pub fn run_rejection_rates(&self) -> Vec<TierRates> {
        self.for_each_trial(|pool| rejection::rejection_rates(self.config, pool))
    }

    /// Distribution-profile mode: per-trial grade tables and accepted
    /// raw-score means, for cross-trial averaging downstream.
    pub fn run_profile(&self) -> Vec<ProfileRow> {
        self.for_each_trial(|pool| self.profile_trial(pool))
    }

    /// Generate each trial's pool on its own RNG stream and reduce it.
    /// Rows come back in trial order regardless of worker scheduling.
    fn for_each_trial<R, F>(&self, reduce: F) -> Vec<R>
    where
        R: Send,
        F: Fn(&[Applicant]) -> R + Sync,
    {
        (0..self.config.trial_count as TrialIndex)
            .into_par_iter()
            .map(|trial| {
                let mut rng = TrialRng::for_trial(self.config.seed, trial);
                let pool = population::generate(self.config, self.distribution, &mut rng);
                reduce(&pool)
            })
            .collect()
    }

    fn profile_trial(&self, pool: &[Applicant]) -> ProfileRow {
        let grades = self.config.gpa_scale.max_grade() as usize + 1;
        let seats = self.config.seats_per_tier();

        let mut grade_counts: PerTier<Vec<u32>> = std::array::from_fn(|_| vec![0u32; grades]);
        for a in pool {
            grade_counts[(a.tier - 1) as usize][a.raw_score as usize] += 1;
        }

        let mut mean_accepted_raw: PerTier<Option<f64>> = [None; NUM_TIERS];
        for tier in tiers() {
            let (accepted, _) = selection::select(pool, tier, seats);
            if !accepted.is_empty() {
                let sum: u32 = accepted.iter().map(|a| a.raw_score as u32).sum();
                mean_accepted_raw[(tier - 1) as usize] =
                    Some(sum as f64 / accepted.len() as f64);
            }
        }

        ProfileRow {
            grade_counts,
            mean_accepted_raw,
        }
    }
}
