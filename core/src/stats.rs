//! Cross-trial statistical aggregation.
//!
//! Everything here is a single-threaded reduction over a complete
//! trial matrix: it runs only after every trial row (or its missing-
//! value marker) has been collected. Missing cells are excluded from
//! mean and standard deviation, never counted as 0.

use serde::Serialize;

use crate::rejection::TierRates;
use crate::runner::ProfileRow;
use crate::types::{PerTier, NUM_TIERS};

/// Summary of one tier's per-trial values across a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct TierSummary {
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator); 0.0 when fewer
    /// than two samples exist.
    pub std_dev: f64,
    /// The non-missing per-trial values, kept for downstream
    /// histogramming.
    pub samples: Vec<f64>,
    /// How many trials reported an undefined value for this tier.
    pub missing: usize,
}

impl TierSummary {
    fn from_samples(samples: Vec<f64>, missing: usize) -> Self {
        let n = samples.len();
        let mean = if n == 0 {
            0.0
        } else {
            samples.iter().sum::<f64>() / n as f64
        };
        let std_dev = if n < 2 {
            0.0
        } else {
            let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            var.sqrt()
        };
        Self {
            mean,
            std_dev,
            samples,
            missing,
        }
    }
}

/// Summarize a cutoff-count matrix: per-tier mean, std dev and raw
/// samples over the trial dimension.
pub fn summarize_counts(matrix: &[PerTier<u32>]) -> PerTier<TierSummary> {
    std::array::from_fn(|t| {
        let samples: Vec<f64> = matrix.iter().map(|row| row[t] as f64).collect();
        TierSummary::from_samples(samples, 0)
    })
}

/// Summarize a rejection-rate matrix. `None` cells are excluded from
/// the statistics and surface only through `missing`.
pub fn summarize_rates(matrix: &[TierRates]) -> PerTier<TierSummary> {
    std::array::from_fn(|t| {
        let samples: Vec<f64> = matrix.iter().filter_map(|row| row[t]).collect();
        let missing = matrix.len() - samples.len();
        if missing > 0 {
            log::debug!(
                "tier {}: {missing} of {} trials had an undefined rejection rate",
                t + 1,
                matrix.len(),
            );
        }
        TierSummary::from_samples(samples, missing)
    })
}

/// Equal-width histogram of one tier's trial samples, for the
/// presentation layer's per-tier charts.
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
    pub counts: Vec<u32>,
}

/// Bin `samples` into `bins` equal-width buckets spanning the sample
/// range. The maximum sample lands in the last bucket. An empty
/// sample set (every trial missing) yields all-zero counts.
pub fn histogram(samples: &[f64], bins: usize) -> Histogram {
    assert!(bins > 0, "bins must be > 0");
    let mut counts = vec![0u32; bins];
    if samples.is_empty() {
        return Histogram {
            min: 0.0,
            max: 0.0,
            bin_width: 0.0,
            counts,
        };
    }
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == min {
        // Degenerate range: every sample in the first bucket.
        counts[0] = samples.len() as u32;
        return Histogram {
            min,
            max,
            bin_width: 0.0,
            counts,
        };
    }
    let bin_width = (max - min) / bins as f64;
    for &s in samples {
        let mut idx = ((s - min) / bin_width) as usize;
        if idx >= bins {
            idx = bins - 1;
        }
        counts[idx] += 1;
    }
    Histogram {
        min,
        max,
        bin_width,
        counts,
    }
}

/// Cross-trial average of distribution-profile rows.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionProfile {
    /// Expected applicant count per tier per raw grade, averaged over
    /// trials; indexed `[tier - 1][grade]` with grade in 0..=max_grade.
    pub avg_counts: PerTier<Vec<f64>>,
    /// Cross-trial mean of each trial's mean accepted raw score, per
    /// tier. `None` when no trial ever had accepted applicants there.
    pub mean_accepted_raw: PerTier<Option<f64>>,
}

/// Reduce profile rows along the trial dimension. Both outputs are
/// plain arithmetic means, kept distinct because one reduces whole
/// population tables and the other reduces post-selection subsets.
pub fn summarize_profile(rows: &[ProfileRow]) -> DistributionProfile {
    let grades = rows.first().map_or(0, |r| r.grade_counts[0].len());
    let trials = rows.len();

    let mut avg_counts: PerTier<Vec<f64>> = std::array::from_fn(|_| vec![0.0; grades]);
    for row in rows {
        for t in 0..NUM_TIERS {
            for (g, &c) in row.grade_counts[t].iter().enumerate() {
                avg_counts[t][g] += c as f64;
            }
        }
    }
    if trials > 0 {
        for tier_counts in avg_counts.iter_mut() {
            for c in tier_counts.iter_mut() {
                *c /= trials as f64;
            }
        }
    }

    let mean_accepted_raw: PerTier<Option<f64>> = std::array::from_fn(|t| {
        let means: Vec<f64> = rows.iter().filter_map(|r| r.mean_accepted_raw[t]).collect();
        if means.is_empty() {
            None
        } else {
            Some(means.iter().sum::<f64>() / means.len() as f64)
        }
    });

    DistributionProfile {
        avg_counts,
        mean_accepted_raw,
    }
}
