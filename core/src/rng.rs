//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through TrialRng instances derived from the
//! single master seed stored on the SimulationConfig.
//!
//! Each trial gets its own RNG stream, seeded deterministically from
//! (master_seed, trial_index). This means:
//!   - Trials never share or advance each other's RNG state, so they
//!     can run on parallel workers without locks.
//!   - Any single trial is fully reproducible in isolation.
//!   - Running trials sequentially or in parallel yields byte-identical
//!     results.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use crate::types::TrialIndex;

/// The deterministic RNG stream owned by a single trial.
pub struct TrialRng {
    inner: Pcg64Mcg,
}

impl TrialRng {
    /// Derive the stream for one trial from the master seed and the
    /// trial's stable index within the run.
    pub fn for_trial(master_seed: u64, trial: TrialIndex) -> Self {
        let derived_seed = master_seed ^ (trial.wrapping_add(1).wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::Rng;
        assert!(n > 0, "n must be > 0");
        self.inner.gen_range(0..n)
    }

    /// Uniform integer draw over the inclusive range [lo, hi].
    pub fn grade_in(&mut self, lo: u8, hi: u8) -> u8 {
        debug_assert!(lo <= hi);
        lo + self.next_u64_below((hi - lo + 1) as u64) as u8
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}
