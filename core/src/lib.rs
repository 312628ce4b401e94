//! tiersim-core: the tiered-admission Monte Carlo engine.
//!
//! Estimates, via repeated randomized trials, how a tiered-admission
//! policy with optional bonus points affects the probability that
//! applicants clear a score cutoff and win one of a limited number of
//! seats. The presentation layer (form, narrative, charts) lives
//! elsewhere and consumes the result tables produced here as plain
//! in-memory data.
//!
//! RULES:
//!   - All randomness flows through per-trial `TrialRng` streams
//!     derived from the master seed. Same seed, same results.
//!   - A config is validated before the first trial; after that no
//!     trial may fail.
//!   - Undefined statistics are typed missing values (`None`), never
//!     NaN sentinels and never silent zeros.

pub mod config;
pub mod distribution;
pub mod error;
pub mod population;
pub mod rejection;
pub mod rng;
pub mod runner;
pub mod selection;
pub mod stats;
pub mod types;

pub use config::{GpaScale, SimulationConfig};
pub use distribution::TierDistribution;
pub use error::{ConfigError, SimError, SimResult};
pub use runner::{ReducerMode, TrialMatrix, TrialRunner};
