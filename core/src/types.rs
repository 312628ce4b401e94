//! Shared primitive types used across the entire simulation.

/// A socio-economic tier. Always in 1..=8; applicants compete for seats
/// only within their own tier, never across tiers.
pub type Tier = u8;

/// Number of socio-economic tiers. Fixed by the admission policy.
pub const NUM_TIERS: usize = 8;

/// Index of a trial within a run. Also the offset used to derive the
/// trial's RNG stream from the master seed.
pub type TrialIndex = u64;

/// One value per tier, indexed by `tier - 1`.
pub type PerTier<T> = [T; NUM_TIERS];

/// Iterate tiers in canonical order (1 through 8).
pub fn tiers() -> impl Iterator<Item = Tier> {
    1..=NUM_TIERS as Tier
}

/// Round to 2 decimal places. The historical scoring method rounds the
/// scaled score before any bonus is added, so rounding must happen at
/// exactly this precision and exactly this point in the formula.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
