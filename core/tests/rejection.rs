//! Rejection-rate analysis tests.
//!
//! The analyzer asks: among top-band (A+) applicants without bonus
//! points, what share loses out within the tier quota? The undefined
//! case (no such applicants) must come back as a missing value.

use tiersim_core::population::Applicant;
use tiersim_core::rejection;
use tiersim_core::{GpaScale, SimulationConfig, TierDistribution};

fn config(seat_count: u32) -> SimulationConfig {
    SimulationConfig {
        student_count: 100,
        seat_count,
        trial_count: 1,
        gpa_scale: GpaScale::Twelve,
        bonus_enabled: true,
        cutoff_score: 90.0,
        seed: 1,
    }
}

/// Hand-built applicant on the 12-point scale with bonus in effect.
fn applicant(id: u32, tier: u8, raw_score: u8, bonus: bool) -> Applicant {
    let scaled = (raw_score as f64 * 100.0 / 12.0 * 100.0).round() / 100.0;
    Applicant {
        id,
        tier,
        bonus,
        raw_score,
        scaled_score: scaled,
        final_score: if bonus { scaled + 10.0 } else { scaled },
    }
}

#[test]
fn rate_counts_only_top_band_no_bonus() {
    // seat_count 8 => 1 seat per tier.
    // Tier 1: one bonus A+ (110.0, takes the seat), two no-bonus A+
    // (100.0, both rejected), one no-bonus A (91.67, not top band).
    let pool = vec![
        applicant(0, 1, 12, true),
        applicant(1, 1, 12, false),
        applicant(2, 1, 12, false),
        applicant(3, 1, 11, false),
    ];
    let rates = rejection::rejection_rates(&config(8), &pool);
    assert_eq!(
        rates[0],
        Some(100.0),
        "both no-bonus A+ applicants lost the single seat"
    );
}

#[test]
fn rate_rounds_to_two_decimals() {
    // 1 seat; three no-bonus A+ applicants: one accepted, two
    // rejected => 2/3 * 100 = 66.67 after rounding.
    let pool = vec![
        applicant(0, 1, 12, false),
        applicant(1, 1, 12, false),
        applicant(2, 1, 12, false),
    ];
    let rates = rejection::rejection_rates(&config(8), &pool);
    assert_eq!(rates[0], Some(66.67));
}

#[test]
fn zero_rejections_is_a_real_zero() {
    // 2 seats, one no-bonus A+ who gets a seat: defined rate of 0%,
    // not a missing value.
    let pool = vec![applicant(0, 1, 12, false), applicant(1, 1, 7, false)];
    let rates = rejection::rejection_rates(&config(16), &pool);
    assert_eq!(rates[0], Some(0.0));
}

#[test]
fn undefined_denominator_is_missing_not_zero() {
    // Tier 1 has applicants, but every A+ holds bonus points, so the
    // denominator is 0 and the rate is undefined.
    let pool = vec![
        applicant(0, 1, 12, true),
        applicant(1, 1, 11, false),
        applicant(2, 1, 8, false),
    ];
    let rates = rejection::rejection_rates(&config(8), &pool);
    assert_eq!(rates[0], None, "undefined rate must be None, never 0");
}

#[test]
fn empty_tiers_are_missing() {
    let pool = vec![applicant(0, 4, 12, false)];
    let rates = rejection::rejection_rates(&config(8), &pool);
    for (i, rate) in rates.iter().enumerate() {
        if i == 3 {
            assert_eq!(*rate, Some(0.0), "tier 4's single A+ takes the seat");
        } else {
            assert_eq!(*rate, None, "tier {} has no applicants", i + 1);
        }
    }
}

#[test]
fn top_band_threshold_follows_the_scale() {
    // On the 11-point scale the top band is raw > 10, i.e. raw == 11.
    let mut cfg = config(8);
    cfg.gpa_scale = GpaScale::Eleven;
    cfg.bonus_enabled = false;

    let scaled = |raw: u8| (raw as f64 * 100.0 / 11.0 * 100.0).round() / 100.0;
    let make = |id: u32, raw: u8| Applicant {
        id,
        tier: 1,
        bonus: false,
        raw_score: raw,
        scaled_score: scaled(raw),
        final_score: scaled(raw),
    };
    // Two raw-11 applicants fight over one seat; raw-10 is not top band.
    let pool = vec![make(0, 11), make(1, 11), make(2, 10)];
    let rates = rejection::rejection_rates(&cfg, &pool);
    assert_eq!(rates[0], Some(50.0));
}

#[test]
fn generated_pool_rates_are_valid_percentages() {
    use tiersim_core::rng::TrialRng;
    use tiersim_core::population;

    let cfg = SimulationConfig {
        student_count: 3000,
        seat_count: 1000,
        trial_count: 1,
        gpa_scale: GpaScale::Twelve,
        bonus_enabled: true,
        cutoff_score: 90.0,
        seed: 77,
    };
    let dist = TierDistribution::skewed();
    let mut rng = TrialRng::for_trial(cfg.seed, 0);
    let pool = population::generate(&cfg, &dist, &mut rng);

    let rates = rejection::rejection_rates(&cfg, &pool);
    for rate in rates.iter().flatten() {
        assert!(
            (0.0..=100.0).contains(rate),
            "rate {rate} outside percentage range"
        );
    }
}
