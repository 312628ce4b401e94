use thiserror::Error;

/// Rejected configuration. Raised before any trial executes — once a
/// config has validated, no error may originate from inside a trial.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("student_count must be > 0")]
    InvalidStudentCount,

    #[error("seat_count must be > 0")]
    InvalidSeatCount,

    #[error("trial_count must be > 0")]
    InvalidTrialCount,

    #[error("cutoff_score {0} outside [0, 100]")]
    CutoffOutOfRange(f64),

    #[error("tier distribution needs exactly 8 weights, got {0}")]
    WrongWeightCount(usize),

    #[error("tier {tier} weight {weight} is negative")]
    NegativeWeight { tier: u8, weight: f64 },

    #[error("tier weights sum to {0}, expected 1.0 within 1e-6")]
    WeightsNotNormalized(f64),
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
