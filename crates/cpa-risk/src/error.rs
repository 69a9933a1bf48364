//! Estimator error type.
//!
//! Invalid parameters fail fast with a descriptive error rather than
//! surfacing downstream as NaN.  Nothing else in the estimator can fail.

use thiserror::Error;

/// Parameter-validation errors from [`RiskParams::validate`][crate::RiskParams::validate].
#[derive(Debug, Error, PartialEq)]
pub enum RiskError {
    #[error("num_trials must be at least 1")]
    ZeroTrials,

    #[error("{name} must be positive and finite (got {value})")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must be non-negative and finite (got {value})")]
    Negative { name: &'static str, value: f64 },
}

/// Shorthand result type for cpa-risk.
pub type RiskResult<T> = Result<T, RiskError>;
