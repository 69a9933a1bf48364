//! Monte Carlo crossing-risk estimation.
//!
//! # Design
//!
//! Every trial is independent of every other trial, so the loop is a pure
//! count over trial indices.  Each trial derives its own RNG stream from
//! `(seed, trial_index)` — see [`cpa_core::rng`] — which makes the serial and
//! Rayon-sharded (`parallel` feature) paths produce bit-identical estimates
//! for the same seed.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use cpa_core::{TrialRng, VesselState};

use crate::{RiskError, RiskResult, VesselSampler, cpa_distance};

// ── Parameters ────────────────────────────────────────────────────────────────

/// Inputs to one estimation run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskParams {
    /// Independent Monte Carlo trials.  Must be at least 1.
    pub num_trials: u64,

    /// Other vessels sampled per trial.  Zero is allowed and yields a risk
    /// of exactly 0.0 (nothing can come near the reference vessel).
    pub num_other_ships: u32,

    /// Other-vessel positions are drawn from the square
    /// `[-area_size, area_size) × [-area_size, area_size)`.
    pub area_size: f64,

    /// Upper bound on other-vessel speed (the reference vessel moves at 1).
    pub max_speed: f64,

    /// CPA distances strictly below this count as a near miss.  Zero is
    /// allowed and yields 0.0 (the comparison is strict).
    pub threshold_dist: f64,

    /// Run seed.  The same seed always produces an identical estimate.
    pub seed: u64,
}

impl RiskParams {
    /// Fail fast on parameters that would otherwise produce NaN or garbage.
    pub fn validate(&self) -> RiskResult<()> {
        if self.num_trials == 0 {
            return Err(RiskError::ZeroTrials);
        }
        for (name, value) in [("area_size", self.area_size), ("max_speed", self.max_speed)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(RiskError::NonPositive { name, value });
            }
        }
        if !(self.threshold_dist.is_finite() && self.threshold_dist >= 0.0) {
            return Err(RiskError::Negative {
                name: "threshold_dist",
                value: self.threshold_dist,
            });
        }
        Ok(())
    }
}

// ── Estimation ────────────────────────────────────────────────────────────────

/// Estimate the probability that at least one sampled vessel passes within
/// `threshold_dist` of the reference vessel.
///
/// Returns the empirical at-risk frequency in `[0, 1]`.  Deterministic for a
/// given `params.seed`, including under the `parallel` feature.
pub fn estimate_crossing_risk(params: &RiskParams) -> RiskResult<f64> {
    params.validate()?;

    let reference = VesselState::reference();
    let sampler = VesselSampler::new(params.area_size, params.max_speed);

    #[cfg(feature = "parallel")]
    let at_risk = (0..params.num_trials)
        .into_par_iter()
        .filter(|&trial| trial_at_risk(trial, params, reference, &sampler))
        .count();

    #[cfg(not(feature = "parallel"))]
    let at_risk = (0..params.num_trials)
        .filter(|&trial| trial_at_risk(trial, params, reference, &sampler))
        .count();

    Ok(at_risk as f64 / params.num_trials as f64)
}

/// Run one trial: sample other vessels until the first near miss.
///
/// The early exit skips the remaining draws in an at-risk trial — a
/// performance shortcut with no effect on the estimate, since the trial's
/// outcome is already decided.
fn trial_at_risk(
    trial:     u64,
    params:    &RiskParams,
    reference: VesselState,
    sampler:   &VesselSampler,
) -> bool {
    let mut rng = TrialRng::new(params.seed, trial);
    (0..params.num_other_ships).any(|_| {
        let other = sampler.sample(&mut rng);
        cpa_distance(reference, other) < params.threshold_dist
    })
}
