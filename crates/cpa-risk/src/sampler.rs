//! Uniform random other-vessel sampling.

use std::f64::consts::TAU;

use cpa_core::{TrialRng, Vec2, VesselState};

/// Draws other-vessel states for one run's trial scenarios.
///
/// Each draw is independent: position uniform per-coordinate in
/// `[-area_size, area_size)`, heading uniform in `[0, 2π)`, speed uniform in
/// `[0, max_speed)`.  Half-open ranges throughout, so the draws are i.i.d.
/// with no boundary duplication.
#[derive(Copy, Clone, Debug)]
pub struct VesselSampler {
    area_size: f64,
    max_speed: f64,
}

impl VesselSampler {
    pub fn new(area_size: f64, max_speed: f64) -> Self {
        Self { area_size, max_speed }
    }

    /// Sample one vessel state from `rng`.
    ///
    /// Consumes exactly four uniform draws in a fixed order (x, y, heading,
    /// speed) — the per-trial streams stay aligned across runs.
    pub fn sample(&self, rng: &mut TrialRng) -> VesselState {
        let pos = Vec2::new(
            rng.gen_range(-self.area_size..self.area_size),
            rng.gen_range(-self.area_size..self.area_size),
        );
        let heading = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(0.0..self.max_speed);
        VesselState::new(pos, Vec2::from_polar(speed, heading))
    }
}
