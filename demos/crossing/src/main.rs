//! crossing — single-shot crossing-risk estimation demo.
//!
//! Runs one Monte Carlo estimate with fixed built-in parameters: a reference
//! vessel at the origin heading +x at unit speed, 15 other vessels per trial
//! sampled from a 50×50 square, near-miss threshold 0.2.  Prints the elapsed
//! wall-clock time of the estimation call and the resulting probability.

use std::time::Instant;

use anyhow::Result;

use cpa_core::VesselState;
use cpa_risk::{RiskParams, estimate_crossing_risk};

// ── Parameters ────────────────────────────────────────────────────────────────

const NUM_TRIALS:      u64 = 50_000;
const NUM_OTHER_SHIPS: u32 = 15;
const AREA_SIZE:       f64 = 25.0; // positions drawn from [-25, 25) per axis
const MAX_SPEED:       f64 = 2.0;  // up to twice the reference vessel's speed
const THRESHOLD_DIST:  f64 = 0.2;  // safety threshold (e.g. km or nautical miles)
const SEED:            u64 = 42;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let reference = VesselState::reference();
    println!("=== crossing — rust_cpa near-miss estimator ===");
    println!(
        "Reference vessel at {} heading {}  |  Trials: {NUM_TRIALS}  |  Seed: {SEED}",
        reference.pos, reference.vel
    );

    let params = RiskParams {
        num_trials:      NUM_TRIALS,
        num_other_ships: NUM_OTHER_SHIPS,
        area_size:       AREA_SIZE,
        max_speed:       MAX_SPEED,
        threshold_dist:  THRESHOLD_DIST,
        seed:            SEED,
    };

    let t0 = Instant::now();
    let risk = estimate_crossing_risk(&params)?;
    let elapsed = t0.elapsed();

    println!(
        "'estimate_crossing_risk' executed in: {:.4} seconds",
        elapsed.as_secs_f64()
    );
    println!("Estimated probability of collision: {:.2}%", risk * 100.0);

    Ok(())
}
