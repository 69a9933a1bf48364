//! `cpa-risk` — CPA evaluation and Monte Carlo crossing-risk estimation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`cpa`]       | `cpa_distance` — closest-point-of-approach evaluator      |
//! | [`sampler`]   | `VesselSampler` — uniform random other-vessel states      |
//! | [`estimator`] | `RiskParams`, `estimate_crossing_risk` — the trial loop   |
//! | [`error`]     | `RiskError`, `RiskResult<T>`                              |
//!
//! # Estimation model
//!
//! One run draws `num_trials` independent trial scenarios.  Each trial
//! samples up to `num_other_ships` vessels uniformly (position within a
//! square, heading, speed) and tests each against the fixed reference vessel
//! with [`cpa::cpa_distance`]; the trial is at risk if any CPA distance falls
//! below the safety threshold.  The estimate is the at-risk fraction across
//! trials.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Shard trials across Rayon workers (same results, faster).  |
//! | `serde`    | Adds `Serialize`/`Deserialize` to `RiskParams`.            |

pub mod cpa;
pub mod error;
pub mod estimator;
pub mod sampler;


pub use cpa::cpa_distance;
pub use error::{RiskError, RiskResult};
pub use estimator::{RiskParams, estimate_crossing_risk};
pub use sampler::VesselSampler;
