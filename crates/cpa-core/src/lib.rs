//! `cpa-core` — foundational types for the `rust_cpa` crossing-risk estimator.
//!
//! This crate is a dependency of every other `cpa-*` crate.  It intentionally
//! has no `cpa-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`vec`]    | `Vec2` — planar vector with dot/norm helpers    |
//! | [`vessel`] | `VesselState` — constant-velocity point vessel  |
//! | [`rng`]    | `TrialRng` — per-trial deterministic RNG        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod rng;
pub mod vec;
pub mod vessel;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use rng::TrialRng;
pub use vec::Vec2;
pub use vessel::VesselState;
