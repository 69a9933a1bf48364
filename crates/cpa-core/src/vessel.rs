//! Vessel kinematic state.
//!
//! A vessel is a point with a position and a constant velocity — no extent,
//! no heading dynamics, no acceleration.  States are transient stack values:
//! each trial samples fresh ones and discards them when the trial ends.

use crate::Vec2;

/// A point vessel under constant-velocity straight-line motion.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VesselState {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl VesselState {
    #[inline]
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// The fixed reference vessel: at the origin, unit speed along +x.
    ///
    /// Constant across every trial of a run; all other vessels are sampled
    /// relative to it.
    #[inline]
    pub fn reference() -> Self {
        Self::new(Vec2::ZERO, Vec2::new(1.0, 0.0))
    }

    /// Extrapolated position after `t` time units of straight-line motion.
    #[inline]
    pub fn position_at(self, t: f64) -> Vec2 {
        self.pos + self.vel * t
    }
}
