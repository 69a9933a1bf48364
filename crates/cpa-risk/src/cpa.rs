//! Closest-point-of-approach distance under constant-velocity motion.

use cpa_core::VesselState;

/// Minimum separation two constant-velocity point vessels will ever attain.
///
/// Works in the relative frame: with `Δp = b.pos − a.pos` and
/// `Δv = b.vel − a.vel`, separation over time is `‖Δp + t·Δv‖`, minimized at
/// `t* = −(Δp·Δv) / ‖Δv‖²`.  Two clamps apply:
///
/// - `‖Δv‖² == 0`: no relative motion, separation is constant — return the
///   current distance.  The zero test is an exact floating-point comparison;
///   near-parallel motion with a tiny nonzero `Δv` still takes the `t*` path.
/// - `t* < 0`: the closest approach is in the past and separation only grows
///   from here — return the current distance.
///
/// Pure and deterministic; always finite and non-negative for finite inputs.
pub fn cpa_distance(a: VesselState, b: VesselState) -> f64 {
    let rel_pos = b.pos - a.pos;
    let rel_vel = b.vel - a.vel;

    let rel_speed_sq = rel_vel.norm_sq();
    if rel_speed_sq == 0.0 {
        return rel_pos.norm();
    }

    let t_star = -rel_pos.dot(rel_vel) / rel_speed_sq;
    if t_star < 0.0 {
        return rel_pos.norm();
    }

    (rel_pos + rel_vel * t_star).norm()
}
