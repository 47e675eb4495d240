//! Fundamental geometric helpers.
//!
//! The arena is the 2D X–Z plane; positions and velocities are
//! `glam::Vec2`, with `.y` standing in for the Z axis.

use glam::Vec2;

/// Normalized direction from `from` to `to`, or zero if the points coincide.
pub fn direction(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Move `current` toward `target` by at most `max_delta`, never overshooting.
///
/// Returns `current` unchanged when `max_delta <= 0`, and `target` exactly
/// once it is within reach.
pub fn move_towards(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    if max_delta <= 0.0 {
        return current;
    }

    let to_target = target - current;
    let distance = to_target.length();
    if distance <= max_delta || distance <= 0.0 {
        return target;
    }

    current + to_target / distance * max_delta
}
