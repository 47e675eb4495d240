//! Knockback impulse physics: apply on hit, decay per tick, integrate
//! displacement the tick after the hit.

use glam::Vec2;

use brawl_core::state::KnockbackState;
use brawl_core::types::direction;

/// Add an impulse pushing the target away from the attacker. Stacks
/// additively with any impulse already in flight.
pub fn apply_impulse(
    state: KnockbackState,
    attacker_pos: Vec2,
    target_pos: Vec2,
    impulse_strength: f32,
) -> KnockbackState {
    let push = direction(attacker_pos, target_pos) * impulse_strength;
    state.with_added_impulse(push)
}

/// Reduce velocity magnitude by `decay_speed * dt`, snapping to the zero
/// sentinel once the remainder would be zero or below `min_threshold`.
pub fn decay(
    state: KnockbackState,
    delta_time: f32,
    decay_speed: f32,
    min_threshold: f32,
) -> KnockbackState {
    if !state.has_velocity() {
        return state;
    }

    let magnitude = state.velocity.length();
    let reduction = decay_speed * delta_time;
    if magnitude <= reduction || magnitude <= min_threshold {
        return KnockbackState::default();
    }

    let new_magnitude = magnitude - reduction;
    KnockbackState::new(state.velocity / magnitude * new_magnitude)
}

/// Positional offset contributed by the current impulse over `dt`.
pub fn displacement(state: KnockbackState, delta_time: f32) -> Vec2 {
    state.velocity * delta_time
}
