//! Attack cooldown arithmetic.

/// An attacker is ready once the clock reaches its next attack time.
pub fn is_ready(current_time_sec: f32, next_attack_time_sec: f32) -> bool {
    current_time_sec >= next_attack_time_sec
}

/// `attack_speed` multiplies the delay: larger values attack slower.
///
/// # Panics
/// Panics if `attack_speed` or `base_attack_delay` is negative.
pub fn next_attack_time(current_time_sec: f32, attack_speed: i32, base_attack_delay: f32) -> f32 {
    assert!(attack_speed >= 0, "attack_speed must be >= 0");
    assert!(base_attack_delay >= 0.0, "base_attack_delay must be >= 0");
    current_time_sec + base_attack_delay * attack_speed as f32
}
