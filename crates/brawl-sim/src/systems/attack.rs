//! Melee attack resolution.

use brawl_core::config::AttackConfig;
use brawl_core::enums::AttackFailureReason;
use brawl_core::state::CombatUnitState;

use super::{cooldown, health};

/// Outcome of one attack attempt. On failure the `*_after` states are
/// the inputs unchanged: a refused attack has no side effects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackResult {
    pub failure: Option<AttackFailureReason>,
    pub attacker_after: CombatUnitState,
    pub target_after: CombatUnitState,
    pub damage_applied: i32,
}

impl AttackResult {
    pub fn success(&self) -> bool {
        self.failure.is_none()
    }
}

/// First matching failure wins: attacker dead, target dead, out of
/// range, cooldown not ready.
pub fn failure_reason(
    attacker: &CombatUnitState,
    target: &CombatUnitState,
    current_time_sec: f32,
    config: &AttackConfig,
) -> Option<AttackFailureReason> {
    if !attacker.is_alive() {
        return Some(AttackFailureReason::AttackerDead);
    }
    if !target.is_alive() {
        return Some(AttackFailureReason::TargetDead);
    }
    if attacker.position.distance(target.position) > config.attack_range {
        return Some(AttackFailureReason::OutOfRange);
    }
    if !cooldown::is_ready(current_time_sec, attacker.next_attack_time_sec) {
        return Some(AttackFailureReason::CooldownNotReady);
    }
    None
}

pub fn can_attack(
    attacker: &CombatUnitState,
    target: &CombatUnitState,
    current_time_sec: f32,
    config: &AttackConfig,
) -> bool {
    failure_reason(attacker, target, current_time_sec, config).is_none()
}

/// Attempt one swing. On success the target loses `min(attack, hp)` and
/// the attacker's cooldown is pushed to
/// `now + base_attack_delay * attack_speed`.
pub fn try_attack(
    attacker: &CombatUnitState,
    target: &CombatUnitState,
    current_time_sec: f32,
    config: &AttackConfig,
) -> AttackResult {
    if let Some(failure) = failure_reason(attacker, target, current_time_sec, config) {
        return AttackResult {
            failure: Some(failure),
            attacker_after: *attacker,
            target_after: *target,
            damage_applied: 0,
        };
    }

    let damage = health::apply_damage(target, attacker.attack);
    let next = cooldown::next_attack_time(
        current_time_sec,
        attacker.attack_speed,
        config.base_attack_delay,
    );

    AttackResult {
        failure: None,
        attacker_after: attacker.with_next_attack_time_sec(next),
        target_after: damage.unit_after,
        damage_applied: damage.damage_applied,
    }
}
