//! Hit point bookkeeping.

use brawl_core::state::CombatUnitState;

/// Outcome of applying damage to one unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageResult {
    pub unit_after: CombatUnitState,
    /// Actual hp removed: `min(requested, hp before the hit)`.
    pub damage_applied: i32,
    /// True only on the hit that took the unit from alive to dead.
    pub died_now: bool,
}

/// Apply `damage` to `unit`, flooring hp at zero.
///
/// # Panics
/// Panics if `damage` is negative; callers clamp where negative input is
/// an expected configuration (wrath AoE).
pub fn apply_damage(unit: &CombatUnitState, damage: i32) -> DamageResult {
    assert!(damage >= 0, "damage must be >= 0");

    let before_hp = unit.current_hp;
    let after_hp = (before_hp - damage).max(0);

    DamageResult {
        unit_after: unit.with_current_hp(after_hp),
        damage_applied: before_hp - after_hp,
        died_now: before_hp > 0 && after_hp == 0,
    }
}
