//! The wrath ability: a side-wide charge meter, a gated cast, and a
//! delayed friendly-fire area impact.

use std::collections::HashSet;

use glam::Vec2;

use brawl_core::config::{ArenaBounds, WrathConfig};
use brawl_core::enums::{Side, WrathCastFailureReason};
use brawl_core::state::{BattleUnitRuntime, CombatUnitState, WrathCastCommand, WrathMeter};

use super::health;

/// Meter gain on a confirmed enemy kill. The caller is responsible for
/// the side check; this only clamps and adds.
///
/// # Panics
/// Panics if `charge_per_kill` is negative.
pub fn accumulate_on_enemy_kill(meter: WrathMeter, charge_per_kill: i32) -> WrathMeter {
    assert!(charge_per_kill >= 0, "charge_per_kill must be >= 0");
    meter.with_current_charge(meter.current_charge() + charge_per_kill)
}

pub fn can_cast(meter: WrathMeter) -> bool {
    meter.can_cast()
}

/// Drain the meter after a successful cast.
pub fn consume(meter: WrathMeter) -> WrathMeter {
    meter.with_current_charge(0)
}

/// Units whose squared distance from `center` is within `radius²`.
/// A negative radius matches nothing.
pub fn units_in_radius(units: &[BattleUnitRuntime], center: Vec2, radius: f32) -> HashSet<u32> {
    let mut affected = HashSet::new();
    if radius < 0.0 {
        return affected;
    }

    let radius_sq = radius * radius;
    for unit in units {
        if unit.combat.position.distance_squared(center) <= radius_sq {
            affected.insert(unit.unit_id);
        }
    }
    affected
}

/// Result of applying the area damage.
#[derive(Debug, Clone, PartialEq)]
pub struct WrathApplyResult {
    pub units_after: Vec<CombatUnitState>,
    pub killed_unit_ids: Vec<u32>,
}

/// Damage every unit in the affected set, regardless of side. Negative
/// damage is clamped to zero rather than healing.
pub fn apply_aoe(
    units: &[CombatUnitState],
    affected_unit_ids: &HashSet<u32>,
    damage: i32,
) -> WrathApplyResult {
    let effective_damage = damage.max(0);
    let mut units_after = Vec::with_capacity(units.len());
    let mut killed_unit_ids = Vec::new();

    for unit in units {
        if !affected_unit_ids.contains(&unit.unit_id) {
            units_after.push(*unit);
            continue;
        }

        let result = health::apply_damage(unit, effective_damage);
        units_after.push(result.unit_after);
        if result.died_now {
            killed_unit_ids.push(unit.unit_id);
        }
    }

    WrathApplyResult {
        units_after,
        killed_unit_ids,
    }
}

/// Accepts or rejects a proposed wrath target point.
pub trait WrathTargetValidator {
    fn is_valid(&self, point: Vec2) -> bool;
}

/// Target is valid when it lies inside the arena.
#[derive(Debug, Clone, Copy)]
pub struct ArenaBoundsValidator {
    bounds: ArenaBounds,
}

impl ArenaBoundsValidator {
    pub fn new(bounds: ArenaBounds) -> Self {
        Self { bounds }
    }
}

impl WrathTargetValidator for ArenaBoundsValidator {
    fn is_valid(&self, point: Vec2) -> bool {
        self.bounds.contains(point)
    }
}

/// Outcome of a cast attempt. On failure the meter is returned untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TryCastResult {
    pub meter_after: WrathMeter,
    pub command: Option<WrathCastCommand>,
    pub failure: Option<WrathCastFailureReason>,
}

impl TryCastResult {
    pub fn success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Gatekeeper for one side's wrath casts: checks ownership, meter
/// charge, and target validity, in that order.
pub struct WrathCaster<V> {
    owner_side: Side,
    config: WrathConfig,
    validator: V,
}

impl<V: WrathTargetValidator> WrathCaster<V> {
    pub fn new(owner_side: Side, config: WrathConfig, validator: V) -> Self {
        Self {
            owner_side,
            config,
            validator,
        }
    }

    /// On success, drains the meter and schedules the impact a telegraph
    /// delay after `current_time_sec`.
    pub fn try_cast(
        &self,
        meter: WrathMeter,
        controller_side: Side,
        target_point: Vec2,
        current_time_sec: f32,
    ) -> TryCastResult {
        let refuse = |failure| TryCastResult {
            meter_after: meter,
            command: None,
            failure: Some(failure),
        };

        if controller_side != self.owner_side {
            return refuse(WrathCastFailureReason::NotOwnerController);
        }
        if !can_cast(meter) {
            return refuse(WrathCastFailureReason::MeterNotFull);
        }
        if !self.validator.is_valid(target_point) {
            return refuse(WrathCastFailureReason::InvalidTarget);
        }

        let command = WrathCastCommand::new(
            self.owner_side,
            target_point,
            self.config.radius,
            self.config.damage,
            current_time_sec,
            current_time_sec + self.config.impact_delay_seconds,
        );

        TryCastResult {
            meter_after: consume(meter),
            command: Some(command),
            failure: None,
        }
    }
}
