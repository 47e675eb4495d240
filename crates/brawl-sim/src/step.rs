//! One simulation tick.
//!
//! A step consumes the previous snapshot and produces the next one plus
//! the events raised while resolving it. Phases run in a fixed order:
//! knockback decay and displacement, movement, position sync, attack
//! resolution in ascending unit id, aliveness sync, elapsed-time advance.
//! The fixed order and ordered attack pass are what keep identical
//! inputs producing identical outputs.

use brawl_ai::movement::{MovementService, MovementTickContext};
use brawl_ai::targeting::TargetableUnit;
use brawl_core::config::{AttackConfig, KnockbackConfig, MovementConfig, WrathConfig};
use brawl_core::events::BattleEvent;
use brawl_core::state::{BattleContext, BattleUnitRuntime, MovementAgentState, PerSide, WrathMeter};

use crate::systems::{attack, knockback, wrath};

/// Snapshot plus timing for one tick. `current_time_sec` is the
/// simulation time the tick resolves at, used for cooldown checks and
/// event timestamps.
pub struct BattleStepInput {
    pub context: BattleContext,
    pub delta_time_sec: f32,
    pub current_time_sec: f32,
}

impl BattleStepInput {
    /// # Panics
    /// Panics if `delta_time_sec` is negative.
    pub fn new(context: BattleContext, delta_time_sec: f32, current_time_sec: f32) -> Self {
        assert!(delta_time_sec >= 0.0, "delta_time_sec must be >= 0");
        Self {
            context,
            delta_time_sec,
            current_time_sec,
        }
    }
}

pub trait BattleStepProcessor {
    fn step(&self, input: BattleStepInput) -> (BattleContext, Vec<BattleEvent>);
}

/// The stock step processor: both sides fight autonomously.
pub struct AutoBattleStepProcessor {
    movement_service: MovementService,
    attack_config: AttackConfig,
    movement_config: MovementConfig,
    knockback_config: KnockbackConfig,
    wrath_config: WrathConfig,
}

impl AutoBattleStepProcessor {
    pub fn new(
        movement_service: MovementService,
        attack_config: AttackConfig,
        movement_config: MovementConfig,
        knockback_config: KnockbackConfig,
        wrath_config: WrathConfig,
    ) -> Self {
        Self {
            movement_service,
            attack_config,
            movement_config,
            knockback_config,
            wrath_config,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            MovementService::with_defaults(),
            AttackConfig::default(),
            MovementConfig::default(),
            KnockbackConfig::default(),
            WrathConfig::default(),
        )
    }

    /// Decay each unit's impulse, then shift both position fragments by
    /// the decayed velocity. An impulse gained this tick therefore moves
    /// the unit starting next tick.
    fn apply_knockback(&self, units: &mut [BattleUnitRuntime], delta_time: f32) {
        for unit in units.iter_mut() {
            if !unit.knockback.has_velocity() {
                continue;
            }

            let decayed = knockback::decay(
                unit.knockback,
                delta_time,
                self.knockback_config.decay_speed,
                self.knockback_config.min_velocity_threshold,
            );
            let offset = knockback::displacement(decayed, delta_time);
            let movement = unit.movement.with_position(unit.movement.position + offset);
            let combat = unit.combat.with_position(unit.combat.position + offset);
            *unit = unit
                .with_movement(movement)
                .with_combat(combat)
                .with_knockback(decayed);
        }
    }

    /// Every unit's movement tick reads the same pre-movement views of
    /// allies and enemies; resolution order cannot leak into decisions.
    fn update_movement(&self, units: &mut [BattleUnitRuntime], delta_time: f32) {
        let mut movement: PerSide<Vec<MovementAgentState>> = PerSide::default();
        let mut targetable: PerSide<Vec<TargetableUnit>> = PerSide::default();
        for unit in units.iter() {
            movement.get_mut(unit.side).push(unit.movement.clone());
            targetable.get_mut(unit.side).push(TargetableUnit::new(
                unit.unit_id,
                unit.movement.position,
                unit.movement.is_alive,
            ));
        }

        for unit in units.iter_mut() {
            if !unit.movement.is_alive {
                continue;
            }

            let ctx = MovementTickContext {
                delta_time,
                allies: movement.get(unit.side),
                enemies: targetable.get(unit.side.opposite()),
                config: self.movement_config,
            };
            let updated = self.movement_service.tick(&unit.movement, &ctx);
            *unit = unit.with_movement(updated);
        }
    }

    /// Attacks resolve sequentially in ascending unit id against the
    /// evolving combat states: a unit killed earlier in the pass can no
    /// longer be attacked or attack back.
    fn process_attacks(
        &self,
        units: &mut [BattleUnitRuntime],
        current_time: f32,
        meters: &mut PerSide<WrathMeter>,
        events: &mut Vec<BattleEvent>,
    ) {
        let mut order: Vec<usize> = (0..units.len()).collect();
        order.sort_unstable_by_key(|&i| units[i].unit_id);

        for &attacker_idx in &order {
            if !units[attacker_idx].combat.is_alive() {
                continue;
            }
            let Some(target_idx) = nearest_enemy(units, attacker_idx) else {
                continue;
            };

            let attacker_combat = units[attacker_idx].combat;
            let attacker_side = units[attacker_idx].side;
            let target_combat = units[target_idx].combat;
            let target_side = units[target_idx].side;

            let result =
                attack::try_attack(&attacker_combat, &target_combat, current_time, &self.attack_config);
            if !result.success() {
                continue;
            }

            let pushed = knockback::apply_impulse(
                units[target_idx].knockback,
                attacker_combat.position,
                target_combat.position,
                self.knockback_config.impulse_strength,
            );

            units[attacker_idx] = units[attacker_idx].with_combat(result.attacker_after);
            units[target_idx] = units[target_idx]
                .with_combat(result.target_after)
                .with_knockback(pushed);

            events.push(BattleEvent::UnitDamaged {
                time_sec: current_time,
                unit_id: result.target_after.unit_id,
                position: result.target_after.position,
                damage_applied: result.damage_applied,
                attacker_position: attacker_combat.position,
            });

            if !result.target_after.is_alive() {
                events.push(BattleEvent::UnitKilled {
                    time_sec: current_time,
                    unit_id: result.target_after.unit_id,
                    side: target_side,
                });
                let charged = wrath::accumulate_on_enemy_kill(
                    *meters.get(attacker_side),
                    self.wrath_config.charge_per_kill,
                );
                meters.set(attacker_side, charged);
            }
        }
    }
}

impl BattleStepProcessor for AutoBattleStepProcessor {
    fn step(&self, input: BattleStepInput) -> (BattleContext, Vec<BattleEvent>) {
        let mut units = input.context.units().to_vec();
        let mut meters = *input.context.wrath_meters();
        let mut events = Vec::new();

        self.apply_knockback(&mut units, input.delta_time_sec);
        self.update_movement(&mut units, input.delta_time_sec);
        sync_positions(&mut units);
        self.process_attacks(&mut units, input.current_time_sec, &mut meters, &mut events);
        sync_aliveness(&mut units);

        let elapsed = input.context.elapsed_time_sec() + input.delta_time_sec;
        let next = BattleContext::new(units, elapsed, input.context.winner_side(), meters);
        (next, events)
    }
}

/// Nearest living opponent by squared combat-position distance; ties
/// break toward the earliest stored unit.
fn nearest_enemy(units: &[BattleUnitRuntime], attacker_idx: usize) -> Option<usize> {
    let attacker = &units[attacker_idx];
    let mut best: Option<usize> = None;
    let mut best_dist_sq = f32::MAX;

    for (idx, candidate) in units.iter().enumerate() {
        if candidate.side == attacker.side || !candidate.combat.is_alive() {
            continue;
        }
        let dist_sq = attacker
            .combat
            .position
            .distance_squared(candidate.combat.position);
        if dist_sq < best_dist_sq {
            best_dist_sq = dist_sq;
            best = Some(idx);
        }
    }

    best
}

/// Movement owns position while a unit lives.
fn sync_positions(units: &mut [BattleUnitRuntime]) {
    for unit in units.iter_mut() {
        if !unit.movement.is_alive {
            continue;
        }
        let combat = unit.combat.with_position(unit.movement.position);
        *unit = unit.with_combat(combat);
    }
}

/// Combat owns aliveness; movement follows it after the attack pass.
fn sync_aliveness(units: &mut [BattleUnitRuntime]) {
    for unit in units.iter_mut() {
        if unit.movement.is_alive == unit.combat.is_alive() {
            continue;
        }
        let movement = unit.movement.with_alive(unit.combat.is_alive());
        *unit = unit.with_movement(movement);
    }
}
