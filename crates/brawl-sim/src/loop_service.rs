//! Top-level battle driver.
//!
//! Owns the current snapshot, the phase machine, the queued and pending
//! wrath work, and the per-tick event list. The driver calling `tick` at
//! a fixed interval is outside this crate; everything here is pure state
//! plumbing and stays deterministic.

use tracing::debug;

use brawl_core::config::WrathConfig;
use brawl_core::enums::{BattlePhase, Side};
use brawl_core::events::BattleEvent;
use brawl_core::state::{BattleContext, BattleUnitRuntime, WrathCastCommand, WrathMeter};
use brawl_procgen::army::ArmyPair;

use crate::context_factory::BattleContextFactory;
use crate::state_machine::BattleStateMachine;
use crate::step::{BattleStepInput, BattleStepProcessor};
use crate::systems::wrath;

pub struct BattleLoopService {
    context_factory: BattleContextFactory,
    step_processor: Box<dyn BattleStepProcessor>,
    wrath_config: WrathConfig,
    state_machine: BattleStateMachine,
    context: BattleContext,
    pending_impacts: Vec<WrathCastCommand>,
    queued_events: Vec<BattleEvent>,
    last_tick_events: Vec<BattleEvent>,
}

impl BattleLoopService {
    pub fn new(
        context_factory: BattleContextFactory,
        step_processor: Box<dyn BattleStepProcessor>,
        wrath_config: WrathConfig,
    ) -> Self {
        Self {
            context_factory,
            step_processor,
            wrath_config,
            state_machine: BattleStateMachine::new(),
            context: BattleContext::empty(),
            pending_impacts: Vec::new(),
            queued_events: Vec::new(),
            last_tick_events: Vec::new(),
        }
    }

    /// Stock wiring: default layout, autonomous step processor, stock
    /// wrath tuning.
    pub fn with_defaults() -> Self {
        Self::new(
            BattleContextFactory::with_default_layout(),
            Box::new(crate::step::AutoBattleStepProcessor::with_defaults()),
            WrathConfig::default(),
        )
    }

    pub fn phase(&self) -> BattlePhase {
        self.state_machine.current()
    }

    pub fn context(&self) -> &BattleContext {
        &self.context
    }

    /// Events raised during the most recent `tick` call, in causal order.
    pub fn last_tick_events(&self) -> &[BattleEvent] {
        &self.last_tick_events
    }

    /// Build the tick-zero snapshot from generated armies. Forces the
    /// phase back to Preparation first, so initializing mid-battle is a
    /// clean restart rather than an error.
    pub fn initialize(&mut self, armies: &ArmyPair) {
        self.ensure_preparation();
        self.pending_impacts.clear();
        self.queued_events.clear();
        self.last_tick_events.clear();

        self.context = self.context_factory.create(armies, &self.wrath_config);
        debug!(
            units = self.context.units().len(),
            "battle context initialized"
        );
    }

    pub fn start(&mut self) -> bool {
        self.state_machine.start()
    }

    /// Accept a cast command while Running. The telegraph event is
    /// reported with the next tick's events; the impact lands once the
    /// clock reaches its impact time.
    pub fn enqueue_wrath_cast(&mut self, command: WrathCastCommand) -> bool {
        if self.state_machine.current() != BattlePhase::Running {
            debug!(side = ?command.caster_side, "wrath cast rejected outside Running");
            return false;
        }

        debug!(
            side = ?command.caster_side,
            impact_time_sec = command.impact_time_sec,
            "wrath cast accepted"
        );
        self.pending_impacts.push(command);
        self.queued_events.push(BattleEvent::WrathCastStarted {
            time_sec: command.cast_time_sec,
            side: command.caster_side,
            cast: command,
        });
        true
    }

    /// Replace one side's meter in place. Used by the cast flow, which
    /// drains the meter it validated against.
    pub fn set_wrath_meter(&mut self, side: Side, meter: WrathMeter) {
        let mut meters = *self.context.wrath_meters();
        meters.set(side, meter);
        self.context = BattleContext::new(
            self.context.units().to_vec(),
            self.context.elapsed_time_sec(),
            self.context.winner_side(),
            meters,
        );
    }

    /// Advance the battle by one tick. Outside Running this only clears
    /// the event list.
    ///
    /// # Panics
    /// Panics if `delta_time_sec` is negative.
    pub fn tick(&mut self, delta_time_sec: f32, current_time_sec: f32) {
        assert!(delta_time_sec >= 0.0, "delta_time_sec must be >= 0");

        self.last_tick_events.clear();
        if self.state_machine.current() != BattlePhase::Running {
            return;
        }

        self.last_tick_events.append(&mut self.queued_events);

        let input = BattleStepInput::new(self.context.clone(), delta_time_sec, current_time_sec);
        let (next, step_events) = self.step_processor.step(input);
        self.last_tick_events.extend(step_events);

        let mut units = next.units().to_vec();
        self.apply_due_wrath_impacts(&mut units, current_time_sec);

        let winner = winner_of(&units);
        let draw = units.iter().all(|u| !u.combat.is_alive());
        self.context = BattleContext::new(
            units,
            next.elapsed_time_sec(),
            winner,
            *next.wrath_meters(),
        );

        if winner.is_some() || draw {
            debug!(winner = ?winner, "battle finished");
            self.state_machine.finish();
        }
    }

    /// Drop the battle entirely and return to Preparation.
    pub fn reset(&mut self) {
        self.ensure_preparation();
        self.pending_impacts.clear();
        self.queued_events.clear();
        self.last_tick_events.clear();
        self.context = BattleContext::empty();
    }

    fn ensure_preparation(&mut self) {
        if self.state_machine.current() == BattlePhase::Running {
            self.state_machine.finish();
        }
        if self.state_machine.current() == BattlePhase::Finished {
            self.state_machine.reset();
        }
    }

    fn apply_due_wrath_impacts(&mut self, units: &mut [BattleUnitRuntime], current_time_sec: f32) {
        // Reverse scan so removal does not shift unvisited entries.
        for i in (0..self.pending_impacts.len()).rev() {
            if self.pending_impacts[i].impact_time_sec > current_time_sec {
                continue;
            }
            let command = self.pending_impacts.remove(i);
            self.apply_wrath_impact(units, command, current_time_sec);
        }
    }

    fn apply_wrath_impact(
        &mut self,
        units: &mut [BattleUnitRuntime],
        command: WrathCastCommand,
        current_time_sec: f32,
    ) {
        let affected = wrath::units_in_radius(units, command.center, command.radius);
        // Emitted even for an empty area so the telegraph VFX can resolve.
        self.last_tick_events.push(BattleEvent::WrathImpactApplied {
            time_sec: current_time_sec,
            side: command.caster_side,
            cast: command,
            affected_count: affected.len(),
        });
        debug!(
            side = ?command.caster_side,
            affected = affected.len(),
            "wrath impact applied"
        );
        if affected.is_empty() {
            return;
        }

        let combat_states: Vec<_> = units.iter().map(|u| u.combat).collect();
        let result = wrath::apply_aoe(&combat_states, &affected, command.damage);

        for (unit, combat_after) in units.iter_mut().zip(&result.units_after) {
            let movement = unit.movement.with_alive(combat_after.is_alive());
            *unit = unit.with_combat(*combat_after).with_movement(movement);
        }

        for unit_id in result.killed_unit_ids {
            let Some(unit) = units.iter().find(|u| u.unit_id == unit_id) else {
                continue;
            };
            self.last_tick_events.push(BattleEvent::UnitKilled {
                time_sec: current_time_sec,
                unit_id,
                side: unit.side,
            });
        }
    }
}

/// The winning side once it is the only one with living units.
fn winner_of(units: &[BattleUnitRuntime]) -> Option<Side> {
    let mut left_alive = false;
    let mut right_alive = false;

    for unit in units {
        if !unit.combat.is_alive() {
            continue;
        }
        match unit.side {
            Side::Left => left_alive = true,
            Side::Right => right_alive = true,
        }
        if left_alive && right_alive {
            return None;
        }
    }

    match (left_alive, right_alive) {
        (true, false) => Some(Side::Left),
        (false, true) => Some(Side::Right),
        _ => None,
    }
}
