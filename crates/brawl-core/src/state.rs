//! Battle state fragments and the per-tick snapshot.
//!
//! Everything here is a value type: the step orchestrator never mutates a
//! snapshot in place, it produces a replacement. Presentation code holding
//! a previous `BattleContext` therefore always sees consistent history.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{Side, UnitColor, UnitShape, UnitSize};

/// Melee combat fragment of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatUnitState {
    pub unit_id: u32,
    pub position: Vec2,
    pub current_hp: i32,
    pub attack: i32,
    /// Delay multiplier, not a rate: larger means slower attacks.
    pub attack_speed: i32,
    pub next_attack_time_sec: f32,
}

impl CombatUnitState {
    /// # Panics
    /// Panics if `current_hp`, `attack` or `attack_speed` is negative.
    pub fn new(
        unit_id: u32,
        position: Vec2,
        current_hp: i32,
        attack: i32,
        attack_speed: i32,
        next_attack_time_sec: f32,
    ) -> Self {
        assert!(current_hp >= 0, "current_hp must be >= 0");
        assert!(attack >= 0, "attack must be >= 0");
        assert!(attack_speed >= 0, "attack_speed must be >= 0");
        Self {
            unit_id,
            position,
            current_hp,
            attack,
            attack_speed,
            next_attack_time_sec,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn with_current_hp(self, current_hp: i32) -> Self {
        Self::new(
            self.unit_id,
            self.position,
            current_hp,
            self.attack,
            self.attack_speed,
            self.next_attack_time_sec,
        )
    }

    pub fn with_position(self, position: Vec2) -> Self {
        Self { position, ..self }
    }

    pub fn with_next_attack_time_sec(self, next_attack_time_sec: f32) -> Self {
        Self {
            next_attack_time_sec,
            ..self
        }
    }
}

/// Movement fragment of a unit.
///
/// `current_path` is a finite waypoint sequence that is replaced on repath,
/// never appended to. `last_path_target_position` remembers where the
/// target stood when the path was built, for the repath-threshold check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementAgentState {
    pub unit_id: u32,
    pub is_alive: bool,
    pub speed: f32,
    pub position: Vec2,
    pub target_id: Option<u32>,
    pub current_path: Vec<Vec2>,
    pub last_path_target_position: Option<Vec2>,
}

impl MovementAgentState {
    /// # Panics
    /// Panics if `speed` is negative.
    pub fn new(
        unit_id: u32,
        is_alive: bool,
        speed: f32,
        position: Vec2,
        target_id: Option<u32>,
        current_path: Vec<Vec2>,
        last_path_target_position: Option<Vec2>,
    ) -> Self {
        assert!(speed >= 0.0, "speed must be >= 0");
        Self {
            unit_id,
            is_alive,
            speed,
            position,
            target_id,
            current_path,
            last_path_target_position,
        }
    }

    pub fn with_position(&self, position: Vec2) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    pub fn with_alive(&self, is_alive: bool) -> Self {
        Self {
            is_alive,
            ..self.clone()
        }
    }
}

/// Transient knockback impulse. The default value is the "no impulse"
/// sentinel; decay snaps back to it rather than leaving a tiny residue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KnockbackState {
    pub velocity: Vec2,
}

impl KnockbackState {
    pub fn new(velocity: Vec2) -> Self {
        Self { velocity }
    }

    pub fn has_velocity(&self) -> bool {
        self.velocity != Vec2::ZERO
    }

    /// Impulses stack additively; simultaneous hits compound.
    pub fn with_added_impulse(self, impulse: Vec2) -> Self {
        Self {
            velocity: self.velocity + impulse,
        }
    }
}

/// Side-wide ability charge meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrathMeter {
    current_charge: i32,
    max_charge: i32,
}

impl WrathMeter {
    /// Charge is clamped into `[0, max_charge]`.
    ///
    /// # Panics
    /// Panics if either argument is negative.
    pub fn new(current_charge: i32, max_charge: i32) -> Self {
        assert!(max_charge >= 0, "max_charge must be >= 0");
        assert!(current_charge >= 0, "current_charge must be >= 0");
        Self {
            current_charge: current_charge.min(max_charge),
            max_charge,
        }
    }

    pub fn current_charge(&self) -> i32 {
        self.current_charge
    }

    pub fn max_charge(&self) -> i32 {
        self.max_charge
    }

    pub fn can_cast(&self) -> bool {
        self.current_charge >= self.max_charge
    }

    /// Fill fraction in `[0, 1]` for meter display.
    pub fn normalized(&self) -> f32 {
        if self.max_charge <= 0 {
            1.0
        } else {
            self.current_charge as f32 / self.max_charge as f32
        }
    }

    pub fn with_current_charge(self, current_charge: i32) -> Self {
        Self::new(current_charge, self.max_charge)
    }
}

/// A scheduled wrath cast: telegraphed at `cast_time_sec`, lands at
/// `impact_time_sec`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WrathCastCommand {
    pub caster_side: Side,
    pub center: Vec2,
    pub radius: f32,
    pub damage: i32,
    pub cast_time_sec: f32,
    pub impact_time_sec: f32,
}

impl WrathCastCommand {
    /// # Panics
    /// Panics if `radius` is negative or `impact_time_sec` precedes
    /// `cast_time_sec`.
    pub fn new(
        caster_side: Side,
        center: Vec2,
        radius: f32,
        damage: i32,
        cast_time_sec: f32,
        impact_time_sec: f32,
    ) -> Self {
        assert!(radius >= 0.0, "radius must be >= 0");
        assert!(
            impact_time_sec >= cast_time_sec,
            "impact must not precede cast"
        );
        Self {
            caster_side,
            center,
            radius,
            damage,
            cast_time_sec,
            impact_time_sec,
        }
    }
}

/// One unit as the battle sees it: identity, cosmetics, and the three
/// state fragments. Movement and combat position/aliveness are kept in
/// sync by the step orchestrator, not by the sub-services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleUnitRuntime {
    pub unit_id: u32,
    pub side: Side,
    pub shape: UnitShape,
    pub size: UnitSize,
    pub color: UnitColor,
    pub movement: MovementAgentState,
    pub combat: CombatUnitState,
    pub knockback: KnockbackState,
}

impl BattleUnitRuntime {
    pub fn with_movement(&self, movement: MovementAgentState) -> Self {
        Self {
            movement,
            ..self.clone()
        }
    }

    pub fn with_combat(&self, combat: CombatUnitState) -> Self {
        Self {
            combat,
            ..self.clone()
        }
    }

    pub fn with_knockback(&self, knockback: KnockbackState) -> Self {
        Self {
            knockback,
            ..self.clone()
        }
    }
}

/// Side-keyed pair. Used instead of a hash map so iteration order and
/// serialization are deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerSide<T> {
    pub left: T,
    pub right: T,
}

impl<T> PerSide<T> {
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn set(&mut self, side: Side, value: T) {
        *self.get_mut(side) = value;
    }
}

/// Complete immutable snapshot of the battle at one point in time.
///
/// Created once per battle and replaced (never mutated) every tick until
/// the loop resets to Preparation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleContext {
    units: Vec<BattleUnitRuntime>,
    elapsed_time_sec: f32,
    winner_side: Option<Side>,
    wrath_meters: PerSide<WrathMeter>,
}

impl BattleContext {
    /// # Panics
    /// Panics if `elapsed_time_sec` is negative.
    pub fn new(
        units: Vec<BattleUnitRuntime>,
        elapsed_time_sec: f32,
        winner_side: Option<Side>,
        wrath_meters: PerSide<WrathMeter>,
    ) -> Self {
        assert!(elapsed_time_sec >= 0.0, "elapsed_time_sec must be >= 0");
        Self {
            units,
            elapsed_time_sec,
            winner_side,
            wrath_meters,
        }
    }

    pub fn empty() -> Self {
        Self {
            units: Vec::new(),
            elapsed_time_sec: 0.0,
            winner_side: None,
            wrath_meters: PerSide::new(WrathMeter::new(0, 0), WrathMeter::new(0, 0)),
        }
    }

    pub fn units(&self) -> &[BattleUnitRuntime] {
        &self.units
    }

    pub fn elapsed_time_sec(&self) -> f32 {
        self.elapsed_time_sec
    }

    pub fn winner_side(&self) -> Option<Side> {
        self.winner_side
    }

    pub fn wrath_meters(&self) -> &PerSide<WrathMeter> {
        &self.wrath_meters
    }

    pub fn wrath_meter(&self, side: Side) -> WrathMeter {
        *self.wrath_meters.get(side)
    }
}
