//! Events emitted by the simulation for the presentation layer.
//!
//! Each tick produces a fresh, causally-ordered list; events are never
//! mutated after emission. The consumer can drive damage flashes, death
//! sequences, and ability telegraph/impact visuals from this data alone.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::Side;
use crate::state::WrathCastCommand;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleEvent {
    /// A melee hit landed.
    UnitDamaged {
        time_sec: f32,
        unit_id: u32,
        position: Vec2,
        damage_applied: i32,
        attacker_position: Vec2,
    },
    /// A unit's hp reached zero this tick.
    UnitKilled {
        time_sec: f32,
        unit_id: u32,
        side: Side,
    },
    /// A wrath cast was accepted; telegraph VFX can start immediately.
    WrathCastStarted {
        time_sec: f32,
        side: Side,
        cast: WrathCastCommand,
    },
    /// A pending wrath impact landed and its AoE damage was applied.
    WrathImpactApplied {
        time_sec: f32,
        side: Side,
        cast: WrathCastCommand,
        affected_count: usize,
    },
}

impl BattleEvent {
    /// Simulation time the event was emitted at.
    pub fn time_sec(&self) -> f32 {
        match self {
            BattleEvent::UnitDamaged { time_sec, .. }
            | BattleEvent::UnitKilled { time_sec, .. }
            | BattleEvent::WrathCastStarted { time_sec, .. }
            | BattleEvent::WrathImpactApplied { time_sec, .. } => *time_sec,
        }
    }
}
