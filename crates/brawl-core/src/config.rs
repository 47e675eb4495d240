//! Range-validated configuration bags.
//!
//! A rejected value here means a broken caller or asset, so constructors
//! return a typed error instead of silently correcting. Clamping is never
//! applied at this layer.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    ARENA_MAX_X, ARENA_MAX_Z, ARENA_MIN_X, ARENA_MIN_Z, DEFAULT_ATTACK_RANGE,
    DEFAULT_BASE_ATTACK_DELAY, DEFAULT_MELEE_RANGE, DEFAULT_REPATH_DISTANCE_THRESHOLD,
    DEFAULT_SLOT_RADIUS, DEFAULT_STEERING_RADIUS, KNOCKBACK_DECAY_SPEED,
    KNOCKBACK_IMPULSE_STRENGTH, KNOCKBACK_MIN_VELOCITY_THRESHOLD, WRATH_CHARGE_PER_KILL,
    WRATH_DAMAGE, WRATH_IMPACT_DELAY_SECS, WRATH_MAX_CHARGE, WRATH_RADIUS,
};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be >= 0, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be >= 0, got {value}")]
    NegativeInt { field: &'static str, value: i32 },
    #[error("arena bounds are inverted: min {min} > max {max}")]
    InvertedBounds { min: f32, max: f32 },
}

fn non_negative(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value < 0.0 {
        Err(ConfigError::Negative { field, value })
    } else {
        Ok(value)
    }
}

fn non_negative_int(field: &'static str, value: i32) -> Result<i32, ConfigError> {
    if value < 0 {
        Err(ConfigError::NegativeInt { field, value })
    } else {
        Ok(value)
    }
}

/// Melee attack tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackConfig {
    pub attack_range: f32,
    pub base_attack_delay: f32,
}

impl AttackConfig {
    pub fn new(attack_range: f32, base_attack_delay: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            attack_range: non_negative("attack_range", attack_range)?,
            base_attack_delay: non_negative("base_attack_delay", base_attack_delay)?,
        })
    }
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            attack_range: DEFAULT_ATTACK_RANGE,
            base_attack_delay: DEFAULT_BASE_ATTACK_DELAY,
        }
    }
}

/// Movement AI tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementConfig {
    pub melee_range: f32,
    pub repath_distance_threshold: f32,
    pub steering_radius: f32,
    pub slot_radius: f32,
}

impl MovementConfig {
    pub fn new(
        melee_range: f32,
        repath_distance_threshold: f32,
        steering_radius: f32,
        slot_radius: f32,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            melee_range: non_negative("melee_range", melee_range)?,
            repath_distance_threshold: non_negative(
                "repath_distance_threshold",
                repath_distance_threshold,
            )?,
            steering_radius: non_negative("steering_radius", steering_radius)?,
            slot_radius: non_negative("slot_radius", slot_radius)?,
        })
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            melee_range: DEFAULT_MELEE_RANGE,
            repath_distance_threshold: DEFAULT_REPATH_DISTANCE_THRESHOLD,
            steering_radius: DEFAULT_STEERING_RADIUS,
            slot_radius: DEFAULT_SLOT_RADIUS,
        }
    }
}

/// Wrath ability tuning. `damage` may be any value; negative damage is
/// clamped to zero at application time by design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WrathConfig {
    pub charge_per_kill: i32,
    pub max_charge: i32,
    pub radius: f32,
    pub damage: i32,
    pub impact_delay_seconds: f32,
}

impl WrathConfig {
    pub fn new(
        charge_per_kill: i32,
        max_charge: i32,
        radius: f32,
        damage: i32,
        impact_delay_seconds: f32,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            charge_per_kill: non_negative_int("charge_per_kill", charge_per_kill)?,
            max_charge: non_negative_int("max_charge", max_charge)?,
            radius: non_negative("radius", radius)?,
            damage,
            impact_delay_seconds: non_negative("impact_delay_seconds", impact_delay_seconds)?,
        })
    }
}

impl Default for WrathConfig {
    fn default() -> Self {
        Self {
            charge_per_kill: WRATH_CHARGE_PER_KILL,
            max_charge: WRATH_MAX_CHARGE,
            radius: WRATH_RADIUS,
            damage: WRATH_DAMAGE,
            impact_delay_seconds: WRATH_IMPACT_DELAY_SECS,
        }
    }
}

/// Knockback impulse tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnockbackConfig {
    pub impulse_strength: f32,
    pub decay_speed: f32,
    pub min_velocity_threshold: f32,
}

impl KnockbackConfig {
    pub fn new(
        impulse_strength: f32,
        decay_speed: f32,
        min_velocity_threshold: f32,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            impulse_strength: non_negative("impulse_strength", impulse_strength)?,
            decay_speed: non_negative("decay_speed", decay_speed)?,
            min_velocity_threshold: non_negative("min_velocity_threshold", min_velocity_threshold)?,
        })
    }
}

impl Default for KnockbackConfig {
    fn default() -> Self {
        Self {
            impulse_strength: KNOCKBACK_IMPULSE_STRENGTH,
            decay_speed: KNOCKBACK_DECAY_SPEED,
            min_velocity_threshold: KNOCKBACK_MIN_VELOCITY_THRESHOLD,
        }
    }
}

/// Axis-aligned playable area in the X–Z plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl ArenaBounds {
    pub fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Result<Self, ConfigError> {
        if min_x > max_x {
            return Err(ConfigError::InvertedBounds {
                min: min_x,
                max: max_x,
            });
        }
        if min_z > max_z {
            return Err(ConfigError::InvertedBounds {
                min: min_z,
                max: max_z,
            });
        }
        Ok(Self {
            min_x,
            max_x,
            min_z,
            max_z,
        })
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min_x && point.x <= self.max_x && point.y >= self.min_z && point.y <= self.max_z
    }
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            min_x: ARENA_MIN_X,
            max_x: ARENA_MAX_X,
            min_z: ARENA_MIN_Z,
            max_z: ARENA_MAX_Z,
        }
    }
}
