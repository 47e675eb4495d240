//! Default tuning parameters.

use crate::stats::StatBlock;

// --- Army generation ---

/// Base stats every unit starts from before trait modifiers.
pub const DEFAULT_BASE_STATS: StatBlock = StatBlock {
    hp: 100,
    atk: 10,
    speed: 10,
    atkspd: 1,
};

/// Units per army when not overridden.
pub const DEFAULT_UNITS_PER_ARMY: usize = 20;

// --- Formations ---

/// Half-distance between the two armies' front rows along X.
pub const DEFAULT_SPAWN_OFFSET_X: f32 = 8.0;

/// Line formation spacing along Z.
pub const LINE_SPACING: f32 = 1.5;

/// Grid/staggered formation shape.
pub const GRID_COLUMNS: usize = 5;
pub const GRID_ROW_SPACING: f32 = 1.5;
pub const GRID_COLUMN_SPACING: f32 = 1.5;

/// Wedge formation spacing.
pub const WEDGE_DEPTH_SPACING: f32 = 1.2;
pub const WEDGE_WIDTH_SPACING: f32 = 1.0;

// --- Tick ---

/// Simulation step length the driver is expected to use.
pub const DEFAULT_FIXED_TICK_INTERVAL: f32 = 0.02;

// --- Movement ---

pub const DEFAULT_MELEE_RANGE: f32 = 1.5;
pub const DEFAULT_REPATH_DISTANCE_THRESHOLD: f32 = 2.0;
pub const DEFAULT_STEERING_RADIUS: f32 = 1.2;
pub const DEFAULT_SLOT_RADIUS: f32 = 1.0;

// --- Attack ---

pub const DEFAULT_ATTACK_RANGE: f32 = 1.5;
pub const DEFAULT_BASE_ATTACK_DELAY: f32 = 1.0;

// --- Knockback ---

pub const KNOCKBACK_IMPULSE_STRENGTH: f32 = 6.0;
pub const KNOCKBACK_DECAY_SPEED: f32 = 50.0;
pub const KNOCKBACK_MIN_VELOCITY_THRESHOLD: f32 = 0.001;

// --- Arena ---

pub const ARENA_MIN_X: f32 = -15.0;
pub const ARENA_MAX_X: f32 = 15.0;
pub const ARENA_MIN_Z: f32 = -20.0;
pub const ARENA_MAX_Z: f32 = 20.0;

// --- Wrath ---

pub const WRATH_CHARGE_PER_KILL: i32 = 20;
pub const WRATH_MAX_CHARGE: i32 = 100;
pub const WRATH_RADIUS: f32 = 4.0;
pub const WRATH_DAMAGE: i32 = 80;
pub const WRATH_IMPACT_DELAY_SECS: f32 = 0.35;
