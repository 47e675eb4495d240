//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which army a unit belongs to. Left spawns at negative X, Right at positive X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Cosmetic unit shape. Drives stat modifiers and presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitShape {
    Cube,
    Sphere,
}

impl UnitShape {
    pub const ALL: [UnitShape; 2] = [UnitShape::Cube, UnitShape::Sphere];
}

/// Cosmetic unit size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitSize {
    Small,
    Big,
}

impl UnitSize {
    pub const ALL: [UnitSize; 2] = [UnitSize::Small, UnitSize::Big];
}

/// Cosmetic unit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitColor {
    Red,
    Green,
    Blue,
}

impl UnitColor {
    pub const ALL: [UnitColor; 3] = [UnitColor::Red, UnitColor::Green, UnitColor::Blue];
}

/// Battle phase (top-level state machine).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    #[default]
    Preparation,
    Running,
    Finished,
}

/// Spawn formation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormationKind {
    Line,
    Grid,
    Wedge,
    Staggered,
}

/// Why an attack attempt did not land. First matching reason wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackFailureReason {
    AttackerDead,
    TargetDead,
    OutOfRange,
    CooldownNotReady,
}

/// Why a wrath cast attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrathCastFailureReason {
    /// The requesting controller does not own this ability.
    NotOwnerController,
    /// The meter has not reached full charge.
    MeterNotFull,
    /// The target point failed validation (e.g. outside the arena).
    InvalidTarget,
}
