//! Unit stat blocks and trait modifiers.

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Final per-unit stats. `atkspd` is a delay multiplier: a larger value
/// means slower attacks (see cooldown computation in the sim crate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: i32,
    pub atk: i32,
    pub speed: i32,
    pub atkspd: i32,
}

impl StatBlock {
    pub fn new(hp: i32, atk: i32, speed: i32, atkspd: i32) -> Self {
        Self {
            hp,
            atk,
            speed,
            atkspd,
        }
    }

    /// Clamp every field to at least `min`.
    pub fn clamp_min(self, min: i32) -> Self {
        Self {
            hp: self.hp.max(min),
            atk: self.atk.max(min),
            speed: self.speed.max(min),
            atkspd: self.atkspd.max(min),
        }
    }
}

/// Additive stat adjustment contributed by one cosmetic trait.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatModifier {
    pub hp: i32,
    pub atk: i32,
    pub speed: i32,
    pub atkspd: i32,
}

impl StatModifier {
    pub const ZERO: StatModifier = StatModifier {
        hp: 0,
        atk: 0,
        speed: 0,
        atkspd: 0,
    };

    pub fn new(hp: i32, atk: i32, speed: i32, atkspd: i32) -> Self {
        Self {
            hp,
            atk,
            speed,
            atkspd,
        }
    }

    /// Sum a set of modifiers into one.
    pub fn combine(modifiers: impl IntoIterator<Item = StatModifier>) -> StatModifier {
        modifiers
            .into_iter()
            .fold(StatModifier::ZERO, |acc, m| acc + m)
    }
}

impl Add for StatModifier {
    type Output = StatModifier;

    fn add(self, rhs: StatModifier) -> StatModifier {
        StatModifier {
            hp: self.hp + rhs.hp,
            atk: self.atk + rhs.atk,
            speed: self.speed + rhs.speed,
            atkspd: self.atkspd + rhs.atkspd,
        }
    }
}

impl Add<StatModifier> for StatBlock {
    type Output = StatBlock;

    fn add(self, rhs: StatModifier) -> StatBlock {
        StatBlock {
            hp: self.hp + rhs.hp,
            atk: self.atk + rhs.atk,
            speed: self.speed + rhs.speed,
            atkspd: self.atkspd + rhs.atkspd,
        }
    }
}
