//! Target selection.

use glam::Vec2;

/// Minimal view of a unit for targeting purposes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetableUnit {
    pub unit_id: u32,
    pub position: Vec2,
    pub is_alive: bool,
}

impl TargetableUnit {
    pub fn new(unit_id: u32, position: Vec2, is_alive: bool) -> Self {
        Self {
            unit_id,
            position,
            is_alive,
        }
    }
}

pub trait TargetSelector {
    /// Pick a target id for `self_unit`, or `None` if no enemy is alive.
    fn select_target(
        &self,
        self_unit: &TargetableUnit,
        enemies: &[TargetableUnit],
        current_target_id: Option<u32>,
    ) -> Option<u32>;
}

/// Sticky nearest-enemy selection: keep the current target while it
/// lives, otherwise switch to the closest living enemy (squared
/// distance, ties broken by first occurrence in the enemy list).
#[derive(Debug, Default)]
pub struct NearestTargetSelector;

impl TargetSelector for NearestTargetSelector {
    fn select_target(
        &self,
        self_unit: &TargetableUnit,
        enemies: &[TargetableUnit],
        current_target_id: Option<u32>,
    ) -> Option<u32> {
        if let Some(current) = current_target_id {
            if enemies.iter().any(|e| e.is_alive && e.unit_id == current) {
                return Some(current);
            }
        }

        let mut best: Option<(u32, f32)> = None;
        for enemy in enemies {
            if !enemy.is_alive {
                continue;
            }
            let dist_sq = self_unit.position.distance_squared(enemy.position);
            match best {
                Some((_, best_dist)) if dist_sq >= best_dist => {}
                _ => best = Some((enemy.unit_id, dist_sq)),
            }
        }

        best.map(|(id, _)| id)
    }
}
